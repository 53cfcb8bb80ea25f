//! Areas of business shown as cards on the landing page.

use crate::{Icon, Language, TranslatableText};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_error::ValidationError;

/// Badge label forced on specialty areas.
pub const SPECIALTY_BADGE: &str = "NOSSA ESPECIALIDADE";
/// Badge color forced on specialty areas.
pub const SPECIALTY_COLOR: &str = "#D4AF37";
/// Image overlay forced on specialty areas.
pub const SPECIALTY_OVERLAY: &str = "rgba(212, 175, 55, 0.7)";

/// An area card as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    /// Backend id
    pub id: String,
    /// Editable fields
    #[serde(flatten)]
    pub draft: AreaDraft,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Area {
    /// Title in the requested language, falling back to Portuguese.
    pub fn title(&self, language: Language) -> &str {
        self.draft.localized(language, |d| (&d.title, &d.title_en, &d.title_es))
    }

    /// Description in the requested language, falling back to Portuguese.
    pub fn description(&self, language: Language) -> &str {
        self.draft
            .localized(language, |d| (&d.description, &d.description_en, &d.description_es))
    }

    /// Badge text in the requested language, falling back to Portuguese.
    pub fn badge_text(&self, language: Language) -> &str {
        self.draft
            .localized(language, |d| (&d.badge_text, &d.badge_text_en, &d.badge_text_es))
    }

    /// Button label in the requested language, falling back to Portuguese.
    pub fn button_text(&self, language: Language) -> &str {
        self.draft
            .localized(language, |d| (&d.button_text, &d.button_text_en, &d.button_text_es))
    }

    /// Title as a [`TranslatableText`].
    pub fn title_text(&self) -> TranslatableText {
        TranslatableText::new(&self.draft.title, &self.draft.title_en, &self.draft.title_es)
    }

    /// Resolved card icon.
    pub fn icon(&self) -> Icon {
        Icon::resolve(&self.draft.icon)
    }
}

/// The editable part of an area: what the admin form creates and updates.
///
/// Translations live in flat `_en` / `_es` fields, matching the backend
/// document shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct AreaDraft {
    /// Title (Portuguese)
    pub title: String,
    /// Title (English)
    pub title_en: String,
    /// Title (Spanish)
    pub title_es: String,
    /// Description (Portuguese)
    pub description: String,
    /// Description (English)
    pub description_en: String,
    /// Description (Spanish)
    pub description_es: String,
    /// Card image
    pub image_url: String,
    /// Icon name
    pub icon: String,
    /// Highlighted as the company specialty
    pub is_specialty: bool,
    /// Badge label (Portuguese)
    pub badge_text: String,
    /// Badge label (English)
    pub badge_text_en: String,
    /// Badge label (Spanish)
    pub badge_text_es: String,
    /// Badge color
    pub badge_color: String,
    /// Image overlay color
    pub overlay_color: String,
    /// Button label (Portuguese)
    pub button_text: String,
    /// Button label (English)
    pub button_text_en: String,
    /// Button label (Spanish)
    pub button_text_es: String,
    /// Button target
    pub button_link: String,
    /// Shown on the public site
    pub is_active: bool,
    /// Display position
    pub order: i32,
}

impl Default for AreaDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            title_en: String::new(),
            title_es: String::new(),
            description: String::new(),
            description_en: String::new(),
            description_es: String::new(),
            image_url: String::new(),
            icon: Icon::DEFAULT.to_string(),
            is_specialty: false,
            badge_text: "Setor".to_string(),
            badge_text_en: "Sector".to_string(),
            badge_text_es: "Sector".to_string(),
            badge_color: "#1E3A8A".to_string(),
            overlay_color: "rgba(30, 58, 138, 0.7)".to_string(),
            button_text: "Saiba Mais".to_string(),
            button_text_en: "Learn More".to_string(),
            button_text_es: "Saber Más".to_string(),
            button_link: String::new(),
            is_active: true,
            order: 0,
        }
    }
}

impl AreaDraft {
    /// Start a builder with the backend defaults.
    pub fn builder() -> AreaDraftBuilder {
        AreaDraftBuilder::default()
    }

    fn localized<'a>(
        &'a self,
        language: Language,
        pick: impl Fn(&'a Self) -> (&'a String, &'a String, &'a String),
    ) -> &'a str {
        let (pt, en, es) = pick(self);
        let value = match language {
            Language::Pt => pt,
            Language::En => en,
            Language::Es => es,
        };
        if value.is_empty() { pt } else { value }
    }

    /// Check the required fields.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty("title"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::empty("description"));
        }
        Ok(())
    }

    /// Toggle specialty status, forcing the specialty badge and colors when set.
    pub fn set_specialty(&mut self, is_specialty: bool) -> &mut Self {
        self.is_specialty = is_specialty;
        self.normalize_specialty();
        self
    }

    /// Force the specialty badge, badge color and overlay if this is a specialty.
    pub fn normalize_specialty(&mut self) {
        if self.is_specialty {
            self.badge_text = SPECIALTY_BADGE.to_string();
            self.badge_color = SPECIALTY_COLOR.to_string();
            self.overlay_color = SPECIALTY_OVERLAY.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_flattens_draft_fields() {
        let area: Area = serde_json::from_str(
            r#"{"id": "a1", "title": "Agro", "description": "Grãos", "title_en": "", "order": 2}"#,
        )
        .unwrap();
        assert_eq!(area.id, "a1");
        assert_eq!(area.title(Language::En), "Agro");
        assert_eq!(area.draft.order, 2);
        assert!(area.draft.is_active);
        assert_eq!(area.badge_text(Language::En), "Sector");
    }

    #[test]
    fn specialty_forces_gold_badge() {
        let mut draft = AreaDraft::builder()
            .title("Agronegócio")
            .description("Commodities")
            .build()
            .unwrap();
        draft.set_specialty(true);
        assert_eq!(draft.badge_text, SPECIALTY_BADGE);
        assert_eq!(draft.badge_color, SPECIALTY_COLOR);
        assert_eq!(draft.overlay_color, SPECIALTY_OVERLAY);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn blank_description_fails_validation() {
        let draft = AreaDraft::builder().title("X").description("   ").build().unwrap();
        assert!(draft.validate().is_err());
    }
}
