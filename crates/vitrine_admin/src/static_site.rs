//! Rendering the standalone site from a `config.json` file.
//!
//! The static variant has no backend: the operator edits `config.json` by
//! hand and the renderer turns each section into an HTML fragment. Copy
//! fields accept either a plain string or a `{pt, en, es}` object.

use serde::{Deserialize, Serialize};
use std::path::Path;
use vitrine_core::{Language, TranslatableText};
use vitrine_error::{JsonError, StorageError, StorageErrorKind, VitrineResult};

/// Lucide icon used when a differential names none.
pub const DEFAULT_ICON: &str = "star";

/// Site identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Logo URL
    pub logo: String,
    /// Default language
    pub language: Option<Language>,
}

/// Hero banner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroSection {
    /// Background video
    pub video_url: String,
    /// Headline
    pub title: TranslatableText,
    /// Tagline
    pub subtitle: TranslatableText,
    /// Call-to-action label
    pub cta_text: TranslatableText,
}

/// About block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutSection {
    /// Heading
    pub title: TranslatableText,
    /// First paragraph
    pub paragraph1: TranslatableText,
    /// Second paragraph
    pub paragraph2: TranslatableText,
    /// Side image
    pub image: String,
}

/// Differential card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticDifferential {
    /// Lucide icon name
    pub icon: String,
    /// Heading
    pub title: TranslatableText,
    /// Body
    pub description: TranslatableText,
}

/// Business area card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticArea {
    /// Card image
    pub image: String,
    /// Heading
    pub title: TranslatableText,
    /// Body
    pub description: TranslatableText,
    /// Shows the specialty badge instead of the sector badge
    pub is_specialty: bool,
}

/// Number in the stats band.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticStat {
    /// Display value such as `"500+"`
    pub value: String,
    /// Caption
    pub label: TranslatableText,
}

/// Contact block and social links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticContact {
    /// Postal address
    pub address: String,
    /// Phone
    pub phone: String,
    /// E-mail
    pub email: String,
    /// WhatsApp number in any format
    pub whatsapp: String,
    /// LinkedIn URL
    pub linkedin: String,
    /// Instagram URL
    pub instagram: String,
    /// Facebook URL
    pub facebook: String,
}

impl StaticContact {
    /// Click-to-chat link. Non-digits are stripped from the number.
    pub fn whatsapp_link(&self) -> String {
        let digits: String = self.whatsapp.chars().filter(|c| c.is_ascii_digit()).collect();
        format!("https://wa.me/{}", digits)
    }

    /// Social links as (network, url) pairs, empty URLs included.
    pub fn social_links(&self) -> [(&'static str, &str); 3] {
        [
            ("linkedin", self.linkedin.as_str()),
            ("instagram", self.instagram.as_str()),
            ("facebook", self.facebook.as_str()),
        ]
    }
}

/// Contents of `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticSiteConfig {
    /// Identity
    pub site: SiteSection,
    /// Hero banner
    pub hero: HeroSection,
    /// About block
    pub about: AboutSection,
    /// Differential cards
    pub differentials: Vec<StaticDifferential>,
    /// Area cards
    pub areas: Vec<StaticArea>,
    /// Stats band
    pub stats: Vec<StaticStat>,
    /// Contact block
    pub contact: StaticContact,
}

impl StaticSiteConfig {
    /// Parse a config document.
    pub fn from_json(json: &str) -> VitrineResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            tracing::error!(error = %e, "Invalid static site config");
            JsonError::new(e.to_string()).into()
        })
    }

    /// Read and parse a config file.
    #[tracing::instrument]
    pub async fn load(path: &Path) -> VitrineResult<Self> {
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read static site config");
            StorageError::new(StorageErrorKind::FileRead(format!("{}: {}", path.display(), e)))
        })?;
        Self::from_json(&json)
    }

    /// Language to render in: explicit choice, then the configured one, then Portuguese.
    pub fn resolve_language(&self, explicit: Option<Language>) -> Language {
        explicit.or(self.site.language).unwrap_or_default()
    }
}

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn badge_label(is_specialty: bool, language: Language) -> &'static str {
    match (is_specialty, language) {
        (true, Language::Pt) => "Nossa Especialidade",
        (true, Language::En) => "Our Specialty",
        (true, Language::Es) => "Nuestra Especialidad",
        (false, Language::Pt) => "Setor",
        (false, _) => "Sector",
    }
}

/// HTML fragments for each section, in page order.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct RenderedSite {
    language: Language,
    hero: String,
    about: String,
    differentials: String,
    areas: String,
    stats: String,
    contact: String,
}

impl RenderedSite {
    /// All sections concatenated.
    pub fn to_html(&self) -> String {
        [
            &self.hero,
            &self.about,
            &self.differentials,
            &self.areas,
            &self.stats,
            &self.contact,
        ]
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
    }
}

/// Renders a [`StaticSiteConfig`] in one language.
#[derive(Debug, Clone)]
pub struct StaticRenderer<'a> {
    config: &'a StaticSiteConfig,
    language: Language,
}

impl<'a> StaticRenderer<'a> {
    /// Renderer for `config`, with the language resolved from `explicit`.
    pub fn new(config: &'a StaticSiteConfig, explicit: Option<Language>) -> Self {
        Self {
            language: config.resolve_language(explicit),
            config,
        }
    }

    /// Language the fragments are written in.
    pub fn language(&self) -> Language {
        self.language
    }

    fn text(&self, text: &TranslatableText) -> String {
        escape_html(text.get(self.language))
    }

    fn hero(&self) -> String {
        let hero = &self.config.hero;
        format!(
            r##"<section class="hero">
  <video autoplay muted loop playsinline><source src="{video}"></video>
  <h1>{title}</h1>
  <p>{subtitle}</p>
  <a class="hero-cta" href="#contact">{cta}</a>
</section>"##,
            video = escape_html(&hero.video_url),
            title = self.text(&hero.title),
            subtitle = self.text(&hero.subtitle),
            cta = self.text(&hero.cta_text),
        )
    }

    fn about(&self) -> String {
        let about = &self.config.about;
        format!(
            r#"<section class="about" id="about">
  <h2>{title}</h2>
  <p>{p1}</p>
  <p>{p2}</p>
  <img src="{image}" alt="{title}">
</section>"#,
            title = self.text(&about.title),
            p1 = self.text(&about.paragraph1),
            p2 = self.text(&about.paragraph2),
            image = escape_html(&about.image),
        )
    }

    fn differentials(&self) -> String {
        self.config
            .differentials
            .iter()
            .map(|diff| {
                let icon = if diff.icon.is_empty() {
                    DEFAULT_ICON
                } else {
                    diff.icon.as_str()
                };
                format!(
                    r#"<div class="differential-card">
  <div class="differential-icon"><i data-lucide="{icon}"></i></div>
  <h3>{title}</h3>
  <p>{description}</p>
</div>"#,
                    icon = escape_html(icon),
                    title = self.text(&diff.title),
                    description = self.text(&diff.description),
                )
            })
            .collect()
    }

    fn areas(&self) -> String {
        self.config
            .areas
            .iter()
            .map(|area| {
                let class = if area.is_specialty {
                    "area-badge specialty"
                } else {
                    "area-badge"
                };
                let title = self.text(&area.title);
                format!(
                    r#"<div class="area-card">
  <img src="{image}" alt="{title}">
  <div class="area-card-overlay"></div>
  <div class="area-card-content">
    <span class="{class}">{badge}</span>
    <h3>{title}</h3>
    <p>{description}</p>
  </div>
</div>"#,
                    image = escape_html(&area.image),
                    badge = badge_label(area.is_specialty, self.language),
                    description = self.text(&area.description),
                )
            })
            .collect()
    }

    fn stats(&self) -> String {
        self.config
            .stats
            .iter()
            .map(|stat| {
                format!(
                    r#"<div class="stat-item">
  <div class="stat-value">{value}</div>
  <div class="stat-label">{label}</div>
</div>"#,
                    value = escape_html(&stat.value),
                    label = self.text(&stat.label),
                )
            })
            .collect()
    }

    fn contact(&self) -> String {
        let contact = &self.config.contact;
        let social: String = contact
            .social_links()
            .iter()
            .map(|(network, url)| {
                format!(
                    r#"<a class="social-{network}" href="{url}"></a>"#,
                    url = escape_html(url)
                )
            })
            .collect();
        format!(
            r#"<section class="contact" id="contact">
  <p class="contact-address">{address}</p>
  <p class="contact-phone">{phone}</p>
  <p class="contact-email">{email}</p>
  <div class="social">{social}</div>
  <a class="whatsapp-btn" href="{whatsapp}"></a>
</section>"#,
            address = escape_html(&contact.address),
            phone = escape_html(&contact.phone),
            email = escape_html(&contact.email),
            whatsapp = escape_html(&contact.whatsapp_link()),
        )
    }

    /// Render every section.
    #[tracing::instrument(skip(self), fields(language = %self.language))]
    pub fn render(&self) -> RenderedSite {
        RenderedSite {
            language: self.language,
            hero: self.hero(),
            about: self.about(),
            differentials: self.differentials(),
            areas: self.areas(),
            stats: self.stats(),
            contact: self.contact(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaping_covers_markup_and_quotes() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn explicit_language_wins_over_config() {
        let config = StaticSiteConfig::from_json(r#"{"site": {"language": "en"}}"#).unwrap();
        assert_eq!(config.resolve_language(Some(Language::Es)), Language::Es);
        assert_eq!(config.resolve_language(None), Language::En);
        assert_eq!(
            StaticSiteConfig::default().resolve_language(None),
            Language::Pt
        );
    }

    #[test]
    fn missing_icon_falls_back_to_star() {
        let config = StaticSiteConfig::from_json(
            r#"{"differentials": [{"title": "Qualidade"}, {"icon": "shield", "title": "Segurança"}]}"#,
        )
        .unwrap();
        let html = StaticRenderer::new(&config, None).render();
        assert!(html.differentials().contains(r#"data-lucide="star""#));
        assert!(html.differentials().contains(r#"data-lucide="shield""#));
    }
}
