//! Translatable site copy.

use crate::Language;
use serde::{Deserialize, Deserializer, Serialize};

/// A piece of copy in every supported language.
///
/// Older records stored plain strings; those deserialize as the same text in
/// all three languages.
///
/// # Examples
///
/// ```
/// use vitrine_core::{Language, TranslatableText};
///
/// let legacy: TranslatableText = serde_json::from_str("\"Olá\"").unwrap();
/// assert_eq!(legacy.get(Language::Es), "Olá");
///
/// let partial: TranslatableText = serde_json::from_str(r#"{"pt": "Sobre", "en": ""}"#).unwrap();
/// assert_eq!(partial.get(Language::En), "Sobre");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TranslatableText {
    /// Portuguese text
    pub pt: String,
    /// English text
    pub en: String,
    /// Spanish text
    pub es: String,
}

impl TranslatableText {
    /// Build from explicit translations.
    pub fn new(pt: impl Into<String>, en: impl Into<String>, es: impl Into<String>) -> Self {
        Self {
            pt: pt.into(),
            en: en.into(),
            es: es.into(),
        }
    }

    /// The same text in every language.
    pub fn uniform(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            pt: text.clone(),
            en: text.clone(),
            es: text,
        }
    }

    /// Text for `language`, falling back to Portuguese when the translation is empty.
    pub fn get(&self, language: Language) -> &str {
        let text = self.raw(language);
        if text.is_empty() { &self.pt } else { text }
    }

    /// Text for `language` without fallback.
    pub fn raw(&self, language: Language) -> &str {
        match language {
            Language::Pt => &self.pt,
            Language::En => &self.en,
            Language::Es => &self.es,
        }
    }

    /// Replace the text for one language.
    pub fn set(&mut self, language: Language, text: impl Into<String>) {
        let slot = match language {
            Language::Pt => &mut self.pt,
            Language::En => &mut self.en,
            Language::Es => &mut self.es,
        };
        *slot = text.into();
    }

    /// True when no language has any text.
    pub fn is_empty(&self) -> bool {
        self.pt.is_empty() && self.en.is_empty() && self.es.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Plain(String),
    Map {
        #[serde(default)]
        pt: String,
        #[serde(default)]
        en: String,
        #[serde(default)]
        es: String,
    },
}

impl<'de> Deserialize<'de> for TranslatableText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<RawText>::deserialize(deserializer)? {
            Some(RawText::Plain(text)) => TranslatableText::uniform(text),
            Some(RawText::Map { pt, en, es }) => TranslatableText { pt, en, es },
            None => TranslatableText::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_only_touches_one_language() {
        let mut text = TranslatableText::uniform("Olá");
        text.set(Language::En, "Hello");
        assert_eq!(text.get(Language::En), "Hello");
        assert_eq!(text.get(Language::Pt), "Olá");
        assert_eq!(text.get(Language::Es), "Olá");
    }

    #[test]
    fn null_deserializes_as_empty() {
        let text: TranslatableText = serde_json::from_str("null").unwrap();
        assert!(text.is_empty());
    }
}
