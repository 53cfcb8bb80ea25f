//! Supported content languages.

use serde::{Deserialize, Serialize};

/// Language a piece of site copy is written in.
///
/// Portuguese is the source language and the fallback for missing translations.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    /// Portuguese
    #[default]
    Pt,
    /// English
    En,
    /// Spanish
    Es,
}

impl Language {
    /// Two-letter code, as stored by the backend.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Flag shown by the language selector.
    pub fn flag(&self) -> &'static str {
        match self {
            Language::Pt => "🇧🇷",
            Language::En => "🇺🇸",
            Language::Es => "🇪🇸",
        }
    }
}
