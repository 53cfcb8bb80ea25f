//! Blog posts and the slug rule shared with the backend.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use vitrine_error::ValidationError;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("Valid non-word regex"));
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("Valid separator regex"));

/// Derive the URL slug for a title, the same way the backend does.
///
/// ```
/// use vitrine_core::slugify;
///
/// assert_eq!(slugify("  Importação: Guia 2024! "), "importação-guia-2024");
/// assert_eq!(slugify("a__b--c"), "a-b-c");
/// ```
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lower, "");
    let dashed = SEPARATORS.replace_all(&cleaned, "-");
    dashed.trim_matches('-').to_string()
}

/// Split a comma-separated tag field, trimming and dropping empties.
///
/// ```
/// use vitrine_core::parse_tags;
///
/// assert_eq!(parse_tags(" comex, , logística ,"), vec!["comex", "logística"]);
/// ```
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// A blog post as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Backend id
    pub id: String,
    /// URL slug derived from the title
    #[serde(default)]
    pub slug: String,
    /// Author display name
    #[serde(default = "default_author")]
    pub author_name: String,
    /// Editable fields
    #[serde(flatten)]
    pub draft: BlogPostDraft,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_author() -> String {
    "Admin".to_string()
}

impl BlogPost {
    /// Case-insensitive match on title or excerpt.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.draft.title.to_lowercase().contains(&query)
            || self.draft.excerpt.to_lowercase().contains(&query)
    }

    /// Publication date formatted for display.
    pub fn display_date(&self) -> String {
        self.created_at.format("%d/%m/%Y").to_string()
    }
}

/// The editable part of a blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct BlogPostDraft {
    /// Title
    pub title: String,
    /// Short summary shown in listings
    pub excerpt: String,
    /// Body
    pub content: String,
    /// Cover image
    pub cover_image: String,
    /// Category
    pub category: String,
    /// Tags
    pub tags: Vec<String>,
    /// Pinned on the blog page
    pub is_featured: bool,
    /// Visible on the public site
    pub is_published: bool,
    /// SEO title override
    pub meta_title: String,
    /// SEO description override
    pub meta_description: String,
    /// Area this post relates to
    pub related_area_id: Option<String>,
}

impl Default for BlogPostDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            cover_image: String::new(),
            category: String::new(),
            tags: Vec::new(),
            is_featured: false,
            is_published: true,
            meta_title: String::new(),
            meta_description: String::new(),
            related_area_id: None,
        }
    }
}

impl BlogPostDraft {
    /// Start a builder with the backend defaults.
    pub fn builder() -> BlogPostDraftBuilder {
        BlogPostDraftBuilder::default()
    }

    /// Check the required fields.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("title", &self.title),
            ("excerpt", &self.excerpt),
            ("content", &self.content),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::empty(field));
            }
        }
        Ok(())
    }

    /// Slug the backend will assign to this title.
    pub fn slug_preview(&self) -> String {
        slugify(&self.title)
    }

    /// Replace the tags from a comma-separated field.
    pub fn set_tags_from(&mut self, input: &str) -> &mut Self {
        self.tags = parse_tags(input);
        self
    }

    /// Tags joined back into the comma-separated form field.
    pub fn tags_field(&self) -> String {
        self.tags.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_drops_punctuation_and_collapses_separators() {
        assert_eq!(slugify("Hello,  World"), "hello-world");
        assert_eq!(slugify("--Trade & Logistics--"), "trade-logistics");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn validation_names_first_missing_field() {
        let draft = BlogPostDraft::builder().title("Post").content("Body").build().unwrap();
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("excerpt"));
    }

    #[test]
    fn post_defaults_author_and_matches_excerpt() {
        let post: BlogPost = serde_json::from_str(
            r#"{"id": "p1", "slug": "post", "title": "Post", "excerpt": "Sobre Frete Marítimo",
                "content": "c", "created_at": "2024-03-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(post.author_name, "Admin");
        assert!(post.draft.is_published);
        assert!(post.matches("frete"));
        assert!(!post.matches("aéreo"));
        assert_eq!(post.display_date(), "01/03/2024");
    }
}
