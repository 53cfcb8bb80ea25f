//! Pasted external URLs.

use vitrine_error::ValidationError;

const VIDEO_EXTENSIONS: [&str; 3] = [".mp4", ".webm", ".mov"];

/// How the typed URL should be previewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlPreview {
    /// Nothing to show
    Hidden,
    /// Render as an image
    Image(String),
    /// Render as a video
    Video(String),
}

/// State of the URL tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalPath {
    input: String,
    preview_broken: bool,
}

impl ExternalPath {
    /// Current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input text. Clears a previous broken-preview mark.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
        self.preview_broken = false;
    }

    /// The image preview failed to load; hide it until the input changes.
    pub fn mark_preview_broken(&mut self) {
        self.preview_broken = true;
    }

    /// Live preview for the current input.
    ///
    /// ```
    /// use vitrine_picker::{ExternalPath, UrlPreview};
    ///
    /// let mut path = ExternalPath::default();
    /// path.set_input(" https://cdn.example.com/intro.MOV ");
    /// assert_eq!(path.preview(), UrlPreview::Video("https://cdn.example.com/intro.MOV".into()));
    /// ```
    pub fn preview(&self) -> UrlPreview {
        let url = self.input.trim();
        if url.is_empty() {
            return UrlPreview::Hidden;
        }
        let lower = url.to_ascii_lowercase();
        if VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
            UrlPreview::Video(url.to_string())
        } else if self.preview_broken {
            UrlPreview::Hidden
        } else {
            UrlPreview::Image(url.to_string())
        }
    }

    /// The trimmed URL, or a validation error when it is empty.
    #[track_caller]
    pub fn submit(&self) -> Result<String, ValidationError> {
        let url = self.input.trim();
        if url.is_empty() {
            return Err(ValidationError::empty("url"));
        }
        Ok(url.to_string())
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_image_preview_is_hidden_until_input_changes() {
        let mut path = ExternalPath::default();
        path.set_input("https://example.com/a.png");
        path.mark_preview_broken();
        assert_eq!(path.preview(), UrlPreview::Hidden);

        path.set_input("https://example.com/b.png");
        assert_eq!(path.preview(), UrlPreview::Image("https://example.com/b.png".into()));
    }

    #[test]
    fn whitespace_only_input_is_rejected() {
        let mut path = ExternalPath::default();
        path.set_input("   ");
        assert!(path.submit().is_err());
        assert_eq!(path.preview(), UrlPreview::Hidden);
    }
}
