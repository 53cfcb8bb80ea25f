//! What the parent form asks of the picker.

use vitrine_error::{BuilderError, VitrineResult};

/// Uploads above this many bytes (50 MB) are rejected.
pub const MAX_UPLOAD_BYTES: u64 = 52_428_800;

/// Parsed `accept` attribute such as `image/*,video/*`.
///
/// An empty pattern or `*/*` accepts everything.
///
/// ```
/// use vitrine_picker::AcceptFilter;
///
/// let accept = AcceptFilter::parse("image/*, application/pdf");
/// assert!(accept.matches("image/webp"));
/// assert!(accept.matches("application/pdf"));
/// assert!(!accept.matches("video/mp4"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AcceptFilter {
    patterns: Vec<String>,
}

impl AcceptFilter {
    /// Parse a comma-separated MIME pattern list.
    pub fn parse(accept: &str) -> Self {
        let patterns = accept
            .split(',')
            .map(|p| p.trim().to_ascii_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self { patterns }
    }

    /// True when `mime` matches any pattern.
    pub fn matches(&self, mime: &str) -> bool {
        if self.patterns.is_empty() {
            return true;
        }
        let mime = mime.to_ascii_lowercase();
        self.patterns.iter().any(|pattern| {
            if pattern == "*" || pattern == "*/*" {
                true
            } else if let Some(prefix) = pattern.strip_suffix("/*") {
                mime.split_once('/').is_some_and(|(major, _)| major == prefix)
            } else {
                *pattern == mime
            }
        })
    }

    /// Original pattern list, comma-joined.
    pub fn as_attribute(&self) -> String {
        self.patterns.join(",")
    }
}

impl From<&str> for AcceptFilter {
    fn from(accept: &str) -> Self {
        Self::parse(accept)
    }
}

/// Picker configuration supplied by the parent field.
///
/// # Example
///
/// ```
/// use vitrine_picker::PickerConfig;
///
/// let config = PickerConfig::builder()
///     .accept("image/*")
///     .multiple(true)
///     .title("Galeria")
///     .build()
///     .unwrap();
/// assert!(*config.multiple());
/// assert!(config.accept().matches("image/png"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into), build_fn(private, name = "build_inner"))]
pub struct PickerConfig {
    /// Accepted MIME patterns
    #[builder(default = "AcceptFilter::parse(\"image/*,video/*\")")]
    accept: AcceptFilter,
    /// Resolve with a list instead of a single URL
    #[builder(default)]
    multiple: bool,
    /// Dialog title
    #[builder(default = "\"Selecionar Mídia\".to_string()")]
    title: String,
    /// Value currently held by the parent field
    #[builder(default)]
    current_value: Option<String>,
    /// Upload size ceiling in bytes
    #[builder(default = "MAX_UPLOAD_BYTES")]
    max_upload_bytes: u64,
}

impl PickerConfig {
    /// Start a builder.
    pub fn builder() -> PickerConfigBuilder {
        PickerConfigBuilder::default()
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            accept: AcceptFilter::parse("image/*,video/*"),
            multiple: false,
            title: "Selecionar Mídia".to_string(),
            current_value: None,
            max_upload_bytes: MAX_UPLOAD_BYTES,
        }
    }
}

impl PickerConfigBuilder {
    /// Build the configuration.
    pub fn build(&self) -> VitrineResult<PickerConfig> {
        self.build_inner()
            .map_err(|e| BuilderError::from(e.to_string()).into())
    }
}
