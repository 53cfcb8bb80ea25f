//! Media library records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Broad category of a media item, derived from its MIME type prefix.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum MediaKind {
    /// `image/*`
    #[display("image")]
    Image,
    /// `video/*`
    #[display("video")]
    Video,
    /// Anything else
    #[display("file")]
    Other,
}

impl MediaKind {
    /// Classify a MIME-like string by prefix only.
    ///
    /// ```
    /// use vitrine_core::MediaKind;
    ///
    /// assert_eq!(MediaKind::from_mime("image/png"), MediaKind::Image);
    /// assert_eq!(MediaKind::from_mime("video/mp4"), MediaKind::Video);
    /// assert_eq!(MediaKind::from_mime("application/pdf"), MediaKind::Other);
    /// ```
    pub fn from_mime(file_type: &str) -> Self {
        if file_type.starts_with("image/") {
            MediaKind::Image
        } else if file_type.starts_with("video/") {
            MediaKind::Video
        } else {
            MediaKind::Other
        }
    }
}

/// One stored media asset, as listed by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Opaque identifier assigned by the server
    pub id: String,
    /// Display name
    pub filename: String,
    /// Locator for the asset content
    pub url: String,
    /// MIME type (e.g. "image/png")
    #[serde(default)]
    pub file_type: String,
    /// Size in bytes, when known
    #[serde(default)]
    pub size: Option<u64>,
    /// Library folder
    #[serde(default)]
    pub folder: Option<String>,
    /// Upload timestamp
    pub created_at: DateTime<Utc>,
}

impl MediaItem {
    /// Category derived from `file_type`.
    pub fn kind(&self) -> MediaKind {
        MediaKind::from_mime(&self.file_type)
    }

    /// True for `image/*` items.
    pub fn is_image(&self) -> bool {
        self.kind() == MediaKind::Image
    }

    /// True for `video/*` items.
    pub fn is_video(&self) -> bool {
        self.kind() == MediaKind::Video
    }

    /// Human-readable size, or "—" when the size is unknown.
    pub fn display_size(&self) -> String {
        match self.size {
            Some(bytes) => format_size(bytes),
            None => "—".to_string(),
        }
    }

    /// Creation date in the site's locale (dd/mm/yyyy).
    pub fn display_date(&self) -> String {
        self.created_at.format("%d/%m/%Y").to_string()
    }
}

/// Format a byte count with binary units.
///
/// ```
/// use vitrine_core::format_size;
///
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(2048), "2.0 KB");
/// assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Response body of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedMedia {
    /// Server status message
    #[serde(default)]
    pub message: String,
    /// The created library item
    pub file: MediaItem,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_size_renders_dash() {
        let item: MediaItem = serde_json::from_str(
            r#"{"id":"1","filename":"a.png","url":"u","file_type":"image/png","created_at":"2024-03-05T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(item.display_size(), "—");
        assert_eq!(item.display_date(), "05/03/2024");
        assert!(item.is_image());
    }

    #[test]
    fn offset_timestamps_parse() {
        let item: MediaItem = serde_json::from_str(
            r#"{"id":"1","filename":"v.mp4","url":"u","file_type":"video/mp4","size":10,"created_at":"2024-03-05T10:00:00.123456+00:00"}"#,
        )
        .unwrap();
        assert!(item.is_video());
        assert_eq!(item.size, Some(10));
    }
}
