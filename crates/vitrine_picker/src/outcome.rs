//! What the picker hands back to the parent field.

use serde::{Deserialize, Serialize};

/// The resolved media reference(s).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PickedMedia {
    /// Single-selection mode
    Single(String),
    /// Multiple-selection mode, in list order
    Multiple(Vec<String>),
}

impl PickedMedia {
    /// Wrap URLs according to the selection mode.
    ///
    /// Single mode keeps the first URL; `None` when there is nothing to pick.
    pub fn from_urls(urls: Vec<String>, multiple: bool) -> Option<Self> {
        if multiple {
            (!urls.is_empty()).then_some(PickedMedia::Multiple(urls))
        } else {
            urls.into_iter().next().map(PickedMedia::Single)
        }
    }

    /// Every URL, in order.
    pub fn urls(&self) -> Vec<&str> {
        match self {
            PickedMedia::Single(url) => vec![url.as_str()],
            PickedMedia::Multiple(urls) => urls.iter().map(String::as_str).collect(),
        }
    }
}

/// Quarter-turn rotation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Rotation {
    /// Upright
    #[default]
    None,
    /// 90 degrees clockwise
    Quarter,
    /// 180 degrees
    Half,
    /// 270 degrees clockwise
    ThreeQuarter,
}

impl Rotation {
    /// Angle in degrees.
    pub fn degrees(&self) -> u16 {
        match self {
            Rotation::None => 0,
            Rotation::Quarter => 90,
            Rotation::Half => 180,
            Rotation::ThreeQuarter => 270,
        }
    }

    /// Next quarter turn clockwise.
    pub fn clockwise(self) -> Self {
        match self {
            Rotation::None => Rotation::Quarter,
            Rotation::Quarter => Rotation::Half,
            Rotation::Half => Rotation::ThreeQuarter,
            Rotation::ThreeQuarter => Rotation::None,
        }
    }

    /// Next quarter turn counter-clockwise.
    pub fn counter_clockwise(self) -> Self {
        self.clockwise().clockwise().clockwise()
    }
}

/// Display adjustments chosen in the post-upload edit step.
///
/// The uploaded file itself is never modified; the parent receives these
/// values next to the URL and decides whether to persist them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct ImageAdjustments {
    rotation: Rotation,
    /// Percent, 100 is unchanged
    brightness: u16,
    /// Percent, 100 is unchanged
    contrast: u16,
}

impl Default for ImageAdjustments {
    fn default() -> Self {
        Self {
            rotation: Rotation::None,
            brightness: 100,
            contrast: 100,
        }
    }
}

impl ImageAdjustments {
    /// Highest brightness or contrast percentage.
    pub const MAX_PERCENT: u16 = 200;

    /// Rotate a quarter turn clockwise.
    pub fn rotate_right(&mut self) {
        self.rotation = self.rotation.clockwise();
    }

    /// Rotate a quarter turn counter-clockwise.
    pub fn rotate_left(&mut self) {
        self.rotation = self.rotation.counter_clockwise();
    }

    /// Set brightness, clamped to 0..=200.
    pub fn set_brightness(&mut self, percent: u16) {
        self.brightness = percent.min(Self::MAX_PERCENT);
    }

    /// Set contrast, clamped to 0..=200.
    pub fn set_contrast(&mut self, percent: u16) {
        self.contrast = percent.min(Self::MAX_PERCENT);
    }

    /// True when nothing differs from the original.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// CSS for the live preview.
    ///
    /// ```
    /// use vitrine_picker::ImageAdjustments;
    ///
    /// let mut adjustments = ImageAdjustments::default();
    /// adjustments.rotate_right();
    /// adjustments.set_brightness(120);
    /// assert_eq!(
    ///     adjustments.css(),
    ///     "transform: rotate(90deg); filter: brightness(120%) contrast(100%);"
    /// );
    /// ```
    pub fn css(&self) -> String {
        format!(
            "transform: rotate({}deg); filter: brightness({}%) contrast({}%);",
            self.rotation.degrees(),
            self.brightness,
            self.contrast
        )
    }
}

/// Everything delivered to the parent when a picker session completes.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct PickerOutcome {
    media: PickedMedia,
    adjustments: Option<ImageAdjustments>,
}

impl PickerOutcome {
    /// Outcome without edits.
    pub fn new(media: PickedMedia) -> Self {
        Self {
            media,
            adjustments: None,
        }
    }

    /// Outcome carrying edit-step adjustments.
    pub fn with_adjustments(media: PickedMedia, adjustments: ImageAdjustments) -> Self {
        Self {
            media,
            adjustments: Some(adjustments),
        }
    }

    /// Consume into the picked media.
    pub fn into_media(self) -> PickedMedia {
        self.media
    }
}
