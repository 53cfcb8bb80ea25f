//! Headless media picker for Vitrine.
//!
//! A modal that lets a form field acquire a media URL through one of three
//! paths: uploading local files, pasting an external URL, or choosing from
//! the media library. The picker holds state and runs operations; rendering
//! is left to the front end.
//!
//! - [`MediaPicker`]: the shell, its tabs and the completion contract
//! - [`UploadPath`]: size and type screening, sequential upload, progress
//! - [`ExternalPath`]: URL input with live preview
//! - [`LibraryPath`]: search, type filter, sort, selection, deletion

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod external;
mod library;
mod notify;
mod outcome;
mod shell;
mod upload;

pub use config::{AcceptFilter, MAX_UPLOAD_BYTES, PickerConfig, PickerConfigBuilder};
pub use external::{ExternalPath, UrlPreview};
pub use library::{
    DeleteDone, DeleteJob, FetchDone, FetchJob, LibraryPath, SortOrder, TypeFilter, ViewMode,
    filter_and_sort,
};
pub use notify::{Notification, NotificationLevel, Notifications};
pub use outcome::{ImageAdjustments, PickedMedia, PickerOutcome, Rotation};
pub use shell::{MediaPicker, Tab, Ticket};
pub use upload::{EditStep, Rejection, UploadDone, UploadJob, UploadPath, UploadStatus};
