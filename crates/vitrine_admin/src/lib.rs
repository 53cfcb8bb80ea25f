//! Admin editors and public views for the Vitrine site.
//!
//! Each page is a headless state holder over an [`ApiClient`]: it loads,
//! tracks a busy flag, and turns failures into [`Notification`]s instead of
//! returning them. The front end renders the state and forwards events.
//!
//! [`ApiClient`]: vitrine_client::ApiClient
//! [`Notification`]: vitrine_picker::Notification

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod areas;
mod blog;
mod dashboard;
mod feedback;
mod guard;
mod inbox;
mod landing;
mod login;
mod posts;
mod settings;
pub mod static_site;

pub use areas::{AreaForm, AreasEditor, CONFIRM_DELETE_AREA};
pub use blog::{BlogEditor, CONFIRM_DELETE_POST, PostForm};
pub use dashboard::{Dashboard, RECENT_MESSAGES};
pub use feedback::{REQUIRED_FIELDS, SESSION_EXPIRED};
pub use guard::{AdminPage, Route, resolve};
pub use inbox::{CONFIRM_DELETE_MESSAGE, Inbox};
pub use landing::{LATEST_POSTS, Landing};
pub use login::{LoginMode, LoginPage};
pub use posts::{BlogPage, PostView};
pub use settings::{Move, SettingsEditor};
pub use static_site::{StaticRenderer, StaticSiteConfig};
