//! Core data types for the Vitrine site client.
//!
//! This crate provides the records exchanged with the site API (media, settings,
//! areas, blog posts, contact messages, users) and the small pure helpers that
//! every front end needs (translation lookup, icon mapping, slug generation).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod area;
mod auth;
mod blog;
mod icon;
mod language;
mod media;
mod message;
mod settings;
mod stats;
mod text;

pub use area::{Area, AreaDraft, AreaDraftBuilder, SPECIALTY_BADGE, SPECIALTY_COLOR, SPECIALTY_OVERLAY};
pub use auth::{Credentials, Registration, TokenResponse, User};
pub use blog::{BlogPost, BlogPostDraft, BlogPostDraftBuilder, parse_tags, slugify};
pub use icon::Icon;
pub use language::Language;
pub use media::{MediaItem, MediaKind, UploadedMedia, format_size};
pub use message::{ContactMessage, ContactMessageDraft};
pub use settings::{
    AboutSettings, ContactInfo, CtaSize, DifferentialCard, FontWeight,
    HeroSettings, HorizontalAlign, HoverEffect, LogoPosition, LogoPreset, LogoSettings,
    SiteColors, SiteSettings, StatItem, VerticalAlign,
};
pub use stats::DashboardStats;
pub use text::TranslatableText;
