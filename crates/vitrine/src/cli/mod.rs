//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the vitrine binary.

mod auth;
mod commands;
mod context;
mod media;
mod site;
mod static_site;

pub use auth::{login, logout, whoami};
pub use commands::{Cli, Commands, MediaCommands, OutputFormat, StaticCommands};
pub use context::Context;
pub use media::handle_media_command;
pub use site::{list_messages, show_settings, show_stats};
pub use static_site::handle_static_command;
