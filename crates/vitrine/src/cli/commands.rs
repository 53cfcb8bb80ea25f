//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Vitrine - manage an admin-driven marketing site from the terminal
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(about = "Manage an admin-driven marketing site from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Backend root URL, overriding the configuration files
    #[arg(long, global = true, env = "VITRINE_BASE_URL")]
    pub base_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the token for later commands
    Login {
        /// Account e-mail
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long, env = "VITRINE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored token
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Media library commands
    #[command(subcommand)]
    Media(MediaCommands),

    /// Print the site settings document
    Settings {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// List contact messages
    Messages {
        /// Only unread messages
        #[arg(long)]
        unread: bool,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show dashboard counters
    Stats {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Static site commands
    #[command(subcommand)]
    Static(StaticCommands),
}

/// Media library subcommands
#[derive(Subcommand, Debug)]
pub enum MediaCommands {
    /// List stored media
    List {
        /// Only this folder
        #[arg(long)]
        folder: Option<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Upload one or more files, in order
    Upload {
        /// Files to upload
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Target folder
        #[arg(long)]
        folder: Option<String>,

        /// Ask the backend not to compress images
        #[arg(long)]
        no_compress: bool,
    },

    /// Delete a media item
    Delete {
        /// Media id
        id: String,
    },
}

/// Static site subcommands
#[derive(Subcommand, Debug)]
pub enum StaticCommands {
    /// Render config.json into HTML fragments
    Render {
        /// Path to config.json
        #[arg(long, default_value = "config.json")]
        config: PathBuf,

        /// Language code (pt, en, es); defaults to the config's language
        #[arg(long)]
        lang: Option<String>,

        /// Write the page here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
