//! Vitrine CLI binary.
//!
//! Command-line access to the site backend:
//! - Sign in and out, keeping the token between runs
//! - Manage the media library
//! - Inspect settings, messages and dashboard stats
//! - Render the static site from a `config.json`

use clap::Parser;
use vitrine::{LoggingConfig, init_logging};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, Context};

    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    init_logging(LoggingConfig::new(level).with_json_logs(cli.json_logs))?;

    match cli.command {
        // Static rendering works offline
        Commands::Static(cmd) => cli::handle_static_command(cmd).await?,
        command => {
            let context = Context::load(cli.base_url.as_deref()).await?;
            match command {
                Commands::Login { email, password } => {
                    cli::login(&context, email, password).await?
                }
                Commands::Logout => cli::logout(&context).await?,
                Commands::Whoami => cli::whoami(&context).await?,
                Commands::Media(cmd) => cli::handle_media_command(&context, cmd).await?,
                Commands::Settings { format } => cli::show_settings(&context, format).await?,
                Commands::Messages { unread, format } => {
                    cli::list_messages(&context, unread, format).await?
                }
                Commands::Stats { format } => cli::show_stats(&context, format).await?,
                Commands::Static(cmd) => cli::handle_static_command(cmd).await?,
            }
        }
    }

    Ok(())
}
