//! Static site command handlers.

use super::StaticCommands;
use std::str::FromStr;
use vitrine::{
    Language, StaticRenderer, StaticSiteConfig, StorageError, StorageErrorKind, ValidationError,
    ValidationErrorKind, VitrineResult,
};

/// Handle static site commands.
pub async fn handle_static_command(cmd: StaticCommands) -> VitrineResult<()> {
    match cmd {
        StaticCommands::Render {
            config,
            lang,
            output,
        } => {
            let language = lang
                .as_deref()
                .map(|code| {
                    Language::from_str(code).map_err(|_| {
                        ValidationError::new(ValidationErrorKind::InvalidValue {
                            field: "lang".to_string(),
                            reason: format!("unknown language code '{}'", code),
                        })
                    })
                })
                .transpose()?;

            let site_config = StaticSiteConfig::load(&config).await?;
            let site = StaticRenderer::new(&site_config, language).render();
            let html = site.to_html();

            match output {
                Some(path) => {
                    tokio::fs::write(&path, html).await.map_err(|e| {
                        StorageError::new(StorageErrorKind::FileWrite(format!(
                            "{}: {}",
                            path.display(),
                            e
                        )))
                    })?;
                    tracing::info!(path = %path.display(), language = %site.language(), "Static site rendered");
                }
                None => println!("{}", html),
            }
            Ok(())
        }
    }
}
