//! Media library command handlers.

use super::{Context, MediaCommands, OutputFormat};
use std::path::PathBuf;
use vitrine::{JsonError, MediaItem, UploadFile, VitrineResult};

/// Handle media library commands.
pub async fn handle_media_command(context: &Context, cmd: MediaCommands) -> VitrineResult<()> {
    match cmd {
        MediaCommands::List { folder, format } => {
            list_media(context, folder.as_deref(), format).await
        }
        MediaCommands::Upload {
            files,
            folder,
            no_compress,
        } => upload_media(context, files, folder.as_deref(), !no_compress).await,
        MediaCommands::Delete { id } => delete_media(context, &id).await,
    }
}

async fn list_media(
    context: &Context,
    folder: Option<&str>,
    format: OutputFormat,
) -> VitrineResult<()> {
    let items = context.client.list_media(folder).await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&items)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("{:-<80}", "");
            for item in &items {
                print_item(item);
            }
            println!("{:-<80}", "");
            println!("Total: {} items", items.len());
        }
    }

    Ok(())
}

fn print_item(item: &MediaItem) {
    println!(
        "{:<26} {:<10} {:>10}  {}  {}",
        item.id,
        item.kind().to_string(),
        item.display_size(),
        item.display_date(),
        item.url
    );
}

async fn upload_media(
    context: &Context,
    paths: Vec<PathBuf>,
    folder: Option<&str>,
    compress: bool,
) -> VitrineResult<()> {
    let total = paths.len();
    for (index, path) in paths.iter().enumerate() {
        let file = UploadFile::from_path(path).await?;
        let label = format!("[{}/{}] {}", index + 1, total, file.filename());
        let on_progress = |sent: u64, size: u64| {
            let percent = if size == 0 { 100 } else { sent * 100 / size };
            eprint!("\r{} {:>3}%", label, percent);
        };
        let item = context
            .client
            .upload_media(&file, folder, compress, &on_progress)
            .await;
        eprintln!();
        let item = item?;
        println!("{}", item.url);
    }
    println!("{} arquivo(s) enviado(s)!", total);
    Ok(())
}

async fn delete_media(context: &Context, id: &str) -> VitrineResult<()> {
    context.client.delete_media(id).await?;
    println!("Arquivo excluído!");
    Ok(())
}
