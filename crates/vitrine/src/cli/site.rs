//! Settings, inbox and dashboard command handlers.

use super::{Context, OutputFormat};
use serde::Serialize;
use vitrine::{JsonError, Language, VitrineResult};

fn print_json<T: Serialize>(value: &T) -> VitrineResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| JsonError::new(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

/// Print the settings document.
pub async fn show_settings(context: &Context, format: OutputFormat) -> VitrineResult<()> {
    let settings = context.client.get_settings().await?;
    if format == OutputFormat::Json {
        return print_json(&settings);
    }

    let language = settings.default_language;
    println!("Default language: {} {}", language.flag(), language.code());
    println!("Hero: {}", settings.hero.title.get(Language::Pt));
    println!("About: {}", settings.about.title.get(Language::Pt));
    println!("Differentials:");
    for card in settings.sorted_differentials() {
        println!("  {}. {} ({})", card.order, card.title.get(Language::Pt), card.icon);
    }
    println!("Stats:");
    for stat in settings.sorted_stats() {
        println!("  {} {}", stat.value, stat.label.get(Language::Pt));
    }
    println!("Contact: {} | {} | {}", settings.contact.email, settings.contact.phone, settings.contact.address);
    if let Some(link) = settings.contact.whatsapp_link() {
        println!("WhatsApp: {}", link);
    }
    for (network, url) in settings.contact.social_links() {
        println!("{}: {}", network, url);
    }
    Ok(())
}

/// List contact messages, newest first.
pub async fn list_messages(
    context: &Context,
    unread_only: bool,
    format: OutputFormat,
) -> VitrineResult<()> {
    let mut messages = context.client.list_messages().await?;
    messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    if unread_only {
        messages.retain(|m| !m.is_read);
    }

    match format {
        OutputFormat::Json => print_json(&messages)?,
        OutputFormat::Human => {
            for message in &messages {
                let marker = if message.is_read { ' ' } else { '*' };
                println!(
                    "{} {}  {} <{}>  [{}]",
                    marker,
                    message.display_date(),
                    message.draft.name,
                    message.draft.email,
                    message.id
                );
                println!("    {}", message.draft.message);
            }
            println!("Total: {} messages", messages.len());
        }
    }
    Ok(())
}

/// Print dashboard counters.
pub async fn show_stats(context: &Context, format: OutputFormat) -> VitrineResult<()> {
    let stats = context.client.dashboard_stats().await?;
    match format {
        OutputFormat::Json => print_json(&stats)?,
        OutputFormat::Human => {
            println!("Messages: {} ({} unread)", stats.total_messages(), stats.unread_messages());
            println!("Posts:    {}", stats.total_posts());
            println!("Areas:    {}", stats.total_areas());
        }
    }
    Ok(())
}
