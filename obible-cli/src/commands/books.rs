//! Books command implementation

use super::spinner;
use anyhow::{Context, Result};
use obible_core::{BibleApi, HttpClient, Locale, Message};

/// List the books of a translation
pub async fn books(api: &HttpClient, translation: &str, json: bool, locale: Locale) -> Result<()> {
    let pb = spinner(Message::LoadingContent.text(locale))?;
    let result = api.books(translation).await;
    pb.finish_and_clear();

    let list = result.with_context(|| {
        format!("{} ({})", Message::BooksFailed.text(locale), translation)
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    let width = list.books.iter().map(|b| b.id.len()).max().unwrap_or(0);
    for book in &list.books {
        println!(
            "{:<width$}  {}  ({}: {})",
            book.id,
            book.name,
            Message::ChapterLabel.text(locale),
            book.chapters_count,
            width = width
        );
    }

    Ok(())
}
