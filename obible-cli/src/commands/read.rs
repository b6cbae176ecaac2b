//! Read command implementation

use super::spinner;
use crate::components::VerseList;
use anyhow::{bail, Result};
use obible_core::route::reader_path;
use obible_core::{App, HttpClient, Locale, Message, Page, Session};

/// Print one chapter
///
/// Goes through the Reader page so unknown books and out-of-range chapters
/// are corrected the same way as in the shell.
pub async fn read(
    api: HttpClient,
    translation: &str,
    book: &str,
    chapter: Option<&str>,
    json: bool,
    locale: Locale,
) -> Result<()> {
    let path = match chapter {
        Some(chapter) => format!("/{}/{}/{}", translation, book, chapter),
        None => reader_path(translation, book, 1),
    };
    let limit = api.config().search_limit;
    let mut session = Session::new(api, App::with_location(path, limit));

    let pb = spinner(Message::LoadingChapter.text(locale))?;
    session.run().await;
    pb.finish_and_clear();

    let app = session.into_app();
    let Page::Reader(reader) = app.page() else {
        bail!("{}", Message::PageNotFound.text(locale));
    };
    let view = match reader.view() {
        Ok(view) => view,
        Err(prompt) => bail!("{}", prompt.text(locale)),
    };
    let Some(chapter) = view.chapter else {
        let message = view.error.unwrap_or(Message::ChapterFailed);
        bail!("{}", message.text(locale));
    };
    tracing::info!("opened {}", app.location());

    if json {
        println!("{}", serde_json::to_string_pretty(chapter)?);
    } else {
        println!("{}", chapter.title());
        println!();
        print!("{}", VerseList { verses: &chapter.verses });
    }

    Ok(())
}
