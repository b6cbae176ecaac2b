use super::{BookPicker, ChapterPicker, SearchBar, SearchResults, TranslationPicker, VerseList};
use obible_core::state::{ChapterPane, PaneView};
use obible_core::{App, Locale, Message, Page};
use std::fmt;

const RULE: &str = "────────────────────────────────────────────────────────────";

/// The full client: header, search panel, mounted page and footer
pub struct Screen<'a> {
    pub app: &'a App,
    pub locale: Locale,
}

impl Screen<'_> {
    fn header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let app = self.app;
        writeln!(f, "{}", Message::AppTitle.text(self.locale))?;
        writeln!(f, "{}", Message::AppSubtitle.text(self.locale))?;
        writeln!(
            f,
            "{}",
            TranslationPicker {
                translations: app.translations(),
                selected: app.selected_translation(),
                locale: self.locale,
            }
        )?;
        writeln!(
            f,
            "{}",
            SearchBar {
                value: app.search().input(),
                disabled: !app.search_enabled(),
                locale: self.locale,
            }
        )?;
        if let Some(error) = app.translations_error() {
            writeln!(f, "! {}", error.text(self.locale))?;
        }
        writeln!(f, "{}", RULE)?;

        let search = app.search();
        if !search.query().is_empty() {
            write!(
                f,
                "{}",
                SearchResults {
                    translation: app.selected_translation(),
                    query: search.query(),
                    results: search.results(),
                    loading: search.is_searching(),
                    locale: self.locale,
                }
            )?;
        }
        if let Some(error) = search.error() {
            writeln!(f, "! {}", error.text(self.locale))?;
        }
        if !search.query().is_empty() || search.error().is_some() {
            writeln!(f, "{}", RULE)?;
        }
        Ok(())
    }

    fn pane(
        &self,
        f: &mut fmt::Formatter<'_>,
        pane: &ChapterPane,
        view: Result<PaneView<'_>, Message>,
    ) -> fmt::Result {
        let view = match view {
            Ok(view) => view,
            Err(prompt) => return writeln!(f, "{}", prompt.text(self.locale)),
        };

        let selection = pane.selection();
        write!(
            f,
            "{}",
            BookPicker {
                books: pane.books(),
                selected: selection.book_id.as_deref(),
                locale: self.locale,
            }
        )?;
        if selection.book_id.is_some() {
            write!(
                f,
                "{}",
                ChapterPicker {
                    chapters_count: pane.selected_book().map_or(0, |b| b.chapters_count),
                    selected: selection.chapter,
                    locale: self.locale,
                }
            )?;
        }
        writeln!(f)?;

        if let Some(loading) = view.loading {
            writeln!(f, "{}", loading.text(self.locale))?;
        }
        if let Some(error) = view.error {
            writeln!(f, "! {}", error.text(self.locale))?;
        }
        if let Some(chapter) = view.chapter {
            writeln!(f, "{}", chapter.title())?;
            writeln!(f)?;
            write!(f, "{}", VerseList { verses: &chapter.verses })?;
        }
        if let Some(placeholder) = view.placeholder {
            writeln!(f, "{}", placeholder.text(self.locale))?;
        }
        Ok(())
    }
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.header(f)?;

        match self.app.page() {
            Page::Home(home) => self.pane(f, home.pane(), home.view())?,
            Page::Reader(reader) => self.pane(f, reader.pane(), reader.view())?,
            Page::NotFound => writeln!(f, "{}", Message::PageNotFound.text(self.locale))?,
        }

        writeln!(f, "{}", RULE)?;
        writeln!(f, "{}", Message::Footer.text(self.locale))
    }
}
