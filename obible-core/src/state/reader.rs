//! Reader page: a location-addressed chapter view

use super::pane::{BookPolicy, ChapterPane, PaneView};
use super::request::{Request, Ticket, Tickets};
use crate::api::ApiResult;
use crate::messages::Message;
use crate::route::{reader_path, ReaderParams};
use crate::selection::Selection;
use crate::types::{BookList, ChapterResponse};

/// Chapter view seeded from `/:translation/:bookId/:chapter`
///
/// The Reader owns its translation (taken from the location, independent of
/// the App's selection) and keeps the location in sync with its selection.
#[derive(Debug)]
pub struct ReaderPage {
    pane: ChapterPane,
}

impl ReaderPage {
    pub fn new(params: &ReaderParams) -> Self {
        let selection = Selection {
            book_id: Some(params.book_id.clone()),
            chapter: params.chapter,
        };
        let translation = Some(params.translation.clone()).filter(|t| !t.is_empty());
        Self {
            pane: ChapterPane::new(translation, selection),
        }
    }

    pub fn pane(&self) -> &ChapterPane {
        &self.pane
    }

    pub fn translation(&self) -> Option<&str> {
        self.pane.translation()
    }

    /// Ask for the book list; the Reader shows no loading state for it
    pub(crate) fn start(&mut self, tickets: &mut Tickets) -> Option<Request> {
        self.pane.request_books(tickets, false)
    }

    pub(crate) fn finish_books(
        &mut self,
        ticket: Ticket,
        result: ApiResult<BookList>,
        tickets: &mut Tickets,
    ) -> Option<Option<Request>> {
        self.pane
            .finish_books(ticket, result, BookPolicy::KeepSeeded, tickets)
    }

    pub(crate) fn finish_chapter(&mut self, ticket: Ticket, result: ApiResult<ChapterResponse>) -> bool {
        self.pane.finish_chapter(ticket, result)
    }

    /// Adopt book and chapter from a new location with the same translation
    ///
    /// Without a book list (the last load failed) this asks for it again;
    /// the chapter follows once the list arrives.
    pub(crate) fn apply_params(&mut self, params: &ReaderParams, tickets: &mut Tickets) -> Option<Request> {
        let selection = Selection {
            book_id: Some(params.book_id.clone()),
            chapter: params.chapter,
        };
        if *self.pane.selection() == selection {
            return None;
        }

        if !self.pane.books().is_empty() && selection.book(self.pane.books()).is_none() {
            tracing::warn!("book '{}' not in list, opening first book", params.book_id);
            let first_id = self.pane.books()[0].id.clone();
            self.pane.set_selection(Selection::new(first_id, 1));
        } else {
            self.pane.set_selection(selection);
        }
        if self.pane.books().is_empty() {
            if self.pane.books_pending() {
                return None;
            }
            return self.pane.request_books(tickets, false);
        }
        self.pane.sync_chapter(tickets)
    }

    pub(crate) fn pane_mut(&mut self) -> &mut ChapterPane {
        &mut self.pane
    }

    /// The location matching the current selection
    pub fn location(&self) -> Option<String> {
        let translation = self.pane.translation()?;
        let selection = self.pane.selection();
        Some(reader_path(
            translation,
            selection.book_id.as_deref()?,
            selection.chapter?,
        ))
    }

    /// Main-area view model, or the prompt shown without a translation
    pub fn view(&self) -> Result<PaneView<'_>, Message> {
        if self.pane.translation().is_none() {
            return Err(Message::NoTranslationSelected);
        }
        Ok(self
            .pane
            .view(Message::LoadingChapter, Message::ChapterFailed))
    }
}
