//! Book/chapter state shared by the Home and Reader pages

use super::request::{Request, Ticket, Tickets};
use crate::api::ApiResult;
use crate::messages::Message;
use crate::selection::Selection;
use crate::types::{BookList, BookMeta, ChapterResponse};

/// How a freshly loaded book list affects the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BookPolicy {
    /// Always start at the first book, chapter 1
    FirstBook,
    /// Keep a seeded book if the list contains it, otherwise start at the first book
    KeepSeeded,
}

/// What a page shows in its main area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneView<'a> {
    /// Shown while a request is in flight
    pub loading: Option<Message>,
    /// Shown after a failure, once nothing is loading
    pub error: Option<Message>,
    /// The chapter to render, once nothing is loading
    pub chapter: Option<&'a ChapterResponse>,
    /// Neutral prompt when there is nothing to render
    pub placeholder: Option<Message>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ChapterKey {
    translation: String,
    book_id: String,
    chapter: u32,
}

#[derive(Debug, Default)]
pub struct ChapterPane {
    translation: Option<String>,
    books: Vec<BookMeta>,
    selection: Selection,
    chapter: Option<ChapterResponse>,
    books_loading: bool,
    error: Option<Message>,
    books_ticket: Option<Ticket>,
    chapter_ticket: Option<Ticket>,
    last_requested: Option<ChapterKey>,
}

impl ChapterPane {
    pub(crate) fn new(translation: Option<String>, selection: Selection) -> Self {
        Self {
            translation,
            selection,
            ..Self::default()
        }
    }

    pub fn translation(&self) -> Option<&str> {
        self.translation.as_deref()
    }

    pub fn books(&self) -> &[BookMeta] {
        &self.books
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected book, if it is part of the loaded list
    pub fn selected_book(&self) -> Option<&BookMeta> {
        self.selection.book(&self.books)
    }

    pub fn chapter(&self) -> Option<&ChapterResponse> {
        self.chapter.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.books_loading || self.chapter_ticket.is_some()
    }

    pub fn error(&self) -> Option<Message> {
        self.error
    }

    /// Whether a book list request is still unanswered
    pub(crate) fn books_pending(&self) -> bool {
        self.books_ticket.is_some()
    }

    /// Switch to another translation, dropping everything derived from the old one
    pub(crate) fn reset(&mut self, translation: Option<String>) {
        *self = Self::new(translation, Selection::default());
    }

    pub(crate) fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Ask for the book list of the current translation
    pub(crate) fn request_books(&mut self, tickets: &mut Tickets, show_loading: bool) -> Option<Request> {
        let translation = self.translation.clone()?;
        let ticket = tickets.issue();
        self.books_ticket = Some(ticket);
        self.error = None;
        self.books_loading = show_loading;
        Some(Request::Books {
            ticket,
            translation,
        })
    }

    /// Apply a book list completion
    ///
    /// Returns `None` for a stale ticket, otherwise the follow-up chapter
    /// request (if the selection now resolves to a new chapter).
    pub(crate) fn finish_books(
        &mut self,
        ticket: Ticket,
        result: ApiResult<BookList>,
        policy: BookPolicy,
        tickets: &mut Tickets,
    ) -> Option<Option<Request>> {
        if self.books_ticket != Some(ticket) {
            tracing::debug!("dropping stale book list {}", ticket);
            return None;
        }
        self.books_ticket = None;
        self.books_loading = false;

        match result {
            Ok(list) => {
                tracing::debug!(
                    "loaded {} books for {}",
                    list.books.len(),
                    list.translation
                );
                self.books = list.books;
                self.apply_policy(policy);
            }
            Err(e) => {
                tracing::error!("failed to load books: {}", e);
                self.books.clear();
                self.selection.clear();
                self.error = Some(Message::BooksFailed);
            }
        }

        Some(self.sync_chapter(tickets))
    }

    fn apply_policy(&mut self, policy: BookPolicy) {
        let Some(first) = self.books.first() else {
            return;
        };
        let keep = policy == BookPolicy::KeepSeeded && self.selected_book().is_some();
        if !keep {
            self.selection = Selection::new(first.id.clone(), 1);
        }
    }

    /// Select a book by id; an empty id clears the book selection
    ///
    /// Ids missing from the loaded list are ignored.
    pub(crate) fn select_book(&mut self, book_id: &str, tickets: &mut Tickets) -> Option<Request> {
        let book_id = book_id.trim();
        if book_id.is_empty() {
            self.selection.book_id = None;
            return None;
        }
        if !self.books.iter().any(|b| b.id == book_id) {
            tracing::warn!("ignoring unknown book '{}'", book_id);
            return None;
        }
        self.selection.book_id = Some(book_id.to_string());
        self.sync_chapter(tickets)
    }

    /// Select a chapter of the current book, coercing it into range
    pub(crate) fn select_chapter(&mut self, chapter: u32, tickets: &mut Tickets) -> Option<Request> {
        self.selection.chapter = Some(chapter);
        self.sync_chapter(tickets)
    }

    /// Move `delta` chapters within the current book; no-op at either end
    pub(crate) fn step_chapter(&mut self, delta: i64, tickets: &mut Tickets) -> Option<Request> {
        let book = self.selected_book()?;
        let current = i64::from(self.selection.chapter?);
        let target = u32::try_from(current + delta)
            .ok()
            .filter(|chapter| book.contains_chapter(*chapter))?;
        self.select_chapter(target, tickets)
    }

    /// Coerce the selection and request the chapter if the resolved
    /// (translation, book, chapter) changed since the last request
    pub(crate) fn sync_chapter(&mut self, tickets: &mut Tickets) -> Option<Request> {
        if self.selection.coerce(&self.books) {
            tracing::debug!("chapter out of range, reset to 1");
        }

        let translation = self.translation.clone()?;
        let (book_id, chapter) = self.selection.resolved(&self.books)?;
        let key = ChapterKey {
            translation,
            book_id: book_id.to_string(),
            chapter,
        };
        if self.last_requested.as_ref() == Some(&key) {
            return None;
        }

        let ticket = tickets.issue();
        self.chapter_ticket = Some(ticket);
        self.last_requested = Some(key.clone());
        self.error = None;
        Some(Request::Chapter {
            ticket,
            translation: key.translation,
            book_id: key.book_id,
            chapter: key.chapter,
        })
    }

    /// Apply a chapter completion; returns `false` for a stale ticket
    pub(crate) fn finish_chapter(&mut self, ticket: Ticket, result: ApiResult<ChapterResponse>) -> bool {
        if self.chapter_ticket != Some(ticket) {
            tracing::debug!("dropping stale chapter {}", ticket);
            return false;
        }
        self.chapter_ticket = None;

        match result {
            Ok(chapter) => {
                self.chapter = Some(chapter);
            }
            Err(e) => {
                tracing::error!("failed to load chapter: {}", e);
                self.chapter = None;
                self.error = Some(Message::ChapterFailed);
            }
        }
        true
    }

    /// Main-area view model; `loading_message` and `empty_message` differ per page
    pub fn view(&self, loading_message: Message, empty_message: Message) -> PaneView<'_> {
        let loading = self.is_loading();
        let chapter = if loading { None } else { self.chapter.as_ref() };
        PaneView {
            loading: loading.then_some(loading_message),
            error: if loading { None } else { self.error },
            chapter,
            placeholder: (!loading && chapter.is_none()).then_some(empty_message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::types::Verse;

    fn book_list() -> BookList {
        BookList {
            translation: "KJV".into(),
            books: vec![BookMeta::new("GEN", "Genesis", 50), BookMeta::new("JUD", "Jude", 1)],
        }
    }

    fn chapter(book: BookMeta, n: u32) -> ChapterResponse {
        ChapterResponse {
            translation: "KJV".into(),
            book,
            chapter: n,
            verses: vec![Verse::new(1, "In the beginning")],
        }
    }

    fn loaded_pane(tickets: &mut Tickets) -> ChapterPane {
        let mut pane = ChapterPane::new(Some("KJV".into()), Selection::default());
        let Some(Request::Books { ticket, .. }) = pane.request_books(tickets, true) else {
            panic!("expected book request");
        };
        pane.finish_books(ticket, Ok(book_list()), BookPolicy::FirstBook, tickets)
            .expect("current ticket");
        pane
    }

    #[test]
    fn test_books_select_first_book_and_request_chapter_one() {
        let mut tickets = Tickets::default();
        let mut pane = ChapterPane::new(Some("KJV".into()), Selection::default());
        let ticket = pane.request_books(&mut tickets, true).unwrap().ticket();
        assert!(pane.is_loading());

        let follow_up = pane
            .finish_books(ticket, Ok(book_list()), BookPolicy::FirstBook, &mut tickets)
            .unwrap();
        assert!(matches!(
            follow_up,
            Some(Request::Chapter { ref book_id, chapter: 1, .. }) if book_id == "GEN"
        ));
        assert!(pane.is_loading());
    }

    #[test]
    fn test_select_chapter_beyond_count_is_corrected() {
        let mut tickets = Tickets::default();
        let mut pane = loaded_pane(&mut tickets);
        pane.select_book("JUD", &mut tickets);
        pane.select_chapter(7, &mut tickets);
        assert_eq!(pane.selection().chapter, Some(1));
    }

    #[test]
    fn test_unknown_book_is_ignored() {
        let mut tickets = Tickets::default();
        let mut pane = loaded_pane(&mut tickets);
        assert!(pane.select_book("XYZ", &mut tickets).is_none());
        assert_eq!(pane.selection().book_id.as_deref(), Some("GEN"));
    }

    #[test]
    fn test_same_selection_is_not_requested_twice() {
        let mut tickets = Tickets::default();
        let mut pane = loaded_pane(&mut tickets);
        assert!(pane.select_chapter(1, &mut tickets).is_none());
        assert!(pane.select_chapter(2, &mut tickets).is_some());
    }

    #[test]
    fn test_stale_chapter_completion_is_dropped() {
        let mut tickets = Tickets::default();
        let mut pane = loaded_pane(&mut tickets);
        let first = pane.select_chapter(2, &mut tickets).unwrap().ticket();
        let second = pane.select_chapter(3, &mut tickets).unwrap().ticket();

        let genesis = BookMeta::new("GEN", "Genesis", 50);
        assert!(pane.finish_chapter(second, Ok(chapter(genesis.clone(), 3))));
        assert!(!pane.finish_chapter(first, Ok(chapter(genesis, 2))));
        assert_eq!(pane.chapter().map(|c| c.chapter), Some(3));
    }

    #[test]
    fn test_chapter_failure_clears_data() {
        let mut tickets = Tickets::default();
        let mut pane = loaded_pane(&mut tickets);
        let ticket = pane.select_chapter(4, &mut tickets).unwrap().ticket();
        assert!(pane.finish_chapter(ticket, Err(ApiError::Status(500))));

        let view = pane.view(Message::LoadingContent, Message::ChooseBookAndChapter);
        assert_eq!(view.error, Some(Message::ChapterFailed));
        assert_eq!(view.chapter, None);
        assert_eq!(view.placeholder, Some(Message::ChooseBookAndChapter));
        assert_eq!(view.loading, None);
    }

    #[test]
    fn test_step_chapter_stops_at_bounds() {
        let mut tickets = Tickets::default();
        let mut pane = loaded_pane(&mut tickets);
        assert!(pane.step_chapter(-1, &mut tickets).is_none());
        assert!(pane.step_chapter(1, &mut tickets).is_some());
        assert_eq!(pane.selection().chapter, Some(2));

        pane.select_book("JUD", &mut tickets);
        assert!(pane.step_chapter(1, &mut tickets).is_none());
    }
}
