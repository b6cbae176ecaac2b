//! App shell: translation list, search, history and page routing
//!
//! `App` never performs I/O. Every operation may queue [`Request`]s, which a
//! driver (see [`crate::session`]) executes and hands back as
//! [`Completion`]s.

use super::history::History;
use super::home::HomePage;
use super::pane::ChapterPane;
use super::reader::ReaderPage;
use super::request::{Completion, Request, Ticket, Tickets};
use super::search::SearchPanel;
use crate::api::ApiResult;
use crate::config::DEFAULT_SEARCH_LIMIT;
use crate::messages::Message;
use crate::route::{leading_segment, reader_path, Route};
use crate::types::TranslationList;

/// A user interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Push a new location
    Navigate(String),
    Back,
    Forward,
    ChangeTranslation(String),
    SelectBook(String),
    SelectChapter(u32),
    NextChapter,
    PreviousChapter,
    /// Edit the search input without submitting
    EditSearch(String),
    Search(String),
    ClearSearch,
    /// Jump to the n-th (zero-based) search result
    OpenResult(usize),
}

/// The page mounted for the current location
#[derive(Debug)]
pub enum Page {
    Home(HomePage),
    Reader(ReaderPage),
    NotFound,
}

impl Page {
    /// Book/chapter state of the mounted page
    pub fn pane(&self) -> Option<&ChapterPane> {
        match self {
            Page::Home(home) => Some(home.pane()),
            Page::Reader(reader) => Some(reader.pane()),
            Page::NotFound => None,
        }
    }

    fn pane_mut(&mut self) -> Option<&mut ChapterPane> {
        match self {
            Page::Home(home) => Some(home.pane_mut()),
            Page::Reader(reader) => Some(reader.pane_mut()),
            Page::NotFound => None,
        }
    }
}

#[derive(Debug)]
pub struct App {
    search_limit: u32,
    translations: Vec<String>,
    selected: Option<String>,
    translations_error: Option<Message>,
    translations_ticket: Option<Ticket>,
    search: SearchPanel,
    history: History,
    page: Page,
    tickets: Tickets,
    outbox: Vec<Request>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_LIMIT)
    }
}

impl App {
    /// An app located at `/`
    pub fn new(search_limit: u32) -> Self {
        Self::with_location("/", search_limit)
    }

    /// An app opened at `path`; the page for it is mounted immediately
    pub fn with_location(path: impl Into<String>, search_limit: u32) -> Self {
        let mut app = Self {
            search_limit,
            translations: Vec::new(),
            selected: None,
            translations_error: None,
            translations_ticket: None,
            search: SearchPanel::default(),
            history: History::new(path),
            page: Page::NotFound,
            tickets: Tickets::default(),
            outbox: Vec::new(),
        };
        app.mount();
        app.settle();
        app
    }

    /// Ask for the translation list
    pub fn start(&mut self) {
        let ticket = self.tickets.issue();
        self.translations_ticket = Some(ticket);
        self.emit(Some(Request::Translations { ticket }));
    }

    pub fn apply(&mut self, action: Action) {
        tracing::debug!("action {:?}", action);
        match action {
            Action::Navigate(path) => {
                self.history.push(path);
                self.location_changed();
            }
            Action::Back => {
                if self.history.back() {
                    self.location_changed();
                }
            }
            Action::Forward => {
                if self.history.forward() {
                    self.location_changed();
                }
            }
            Action::ChangeTranslation(translation) => self.change_translation(&translation),
            Action::SelectBook(book_id) => {
                let request = self
                    .page
                    .pane_mut()
                    .and_then(|pane| pane.select_book(&book_id, &mut self.tickets));
                self.emit(request);
            }
            Action::SelectChapter(chapter) => {
                let request = self
                    .page
                    .pane_mut()
                    .and_then(|pane| pane.select_chapter(chapter, &mut self.tickets));
                self.emit(request);
            }
            Action::NextChapter => self.step_chapter(1),
            Action::PreviousChapter => self.step_chapter(-1),
            Action::EditSearch(input) => self.search.set_input(&input),
            Action::Search(input) => {
                let request = self.search.submit(
                    &input,
                    self.selected.as_deref(),
                    self.search_limit,
                    &mut self.tickets,
                );
                self.emit(request);
            }
            Action::ClearSearch => self.search.clear(),
            Action::OpenResult(index) => self.open_result(index),
        }
        self.settle();
    }

    /// Feed back the outcome of a request
    pub fn complete(&mut self, completion: Completion) {
        match completion {
            Completion::Translations { ticket, result } => self.finish_translations(ticket, result),
            Completion::Books { ticket, result } => {
                let follow_up = match &mut self.page {
                    Page::Home(home) => home.finish_books(ticket, result, &mut self.tickets),
                    Page::Reader(reader) => reader.finish_books(ticket, result, &mut self.tickets),
                    Page::NotFound => None,
                };
                self.emit(follow_up.flatten());
            }
            Completion::Chapter { ticket, result } => {
                let applied = match &mut self.page {
                    Page::Home(home) => home.finish_chapter(ticket, result),
                    Page::Reader(reader) => reader.finish_chapter(ticket, result),
                    Page::NotFound => false,
                };
                if !applied {
                    tracing::debug!("chapter {} has no receiver", ticket);
                }
            }
            Completion::Search { ticket, result } => {
                self.search.finish(ticket, result);
            }
        }
        self.settle();
    }

    /// Take every request queued since the last call
    pub fn drain_requests(&mut self) -> Vec<Request> {
        std::mem::take(&mut self.outbox)
    }

    pub fn has_pending_requests(&self) -> bool {
        !self.outbox.is_empty()
    }

    pub fn translations(&self) -> &[String] {
        &self.translations
    }

    pub fn selected_translation(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn translations_error(&self) -> Option<Message> {
        self.translations_error
    }

    pub fn search(&self) -> &SearchPanel {
        &self.search
    }

    /// Whether the search bar accepts input
    pub fn search_enabled(&self) -> bool {
        self.selected.is_some() && !self.search.is_searching()
    }

    pub fn search_limit(&self) -> u32 {
        self.search_limit
    }

    pub fn location(&self) -> &str {
        self.history.current()
    }

    pub fn route(&self) -> Route {
        Route::parse(self.history.current())
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    fn emit(&mut self, request: Option<Request>) {
        if let Some(request) = request {
            tracing::debug!("queue {}", request);
            self.outbox.push(request);
        }
    }

    fn finish_translations(&mut self, ticket: Ticket, result: ApiResult<TranslationList>) {
        if self.translations_ticket != Some(ticket) {
            tracing::debug!("dropping stale translation list {}", ticket);
            return;
        }
        self.translations_ticket = None;

        match result {
            Ok(list) => {
                tracing::debug!("loaded {} translations", list.translations.len());
                self.translations = list.translations;
                self.translations_error = None;
                if self.selected.is_none() {
                    self.selected = self.translations.first().cloned();
                }
                self.adopt_translation_from_location();
            }
            Err(e) => {
                tracing::error!("failed to load translations: {}", e);
                self.translations_error = Some(Message::TranslationsFailed);
            }
        }
    }

    fn change_translation(&mut self, translation: &str) {
        let translation = translation.trim();
        if translation.is_empty() {
            return;
        }
        self.selected = Some(translation.to_string());
        self.search.clear();
        self.history.push("/");
        self.location_changed();
    }

    fn step_chapter(&mut self, delta: i64) {
        let request = self
            .page
            .pane_mut()
            .and_then(|pane| pane.step_chapter(delta, &mut self.tickets));
        self.emit(request);
    }

    fn open_result(&mut self, index: usize) {
        let Some(translation) = self.selected.as_deref() else {
            return;
        };
        let Some(result) = self.search.results().get(index) else {
            tracing::warn!("no search result at position {}", index + 1);
            return;
        };
        let path = reader_path(translation, &result.book_id, result.chapter);
        self.history.push(path);
        self.search.clear();
        self.location_changed();
    }

    fn location_changed(&mut self) {
        self.adopt_translation_from_location();
        self.mount();
    }

    /// Select the translation named by the first path segment, if it is known
    fn adopt_translation_from_location(&mut self) {
        if self.translations.is_empty() {
            return;
        }
        let Some(segment) = leading_segment(self.history.current()) else {
            return;
        };
        if self.selected.as_deref() == Some(segment) {
            return;
        }
        if self.translations.iter().any(|t| t == segment) {
            tracing::debug!("translation {} taken from location", segment);
            self.selected = Some(segment.to_string());
        }
    }

    /// Mount (or update) the page matching the current location
    fn mount(&mut self) {
        match Route::parse(self.history.current()) {
            Route::Home => {
                if !matches!(self.page, Page::Home(_)) {
                    self.page = Page::Home(HomePage::new());
                }
            }
            Route::Reader(params) => {
                let same_translation = matches!(
                    &self.page,
                    Page::Reader(reader) if reader.translation() == Some(params.translation.as_str())
                );
                let request = if same_translation {
                    match &mut self.page {
                        Page::Reader(reader) => reader.apply_params(&params, &mut self.tickets),
                        _ => None,
                    }
                } else {
                    let mut reader = ReaderPage::new(&params);
                    let request = reader.start(&mut self.tickets);
                    self.page = Page::Reader(reader);
                    request
                };
                self.emit(request);
            }
            Route::NotFound => self.page = Page::NotFound,
        }
    }

    /// Propagate derived state after every change
    fn settle(&mut self) {
        // Reader keeps the location in sync with its selection (replace, not push)
        if let Page::Reader(reader) = &self.page {
            if let Some(path) = reader.location() {
                if path != self.history.current() {
                    self.history.replace(path);
                    self.adopt_translation_from_location();
                }
            }
        }

        // Home follows the App's translation
        if let Page::Home(home) = &mut self.page {
            let request = home.set_translation(self.selected.as_deref(), &mut self.tickets);
            self.emit(request);
        }
    }
}
