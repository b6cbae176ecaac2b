//! Requests emitted by the state machine and their completions

use crate::api::ApiResult;
use crate::types::{BookList, ChapterResponse, SearchResponse, TranslationList};
use std::fmt;

/// Identifies one emitted request
///
/// A component only accepts the completion carrying the ticket it currently
/// awaits; anything else is stale and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic ticket source shared by every component of one [`App`](super::App)
#[derive(Debug, Default)]
pub struct Tickets {
    last: u64,
}

impl Tickets {
    pub fn issue(&mut self) -> Ticket {
        self.last += 1;
        Ticket(self.last)
    }
}

/// A backend call the state machine wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Translations {
        ticket: Ticket,
    },
    Books {
        ticket: Ticket,
        translation: String,
    },
    Chapter {
        ticket: Ticket,
        translation: String,
        book_id: String,
        chapter: u32,
    },
    Search {
        ticket: Ticket,
        translation: String,
        query: String,
        limit: u32,
    },
}

impl Request {
    pub fn ticket(&self) -> Ticket {
        match self {
            Request::Translations { ticket }
            | Request::Books { ticket, .. }
            | Request::Chapter { ticket, .. }
            | Request::Search { ticket, .. } => *ticket,
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::Translations { ticket } => write!(f, "translations {}", ticket),
            Request::Books {
                ticket,
                translation,
            } => write!(f, "books {} {}", translation, ticket),
            Request::Chapter {
                ticket,
                translation,
                book_id,
                chapter,
            } => write!(f, "text {}/{}/{} {}", translation, book_id, chapter, ticket),
            Request::Search {
                ticket,
                translation,
                query,
                ..
            } => write!(f, "search {} '{}' {}", translation, query, ticket),
        }
    }
}

/// The outcome of a [`Request`]
#[derive(Debug)]
pub enum Completion {
    Translations {
        ticket: Ticket,
        result: ApiResult<TranslationList>,
    },
    Books {
        ticket: Ticket,
        result: ApiResult<BookList>,
    },
    Chapter {
        ticket: Ticket,
        result: ApiResult<ChapterResponse>,
    },
    Search {
        ticket: Ticket,
        result: ApiResult<SearchResponse>,
    },
}

impl Completion {
    pub fn ticket(&self) -> Ticket {
        match self {
            Completion::Translations { ticket, .. }
            | Completion::Books { ticket, .. }
            | Completion::Chapter { ticket, .. }
            | Completion::Search { ticket, .. } => *ticket,
        }
    }
}
