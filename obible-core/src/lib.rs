//! obible core library
//!
//! Client side of the offline Bible reader: a typed API client for the four
//! backend endpoints, the client-side route grammar, and the view state
//! machine (App shell, Home and Reader pages, search panel) that decides what
//! to fetch and what to show.

pub mod api;
pub mod config;
pub mod error;
pub mod messages;
pub mod route;
pub mod selection;
pub mod session;
pub mod state;
pub mod types;

pub use api::{BibleApi, HttpClient};
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, ObibleError, Result};
pub use messages::{Locale, Message};
pub use route::{ReaderParams, Route};
pub use session::Session;
pub use state::{Action, App, Page};
pub use types::{
    BookList, BookMeta, ChapterResponse, SearchResponse, SearchResult, TranslationList, Verse,
};
