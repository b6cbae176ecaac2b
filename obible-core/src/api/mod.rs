//! Backend API abstraction
//!
//! The four endpoints the client consumes are expressed as the [`BibleApi`]
//! trait. [`HttpClient`] talks to a real backend; tests and the session driver
//! can substitute any other implementation.

mod http;

pub use http::HttpClient;

use crate::error::ApiError;
use crate::types::{BookList, ChapterResponse, SearchResponse, TranslationList};
use async_trait::async_trait;

/// Result type for API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

pub const TRANSLATIONS_PATH: &str = "/api/translations";
pub const BOOKS_PATH: &str = "/api/books";
pub const TEXT_PATH: &str = "/api/text";
pub const SEARCH_PATH: &str = "/api/search";

/// Read access to the Bible backend
#[async_trait]
pub trait BibleApi: Send + Sync {
    /// List available translation codes
    async fn translations(&self) -> ApiResult<TranslationList>;

    /// List the books of a translation
    async fn books(&self, translation: &str) -> ApiResult<BookList>;

    /// Fetch the verses of one chapter
    async fn chapter(&self, translation: &str, book: &str, chapter: u32)
        -> ApiResult<ChapterResponse>;

    /// Full-text search within a translation
    async fn search(&self, translation: &str, query: &str, limit: u32)
        -> ApiResult<SearchResponse>;
}
