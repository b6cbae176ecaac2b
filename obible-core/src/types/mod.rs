//! Wire types for the Bible backend API

mod book;
mod chapter;
mod search;

pub use book::{BookList, BookMeta};
pub use chapter::{ChapterResponse, Verse};
pub use search::{SearchResponse, SearchResult};

use serde::{Deserialize, Serialize};

/// Response of `/api/translations`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TranslationList {
    /// Translation codes, e.g. `KJV` or `LUT`
    pub translations: Vec<String>,
}
