//! Book metadata as listed per translation

use serde::{Deserialize, Serialize};

/// A single book within a translation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookMeta {
    /// Book identifier, e.g. `GEN`
    pub id: String,

    /// Display name in the translation's language
    pub name: String,

    /// Number of chapters; valid chapter selections are `1..=chapters_count`
    #[serde(rename = "chaptersCount")]
    pub chapters_count: u32,
}

impl BookMeta {
    /// Create a new book entry
    pub fn new(id: impl Into<String>, name: impl Into<String>, chapters_count: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            chapters_count,
        }
    }

    /// Whether `chapter` addresses an existing chapter of this book
    pub fn contains_chapter(&self, chapter: u32) -> bool {
        (1..=self.chapters_count).contains(&chapter)
    }
}

/// Response of `/api/books`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookList {
    pub translation: String,
    pub books: Vec<BookMeta>,
}

impl BookList {
    /// Look up a book by its identifier
    pub fn find(&self, id: &str) -> Option<&BookMeta> {
        self.books.iter().find(|book| book.id == id)
    }
}
