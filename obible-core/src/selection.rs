//! Book and chapter selection rules

use crate::types::BookMeta;

/// Clamp a requested chapter to a book's chapter range
///
/// Absent, zero or out-of-range requests fall back to chapter 1.
pub fn coerce_chapter(requested: Option<u32>, chapters_count: u32) -> u32 {
    match requested {
        Some(chapter) if (1..=chapters_count).contains(&chapter) => chapter,
        _ => 1,
    }
}

/// The current book/chapter choice of a page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub book_id: Option<String>,
    pub chapter: Option<u32>,
}

impl Selection {
    pub fn new(book_id: impl Into<String>, chapter: u32) -> Self {
        Self {
            book_id: Some(book_id.into()),
            chapter: Some(chapter),
        }
    }

    /// Clear book and chapter
    pub fn clear(&mut self) {
        self.book_id = None;
        self.chapter = None;
    }

    /// Look up the selected book in a loaded book list
    pub fn book<'a>(&self, books: &'a [BookMeta]) -> Option<&'a BookMeta> {
        let id = self.book_id.as_deref()?;
        books.iter().find(|book| book.id == id)
    }

    /// Force the chapter into the selected book's range
    ///
    /// Returns `true` if the chapter changed. Nothing happens while the book
    /// is not part of `books`.
    pub fn coerce(&mut self, books: &[BookMeta]) -> bool {
        let Some(book) = self.book(books) else {
            return false;
        };
        let chapter = coerce_chapter(self.chapter, book.chapters_count);
        if self.chapter == Some(chapter) {
            return false;
        }
        self.chapter = Some(chapter);
        true
    }

    /// The (book, chapter) pair, once both are chosen and the book is loaded
    pub fn resolved<'a>(&'a self, books: &[BookMeta]) -> Option<(&'a str, u32)> {
        self.book(books)?;
        Some((self.book_id.as_deref()?, self.chapter?))
    }
}
