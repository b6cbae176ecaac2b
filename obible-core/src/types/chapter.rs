//! Chapter text as returned by `/api/text`

use super::BookMeta;
use serde::{Deserialize, Serialize};

/// A single verse
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Verse {
    /// Verse number, unique within its chapter
    pub v: u32,

    /// Verse text
    pub t: String,
}

impl Verse {
    pub fn new(v: u32, t: impl Into<String>) -> Self {
        Self { v, t: t.into() }
    }
}

/// The verses of one chapter, ordered by verse number
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChapterResponse {
    pub translation: String,
    pub book: BookMeta,
    pub chapter: u32,
    pub verses: Vec<Verse>,
}

impl ChapterResponse {
    /// Heading shown above the verse list, e.g. "Genesis 3"
    pub fn title(&self) -> String {
        format!("{} {}", self.book.name, self.chapter)
    }
}
