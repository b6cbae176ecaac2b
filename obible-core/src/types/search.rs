//! Full-text search results

use serde::{Deserialize, Serialize};

/// A single verse matching a search query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    #[serde(rename = "bookId")]
    pub book_id: String,

    #[serde(rename = "bookName")]
    pub book_name: String,

    pub chapter: u32,
    pub verse: u32,

    /// Verse text excerpt
    pub snippet: String,
}

impl SearchResult {
    /// Reference label, e.g. "Johannes 3,16"
    pub fn reference(&self) -> String {
        format!("{} {},{}", self.book_name, self.chapter, self.verse)
    }
}

/// Response of `/api/search`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResponse {
    pub translation: String,
    pub query: String,
    pub results: Vec<SearchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_wire_names() {
        let json = r#"{"bookId":"JHN","bookName":"Johannes","chapter":3,"verse":16,"snippet":"Also hat Gott die Welt geliebt"}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.book_id, "JHN");
        assert_eq!(result.reference(), "Johannes 3,16");

        let back = serde_json::to_value(&result).unwrap();
        assert_eq!(back["bookName"], "Johannes");
    }
}
