//! Client-side routes
//!
//! Two routes exist: `/` (Home) and `/:translation/:bookId/:chapter` (Reader).
//! Everything else matches nothing and renders an empty main area.

use std::fmt;

/// Parameters captured by the Reader route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderParams {
    pub translation: String,
    pub book_id: String,
    /// `None` when the segment is not a non-negative integer
    pub chapter: Option<u32>,
}

/// A parsed location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Reader(ReaderParams),
    NotFound,
}

impl Route {
    /// Match a location path against the route table
    pub fn parse(path: &str) -> Self {
        let Some(segments) = segments(path) else {
            return Route::NotFound;
        };
        match segments.as_slice() {
            [] => Route::Home,
            [translation, book_id, chapter] => Route::Reader(ReaderParams {
                translation: translation.to_string(),
                book_id: book_id.to_string(),
                chapter: chapter.trim().parse().ok(),
            }),
            _ => Route::NotFound,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "home"),
            Route::Reader(p) => match p.chapter {
                Some(chapter) => write!(f, "reader {}/{}/{}", p.translation, p.book_id, chapter),
                None => write!(f, "reader {}/{}", p.translation, p.book_id),
            },
            Route::NotFound => write!(f, "not found"),
        }
    }
}

/// Build the Reader location for a selection
pub fn reader_path(translation: &str, book_id: &str, chapter: u32) -> String {
    format!("/{}/{}/{}", translation, book_id, chapter)
}

/// First segment of an absolute path, if any
///
/// The App uses this to adopt a translation from the location.
pub fn leading_segment(path: &str) -> Option<&str> {
    let rest = path.strip_prefix('/')?;
    let segment = rest.split(['/', '?', '#']).next()?;
    if segment.is_empty() {
        None
    } else {
        Some(segment)
    }
}

/// Path segments, ignoring query, fragment and a trailing slash
///
/// `None` when a segment is empty (`//`), which no route can match.
fn segments(path: &str) -> Option<Vec<&str>> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Some(Vec::new());
    }

    let parts: Vec<&str> = trimmed.split('/').collect();
    if parts.iter().any(|p| p.is_empty()) {
        return None;
    }
    Some(parts)
}
