//! Presentational components rendered as terminal text
//!
//! Each component borrows the state it shows and implements `Display`; none
//! of them hold state of their own.

mod book_picker;
mod chapter_picker;
mod screen;
mod search_bar;
mod search_results;
mod translation_picker;
mod verse_list;

pub use book_picker::BookPicker;
pub use chapter_picker::ChapterPicker;
pub use screen::Screen;
pub use search_bar::SearchBar;
pub use search_results::SearchResults;
pub use translation_picker::TranslationPicker;
pub use verse_list::VerseList;
