//! Client view state
//!
//! The state machine mirrors the client's component tree: an [`App`] shell
//! holding the translation list, search panel and history, and one mounted
//! [`Page`] (Home or Reader) holding book/chapter selection.

mod app;
mod history;
mod home;
mod pane;
mod reader;
mod request;
mod search;

pub use app::{Action, App, Page};
pub use history::History;
pub use home::HomePage;
pub use pane::{ChapterPane, PaneView};
pub use reader::ReaderPage;
pub use request::{Completion, Request, Ticket, Tickets};
pub use search::{SearchOutcome, SearchPanel};
