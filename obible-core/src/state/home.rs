//! Home page: browse the App's selected translation

use super::pane::{BookPolicy, ChapterPane, PaneView};
use super::request::{Request, Ticket, Tickets};
use crate::api::ApiResult;
use crate::messages::Message;
use crate::types::{BookList, ChapterResponse};

/// Book/chapter browser driven by the App's translation
#[derive(Debug, Default)]
pub struct HomePage {
    pane: ChapterPane,
}

impl HomePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pane(&self) -> &ChapterPane {
        &self.pane
    }

    pub fn translation(&self) -> Option<&str> {
        self.pane.translation()
    }

    /// Follow the App's translation
    ///
    /// A change resets book, chapter, chapter data and error, then asks for the
    /// new book list. Without a translation the page only shows a prompt.
    pub(crate) fn set_translation(
        &mut self,
        translation: Option<&str>,
        tickets: &mut Tickets,
    ) -> Option<Request> {
        if self.pane.translation() == translation {
            return None;
        }
        self.pane.reset(translation.map(str::to_string));
        self.pane.request_books(tickets, true)
    }

    pub(crate) fn finish_books(
        &mut self,
        ticket: Ticket,
        result: ApiResult<BookList>,
        tickets: &mut Tickets,
    ) -> Option<Option<Request>> {
        self.pane
            .finish_books(ticket, result, BookPolicy::FirstBook, tickets)
    }

    pub(crate) fn finish_chapter(&mut self, ticket: Ticket, result: ApiResult<ChapterResponse>) -> bool {
        self.pane.finish_chapter(ticket, result)
    }

    pub(crate) fn pane_mut(&mut self) -> &mut ChapterPane {
        &mut self.pane
    }

    /// Main-area view model, or the prompt shown without a translation
    pub fn view(&self) -> Result<PaneView<'_>, Message> {
        if self.pane.translation().is_none() {
            return Err(Message::ChooseTranslation);
        }
        Ok(self
            .pane
            .view(Message::LoadingContent, Message::ChooseBookAndChapter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::types::BookMeta;

    #[test]
    fn test_without_translation_prompts() {
        let home = HomePage::new();
        assert_eq!(home.view().unwrap_err(), Message::ChooseTranslation);
    }

    #[test]
    fn test_translation_change_requests_books_once() {
        let mut tickets = Tickets::default();
        let mut home = HomePage::new();
        assert!(matches!(
            home.set_translation(Some("LUT"), &mut tickets),
            Some(Request::Books { ref translation, .. }) if translation == "LUT"
        ));
        assert!(home.set_translation(Some("LUT"), &mut tickets).is_none());
        assert_eq!(
            home.view().unwrap().loading,
            Some(Message::LoadingContent)
        );
    }

    #[test]
    fn test_book_failure_resets_selection() {
        let mut tickets = Tickets::default();
        let mut home = HomePage::new();
        let ticket = home.set_translation(Some("LUT"), &mut tickets).unwrap().ticket();
        let follow_up = home
            .finish_books(ticket, Err(ApiError::Status(503)), &mut tickets)
            .unwrap();

        assert!(follow_up.is_none());
        assert!(home.pane().books().is_empty());
        assert_eq!(home.pane().selection().book_id, None);
        let view = home.view().unwrap();
        assert_eq!(view.error, Some(Message::BooksFailed));
        assert_eq!(view.placeholder, Some(Message::ChooseBookAndChapter));
    }

    #[test]
    fn test_switching_translation_drops_old_books() {
        let mut tickets = Tickets::default();
        let mut home = HomePage::new();
        let old = home.set_translation(Some("KJV"), &mut tickets).unwrap().ticket();
        home.set_translation(Some("LUT"), &mut tickets);

        let list = BookList {
            translation: "KJV".into(),
            books: vec![BookMeta::new("GEN", "Genesis", 50)],
        };
        assert!(home.finish_books(old, Ok(list), &mut tickets).is_none());
        assert!(home.pane().books().is_empty());
    }
}
