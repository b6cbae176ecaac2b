//! Search panel state

use super::request::{Request, Ticket, Tickets};
use crate::api::ApiResult;
use crate::messages::Message;
use crate::types::{SearchResponse, SearchResult};

/// What the search panel currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// No query submitted (or dismissed)
    Hidden,
    Loading,
    Results(&'a [SearchResult]),
    /// The query completed without hits; distinct from a failure
    NoResults,
}

#[derive(Debug, Default)]
pub struct SearchPanel {
    input: String,
    query: String,
    results: Vec<SearchResult>,
    searching: bool,
    error: Option<Message>,
    ticket: Option<Ticket>,
}

impl SearchPanel {
    /// Current contents of the search input
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The submitted query; empty while the panel is closed
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn error(&self) -> Option<Message> {
        self.error
    }

    pub(crate) fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
    }

    /// Start a search for the trimmed input
    ///
    /// Nothing happens for blank input, without a translation, or while a
    /// search is already running.
    pub(crate) fn submit(
        &mut self,
        input: &str,
        translation: Option<&str>,
        limit: u32,
        tickets: &mut Tickets,
    ) -> Option<Request> {
        let query = input.trim();
        if query.is_empty() || self.searching {
            return None;
        }
        let translation = translation?;

        let ticket = tickets.issue();
        self.input = query.to_string();
        self.query = query.to_string();
        self.results.clear();
        self.error = None;
        self.searching = true;
        self.ticket = Some(ticket);

        Some(Request::Search {
            ticket,
            translation: translation.to_string(),
            query: query.to_string(),
            limit,
        })
    }

    /// Apply a search completion; returns `false` for a stale ticket
    pub(crate) fn finish(&mut self, ticket: Ticket, result: ApiResult<SearchResponse>) -> bool {
        if self.ticket != Some(ticket) {
            tracing::debug!("dropping stale search {}", ticket);
            return false;
        }
        self.ticket = None;
        self.searching = false;

        match result {
            Ok(response) => {
                tracing::debug!(
                    "search '{}' returned {} results",
                    response.query,
                    response.results.len()
                );
                self.results = response.results;
            }
            Err(e) => {
                tracing::error!("search failed: {}", e);
                self.results.clear();
                self.error = Some(Message::SearchFailed);
            }
        }
        true
    }

    /// Dismiss the panel: input, query, results and error are cleared together
    pub(crate) fn clear(&mut self) {
        self.input.clear();
        self.query.clear();
        self.results.clear();
        self.error = None;
        self.searching = false;
        self.ticket = None;
    }

    pub fn outcome(&self) -> SearchOutcome<'_> {
        if self.query.is_empty() {
            SearchOutcome::Hidden
        } else if self.searching {
            SearchOutcome::Loading
        } else if self.results.is_empty() {
            SearchOutcome::NoResults
        } else {
            SearchOutcome::Results(&self.results)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn response(results: Vec<SearchResult>) -> SearchResponse {
        SearchResponse {
            translation: "LUT".into(),
            query: "Licht".into(),
            results,
        }
    }

    fn hit() -> SearchResult {
        SearchResult {
            book_id: "GEN".into(),
            book_name: "1. Mose".into(),
            chapter: 1,
            verse: 3,
            snippet: "Es werde Licht!".into(),
        }
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let mut tickets = Tickets::default();
        let mut panel = SearchPanel::default();
        assert!(panel.submit("   ", Some("LUT"), 50, &mut tickets).is_none());
        assert_eq!(panel.outcome(), SearchOutcome::Hidden);
    }

    #[test]
    fn test_requires_translation() {
        let mut tickets = Tickets::default();
        let mut panel = SearchPanel::default();
        assert!(panel.submit("Licht", None, 50, &mut tickets).is_none());
        assert!(!panel.is_searching());
    }

    #[test]
    fn test_query_is_trimmed() {
        let mut tickets = Tickets::default();
        let mut panel = SearchPanel::default();
        let request = panel.submit("  Licht ", Some("LUT"), 25, &mut tickets);
        assert!(matches!(
            request,
            Some(Request::Search { ref query, limit: 25, .. }) if query == "Licht"
        ));
        assert_eq!(panel.input(), "Licht");
        assert_eq!(panel.outcome(), SearchOutcome::Loading);
    }

    #[test]
    fn test_second_submit_while_searching_is_ignored() {
        let mut tickets = Tickets::default();
        let mut panel = SearchPanel::default();
        panel.submit("Licht", Some("LUT"), 50, &mut tickets);
        assert!(panel.submit("Wasser", Some("LUT"), 50, &mut tickets).is_none());
        assert_eq!(panel.query(), "Licht");
    }

    #[test]
    fn test_zero_matches_is_not_an_error() {
        let mut tickets = Tickets::default();
        let mut panel = SearchPanel::default();
        let ticket = panel.submit("xyzzy", Some("LUT"), 50, &mut tickets).unwrap().ticket();
        assert!(panel.finish(ticket, Ok(response(Vec::new()))));
        assert_eq!(panel.outcome(), SearchOutcome::NoResults);
        assert_eq!(panel.error(), None);
    }

    #[test]
    fn test_failure_sets_error_and_empties_results() {
        let mut tickets = Tickets::default();
        let mut panel = SearchPanel::default();
        let ticket = panel.submit("Licht", Some("LUT"), 50, &mut tickets).unwrap().ticket();
        panel.finish(ticket, Err(ApiError::Status(500)));
        assert_eq!(panel.error(), Some(Message::SearchFailed));
        assert!(panel.results().is_empty());
        assert!(!panel.is_searching());
    }

    #[test]
    fn test_clear_resets_everything_at_once() {
        let mut tickets = Tickets::default();
        let mut panel = SearchPanel::default();
        let ticket = panel.submit("Licht", Some("LUT"), 50, &mut tickets).unwrap().ticket();
        panel.finish(ticket, Ok(response(vec![hit()])));
        assert!(matches!(panel.outcome(), SearchOutcome::Results(r) if r.len() == 1));

        panel.clear();
        assert_eq!(panel.input(), "");
        assert_eq!(panel.query(), "");
        assert!(panel.results().is_empty());
        assert_eq!(panel.error(), None);
        assert_eq!(panel.outcome(), SearchOutcome::Hidden);
    }

    #[test]
    fn test_completion_after_clear_is_dropped() {
        let mut tickets = Tickets::default();
        let mut panel = SearchPanel::default();
        let ticket = panel.submit("Licht", Some("LUT"), 50, &mut tickets).unwrap().ticket();
        panel.clear();
        assert!(!panel.finish(ticket, Ok(response(vec![hit()]))));
        assert!(panel.results().is_empty());
    }
}
