use obible_core::{Locale, Message, SearchResult};
use std::fmt;

/// Search panel: header with hit count, numbered hits, or "no results"
pub struct SearchResults<'a> {
    pub translation: Option<&'a str>,
    pub query: &'a str,
    pub results: &'a [SearchResult],
    pub loading: bool,
    pub locale: Locale,
}

impl fmt::Display for SearchResults<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.translation.is_none() {
            return Ok(());
        }

        write!(
            f,
            "{} „{}“ ",
            Message::SearchFor.text(self.locale),
            self.query
        )?;
        if self.loading {
            write!(f, "…")?;
        } else {
            write!(f, "– {} {}", self.results.len(), Message::Hits.text(self.locale))?;
        }
        writeln!(f, "  [{}]", Message::CloseHint.text(self.locale))?;

        for (index, result) in self.results.iter().enumerate() {
            writeln!(f, "{:>3}. {}", index + 1, result.reference())?;
            writeln!(f, "     {}", result.snippet)?;
        }
        if self.results.is_empty() && !self.loading {
            writeln!(f, "{}", Message::NoResults.text(self.locale))?;
        }
        Ok(())
    }
}
