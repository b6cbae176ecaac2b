use obible_core::{Locale, Message};
use std::fmt;

/// The search input line
pub struct SearchBar<'a> {
    pub value: &'a str,
    pub disabled: bool,
    pub locale: Locale,
}

impl fmt::Display for SearchBar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if self.value.is_empty() {
            Message::SearchPlaceholder.text(self.locale)
        } else {
            self.value
        };
        write!(f, "{}: {}", Message::SearchButton.text(self.locale), text)?;
        if self.disabled {
            write!(f, " ({})", Message::Disabled.text(self.locale))?;
        }
        Ok(())
    }
}
