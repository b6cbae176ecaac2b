use obible_core::{BookMeta, Locale, Message};
use std::fmt;

/// The book list of the active translation; `>` marks the selection
pub struct BookPicker<'a> {
    pub books: &'a [BookMeta],
    pub selected: Option<&'a str>,
    pub locale: Locale,
}

impl fmt::Display for BookPicker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", Message::BookLabel.text(self.locale))?;

        let marker = |selected: bool| if selected { '>' } else { ' ' };
        writeln!(
            f,
            "{} {}",
            marker(self.selected.is_none()),
            Message::PleaseChoose.text(self.locale)
        )?;

        let width = self.books.iter().map(|b| b.id.len()).max().unwrap_or(0);
        for book in self.books {
            writeln!(
                f,
                "{} {:<width$}  {}",
                marker(Some(book.id.as_str()) == self.selected),
                book.id,
                book.name,
                width = width
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_selected_book() {
        let books = vec![BookMeta::new("GEN", "Genesis", 50), BookMeta::new("EXO", "Exodus", 40)];
        let out = BookPicker {
            books: &books,
            selected: Some("EXO"),
            locale: Locale::En,
        }
        .to_string();
        assert_eq!(out, "Book:\n  Please choose…\n  GEN  Genesis\n> EXO  Exodus\n");
    }

    #[test]
    fn test_placeholder_selected_without_book() {
        let out = BookPicker {
            books: &[],
            selected: None,
            locale: Locale::De,
        }
        .to_string();
        assert_eq!(out, "Buch:\n> Bitte wählen…\n");
    }
}
