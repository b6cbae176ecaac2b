use obible_core::{Locale, Message};
use std::fmt;

const COLUMNS: u32 = 10;

/// Grid of chapter numbers with the selected chapter in brackets
///
/// Renders nothing for a book without chapters.
pub struct ChapterPicker {
    pub chapters_count: u32,
    pub selected: Option<u32>,
    pub locale: Locale,
}

impl fmt::Display for ChapterPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.chapters_count == 0 {
            return Ok(());
        }
        writeln!(f, "{}:", Message::ChapterLabel.text(self.locale))?;

        let width = self.chapters_count.to_string().len();
        for chapter in 1..=self.chapters_count {
            let cell = if Some(chapter) == self.selected {
                format!("[{:>width$}]", chapter, width = width)
            } else {
                format!(" {:>width$} ", chapter, width = width)
            };
            f.write_str(&cell)?;
            if chapter % COLUMNS == 0 || chapter == self.chapters_count {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_chapters_renders_nothing() {
        let picker = ChapterPicker {
            chapters_count: 0,
            selected: Some(1),
            locale: Locale::De,
        };
        assert_eq!(picker.to_string(), "");
    }

    #[test]
    fn test_selected_chapter_is_bracketed() {
        let picker = ChapterPicker {
            chapters_count: 3,
            selected: Some(2),
            locale: Locale::En,
        };
        assert_eq!(picker.to_string(), "Chapter:\n 1 [2] 3 \n");
    }

    #[test]
    fn test_wraps_after_ten_columns() {
        let picker = ChapterPicker {
            chapters_count: 12,
            selected: None,
            locale: Locale::En,
        };
        let out = picker.to_string();
        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().nth(2).unwrap().contains("11"));
    }
}
