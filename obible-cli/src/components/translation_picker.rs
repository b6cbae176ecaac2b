use obible_core::{Locale, Message};
use std::fmt;

/// Available translations with the selected one in brackets
pub struct TranslationPicker<'a> {
    pub translations: &'a [String],
    pub selected: Option<&'a str>,
    pub locale: Locale,
}

impl fmt::Display for TranslationPicker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.translations.is_empty() {
            return write!(f, "{}", Message::LoadingTranslations.text(self.locale));
        }
        if self.selected.is_none() {
            write!(f, "({}) ", Message::PleaseChoose.text(self.locale))?;
        }

        let entries: Vec<String> = self
            .translations
            .iter()
            .map(|t| {
                if Some(t.as_str()) == self.selected {
                    format!("[{}]", t)
                } else {
                    t.clone()
                }
            })
            .collect();
        write!(f, "{}", entries.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_is_bracketed() {
        let translations = vec!["KJV".to_string(), "LUT".to_string()];
        let picker = TranslationPicker {
            translations: &translations,
            selected: Some("LUT"),
            locale: Locale::En,
        };
        assert_eq!(picker.to_string(), "KJV [LUT]");
    }

    #[test]
    fn test_empty_list_shows_loading() {
        let picker = TranslationPicker {
            translations: &[],
            selected: None,
            locale: Locale::De,
        };
        assert_eq!(picker.to_string(), "Lade Übersetzungen…");
    }

    #[test]
    fn test_prompts_without_selection() {
        let translations = vec!["KJV".to_string()];
        let picker = TranslationPicker {
            translations: &translations,
            selected: None,
            locale: Locale::En,
        };
        assert_eq!(picker.to_string(), "(Please choose…) KJV");
    }
}
