//! User-visible text in German (default) and English

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Language of the message catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    De,
    En,
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "de" | "de-de" | "german" => Ok(Locale::De),
            "en" | "en-us" | "en-gb" | "english" => Ok(Locale::En),
            other => Err(ConfigError::UnknownLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::De => write!(f, "de"),
            Locale::En => write!(f, "en"),
        }
    }
}

/// Every fixed string the client shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    AppTitle,
    AppSubtitle,
    Footer,

    // Failures
    TranslationsFailed,
    BooksFailed,
    ChapterFailed,
    SearchFailed,

    // Page prompts
    ChooseTranslation,
    NoTranslationSelected,
    ChooseBookAndChapter,
    LoadingContent,
    LoadingChapter,
    PageNotFound,

    // Pickers
    LoadingTranslations,
    PleaseChoose,
    BookLabel,
    ChapterLabel,

    // Search
    SearchPlaceholder,
    SearchButton,
    SearchFor,
    Hits,
    NoResults,
    CloseHint,
    Disabled,
}

impl Message {
    /// Text of this message in `locale`
    pub fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::De => self.german(),
            Locale::En => self.english(),
        }
    }

    fn german(self) -> &'static str {
        match self {
            Message::AppTitle => "Offline Bibel App",
            Message::AppSubtitle => "Schnellzugriff auf offline gespeicherte Bibeltexte",
            Message::Footer => "Datenquelle: Zefania XML – komplett offline nutzbar.",
            Message::TranslationsFailed => "Übersetzungen konnten nicht geladen werden.",
            Message::BooksFailed => "Bücher konnten nicht geladen werden.",
            Message::ChapterFailed => "Kapitel konnte nicht geladen werden.",
            Message::SearchFailed => "Suche fehlgeschlagen.",
            Message::ChooseTranslation => "Bitte eine Übersetzung auswählen.",
            Message::NoTranslationSelected => "Keine Übersetzung gewählt.",
            Message::ChooseBookAndChapter => {
                "Wählen Sie ein Buch und Kapitel, um den Text anzuzeigen."
            }
            Message::LoadingContent => "Lade Inhalte…",
            Message::LoadingChapter => "Lade Kapitel…",
            Message::PageNotFound => "Seite nicht gefunden.",
            Message::LoadingTranslations => "Lade Übersetzungen…",
            Message::PleaseChoose => "Bitte wählen…",
            Message::BookLabel => "Buch",
            Message::ChapterLabel => "Kapitel",
            Message::SearchPlaceholder => "Suche in der Bibel…",
            Message::SearchButton => "Suche",
            Message::SearchFor => "Suche nach",
            Message::Hits => "Treffer",
            Message::NoResults => "Keine Treffer gefunden.",
            Message::CloseHint => "Schließen mit „close“",
            Message::Disabled => "deaktiviert",
        }
    }

    fn english(self) -> &'static str {
        match self {
            Message::AppTitle => "Offline Bible App",
            Message::AppSubtitle => "Quick access to offline Bible texts",
            Message::Footer => "Data source: Zefania XML – fully usable offline.",
            Message::TranslationsFailed => "Could not load translations.",
            Message::BooksFailed => "Could not load books.",
            Message::ChapterFailed => "Could not load chapter.",
            Message::SearchFailed => "Search failed.",
            Message::ChooseTranslation => "Please choose a translation.",
            Message::NoTranslationSelected => "No translation selected.",
            Message::ChooseBookAndChapter => "Choose a book and chapter to display the text.",
            Message::LoadingContent => "Loading content…",
            Message::LoadingChapter => "Loading chapter…",
            Message::PageNotFound => "Page not found.",
            Message::LoadingTranslations => "Loading translations…",
            Message::PleaseChoose => "Please choose…",
            Message::BookLabel => "Book",
            Message::ChapterLabel => "Chapter",
            Message::SearchPlaceholder => "Search the Bible…",
            Message::SearchButton => "Search",
            Message::SearchFor => "Search for",
            Message::Hits => "hits",
            Message::NoResults => "No results found.",
            Message::CloseHint => "type \"close\" to dismiss",
            Message::Disabled => "disabled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_german_is_default() {
        assert_eq!(Locale::default(), Locale::De);
        assert_eq!(
            Message::BooksFailed.text(Locale::default()),
            "Bücher konnten nicht geladen werden."
        );
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("de".parse::<Locale>().unwrap(), Locale::De);
        assert!("fr".parse::<Locale>().is_err());
    }
}
