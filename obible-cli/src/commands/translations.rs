//! Translations command implementation

use super::spinner;
use anyhow::{Context, Result};
use obible_core::{BibleApi, HttpClient, Locale, Message};

/// List the translations offered by the backend
pub async fn translations(api: &HttpClient, json: bool, locale: Locale) -> Result<()> {
    let pb = spinner(Message::LoadingTranslations.text(locale))?;
    let result = api.translations().await;
    pb.finish_and_clear();

    let list = result.context(Message::TranslationsFailed.text(locale))?;
    tracing::info!("{} translations at {}", list.translations.len(), api.base_url());

    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        for translation in &list.translations {
            println!("{}", translation);
        }
    }

    Ok(())
}
