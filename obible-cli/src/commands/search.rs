//! Search command implementation

use super::spinner;
use crate::components::SearchResults;
use anyhow::{bail, Context, Result};
use obible_core::{BibleApi, HttpClient, Locale, Message};

/// Full-text search within one translation
pub async fn search(
    api: &HttpClient,
    translation: &str,
    query: &str,
    limit: Option<u32>,
    json: bool,
    locale: Locale,
) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        bail!("Search query must not be empty");
    }
    let limit = limit.unwrap_or(api.config().search_limit).max(1);

    let pb = spinner(&format!("{} „{}“ …", Message::SearchFor.text(locale), query))?;
    let result = api.search(translation, query, limit).await;
    pb.finish_and_clear();

    let response = result.context(Message::SearchFailed.text(locale))?;
    tracing::info!("'{}' matched {} verses", query, response.results.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!(
            "{}",
            SearchResults {
                translation: Some(translation),
                query: &response.query,
                results: &response.results,
                loading: false,
                locale,
            }
        );
    }

    Ok(())
}
