//! reqwest-backed API client

use super::{ApiResult, BibleApi, BOOKS_PATH, SEARCH_PATH, TEXT_PATH, TRANSLATIONS_PATH};
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::types::{BookList, ChapterResponse, SearchResponse, TranslationList};
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;

/// HTTP client for the Bible backend
///
/// Every call is a single GET; non-2xx answers become [`ApiError::Status`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Create a client from `OBIBLE_*` environment variables, optionally
    /// pointing it at another backend
    pub fn from_env(base_url: Option<&str>) -> Result<Self> {
        let mut config = ClientConfig::from_env()?;
        if let Some(url) = base_url {
            config = config.with_base_url(url)?;
        }
        Ok(Self::new(&config)?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The backend origin requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Resolve an endpoint path and attach query parameters
    fn url(&self, path: &str, params: &[(&str, &str)]) -> ApiResult<Url> {
        let mut url = self
            .base_url()
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", path, e)))?;

        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> ApiResult<T> {
        let url = self.url(path, params)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{} answered {}", path, status);
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl BibleApi for HttpClient {
    async fn translations(&self) -> ApiResult<TranslationList> {
        self.request(TRANSLATIONS_PATH, &[]).await
    }

    async fn books(&self, translation: &str) -> ApiResult<BookList> {
        self.request(BOOKS_PATH, &[("translation", translation)])
            .await
    }

    async fn chapter(
        &self,
        translation: &str,
        book: &str,
        chapter: u32,
    ) -> ApiResult<ChapterResponse> {
        let chapter = chapter.to_string();
        self.request(
            TEXT_PATH,
            &[
                ("translation", translation),
                ("book", book),
                ("chapter", chapter.as_str()),
            ],
        )
        .await
    }

    async fn search(&self, translation: &str, query: &str, limit: u32) -> ApiResult<SearchResponse> {
        let limit = limit.to_string();
        self.request(
            SEARCH_PATH,
            &[("translation", translation), ("q", query), ("limit", limit.as_str())],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> HttpClient {
        let config = ClientConfig::default().with_base_url(base).unwrap();
        HttpClient::new(&config).unwrap()
    }

    #[test]
    fn test_url_resolves_against_origin() {
        let url = client("http://localhost:5000/").url(TRANSLATIONS_PATH, &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/translations");
    }

    #[test]
    fn test_absolute_path_replaces_base_path() {
        let url = client("http://example.org/prefix/").url(BOOKS_PATH, &[]).unwrap();
        assert_eq!(url.as_str(), "http://example.org/api/books");
    }

    #[test]
    fn test_query_parameters_are_encoded() {
        let url = client("http://localhost:5000")
            .url(SEARCH_PATH, &[("translation", "LUT"), ("q", "Licht & Finsternis"), ("limit", "50")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/search?translation=LUT&q=Licht+%26+Finsternis&limit=50"
        );
    }
}
