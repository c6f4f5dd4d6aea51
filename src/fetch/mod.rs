//! Catalog fetching from the headless content API
//!
//! Both categories are requested concurrently and joined; the load succeeds
//! only if both requests do. There is no retry, timeout or partial result:
//! a failed load is terminal until the caller reloads.
//!
//! # Security Note - Logging
//!
//! The API key is held in a [`SecretString`] and sent through a header value
//! marked sensitive, so neither `Debug` output nor reqwest's own request
//! logging reveals it.

pub mod error;

pub use error::FetchError;

use crate::catalog::{ApiErrorBody, CatalogStore, Category, ContentsEnvelope, RawCatalogItem};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-MICROCMS-API-KEY";

/// Upper bound on records fetched per category
pub const DEFAULT_PAGE_LIMIT: usize = 100;

/// Where and how to reach the content API
#[derive(Debug)]
pub struct ApiEndpoint {
    /// Base URL without trailing slash, e.g. `https://demo.microcms.io/api/v1`
    pub base_url: String,
    /// API key sent in [`API_KEY_HEADER`]
    pub api_key: SecretString,
    /// `limit` query parameter for each list request
    pub page_limit: usize,
}

impl ApiEndpoint {
    /// Endpoint for a hosted service domain
    #[must_use]
    pub fn for_service_domain(domain: &str, api_key: SecretString, page_limit: usize) -> Self {
        Self {
            base_url: format!("https://{domain}.microcms.io/api/v1"),
            api_key,
            page_limit,
        }
    }

    /// List URL for one category
    #[must_use]
    pub fn category_url(&self, category: Category) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), category.endpoint())
    }
}

/// A source of raw catalog records, one category at a time
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every record of `category` (up to the source's page limit)
    ///
    /// # Errors
    /// Returns `FetchError` if the request fails or the response is unusable.
    async fn fetch_category(&self, category: Category) -> Result<Vec<RawCatalogItem>, FetchError>;
}

/// Fetch both categories concurrently and build a store
///
/// # Errors
/// Returns the first `FetchError` of either request; no partial store is
/// produced.
pub async fn load_catalog(source: &dyn CatalogSource) -> Result<CatalogStore, FetchError> {
    let (plugins, scripts) = tokio::try_join!(
        source.fetch_category(Category::Plugins),
        source.fetch_category(Category::Scripts),
    )?;

    info!(
        plugins = plugins.len(),
        scripts = scripts.len(),
        "catalog loaded"
    );
    Ok(CatalogStore::from_raw(plugins, scripts))
}

/// HTTP implementation of [`CatalogSource`]
#[derive(Debug)]
pub struct HttpCatalogClient {
    client: Client,
    endpoint: ApiEndpoint,
}

impl HttpCatalogClient {
    /// Build a client for `endpoint`
    ///
    /// # Errors
    /// Returns `FetchError::Client` if the API key is not a valid header value
    /// or the HTTP client cannot be constructed.
    pub fn new(endpoint: ApiEndpoint) -> Result<Self, FetchError> {
        let mut key = HeaderValue::from_str(endpoint.api_key.expose_secret())
            .map_err(|_| FetchError::Client("API key contains invalid characters".into()))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogClient {
    async fn fetch_category(&self, category: Category) -> Result<Vec<RawCatalogItem>, FetchError> {
        let url = self.endpoint.category_url(category);
        debug!(%url, limit = self.endpoint.page_limit, "fetching category");

        let response = self
            .client
            .get(&url)
            .query(&[("limit", self.endpoint.page_limit)])
            .send()
            .await
            .map_err(|source| FetchError::Network { category, source })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Network { category, source })?;

        if !status.is_success() {
            return Err(FetchError::Status {
                category,
                status: status.as_u16(),
                message: error_message(&body, status.canonical_reason()),
            });
        }

        decode_contents(category, &body)
    }
}

/// Upstream error message from a failure body, or the status reason
fn error_message(body: &str, reason: Option<&str>) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| reason.unwrap_or("request failed").to_string())
}

/// Decode a contents envelope
///
/// # Errors
/// Returns `FetchError::Decode` if `body` is not a valid envelope.
pub fn decode_contents(category: Category, body: &str) -> Result<Vec<RawCatalogItem>, FetchError> {
    serde_json::from_str::<ContentsEnvelope>(body)
        .map(|envelope| envelope.contents)
        .map_err(|e| FetchError::Decode {
            category,
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockSource;

    #[test]
    fn test_service_domain_url() {
        let endpoint =
            ApiEndpoint::for_service_domain("demo", SecretString::from("k".to_string()), 100);
        assert_eq!(
            endpoint.category_url(Category::Plugins),
            "https://demo.microcms.io/api/v1/plugins"
        );
    }

    #[test]
    fn test_category_url_trims_trailing_slash() {
        let endpoint = ApiEndpoint {
            base_url: "http://localhost:8080/api/".into(),
            api_key: SecretString::from("k".to_string()),
            page_limit: 10,
        };
        assert_eq!(
            endpoint.category_url(Category::Scripts),
            "http://localhost:8080/api/scripts"
        );
    }

    #[test]
    fn test_endpoint_debug_redacts_key() {
        let endpoint =
            ApiEndpoint::for_service_domain("demo", SecretString::from("secret-key".to_string()), 100);
        assert!(!format!("{endpoint:?}").contains("secret-key"));
    }

    #[test]
    fn test_error_message_from_body() {
        let body = r#"{"message":"contentId is not found."}"#;
        assert_eq!(error_message(body, Some("Not Found")), "contentId is not found.");
    }

    #[test]
    fn test_error_message_falls_back_to_reason() {
        assert_eq!(error_message("<html>", Some("Bad Gateway")), "Bad Gateway");
        assert_eq!(error_message("", None), "request failed");
    }

    #[test]
    fn test_decode_contents() {
        let items = decode_contents(Category::Plugins, r#"{"contents":[{"id":"1"}]}"#).unwrap();
        assert_eq!(items.len(), 1);
        assert!(matches!(
            decode_contents(Category::Plugins, "not json"),
            Err(FetchError::Decode { category: Category::Plugins, .. })
        ));
    }

    #[test]
    fn test_http_client_rejects_invalid_key() {
        let endpoint = ApiEndpoint::for_service_domain(
            "demo",
            SecretString::from("bad\nkey".to_string()),
            100,
        );
        assert!(matches!(HttpCatalogClient::new(endpoint), Err(FetchError::Client(_))));
    }

    #[tokio::test]
    async fn test_load_catalog_joins_both_categories() {
        let source = MockSource::new(
            vec![crate::testing::raw("p1", "x,y")],
            vec![crate::testing::raw("s1", "z")],
        );
        let store = load_catalog(&source).await.unwrap();
        assert_eq!(store.items(Category::Plugins).len(), 1);
        assert_eq!(store.items(Category::Scripts).len(), 1);
        assert_eq!(store.all_tags().len(), 3);
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_load_catalog_fails_if_either_fails() {
        let source = MockSource::failing(Category::Scripts, 500, "internal error");
        let err = load_catalog(&source).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("internal error"));
    }
}
