use crate::utils::error::Result;
use async_trait::async_trait;

/// Retrieves a JSON document from a URL.
///
/// Implementations report non-success responses as `FinderError::FetchError`
/// and unparsable bodies as `FinderError::ParseError`.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value>;
}
