use crate::config::toml_config::SourceConfig;
use crate::domain::ports::JsonFetcher;
use crate::utils::error::{FinderError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

/// `JsonFetcher` backed by a reqwest client. One GET per call, no retries.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the client from `[source]`: timeout, user agent and extra headers.
    pub fn from_source(source: &SourceConfig) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(timeout) = source.timeout() {
            builder = builder.timeout(timeout);
        }

        if let Some(user_agent) = &source.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        if let Some(headers) = &source.headers {
            let mut header_map = HeaderMap::new();
            for (key, value) in headers {
                let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                    FinderError::InvalidConfigValueError {
                        field: "source.headers".to_string(),
                        value: key.clone(),
                        reason: e.to_string(),
                    }
                })?;
                let value = HeaderValue::from_str(value).map_err(|e| {
                    FinderError::InvalidConfigValueError {
                        field: format!("source.headers.{}", key),
                        value: value.clone(),
                        reason: e.to_string(),
                    }
                })?;
                header_map.insert(name, value);
            }
            builder = builder.default_headers(header_map);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value> {
        tracing::debug!("Making API request to: {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("❌ Request to {} failed: {}", url, e);
                return Err(FinderError::HttpError(e));
            }
        };

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            tracing::error!("❌ {} responded with non-success status {}", url, status);
            return Err(FinderError::FetchError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // 先讀成文字再解析，讓 JSON 格式錯誤歸類為 ParseError
        let body = response.text().await.map_err(|e| {
            tracing::error!("❌ Failed to read response body from {}: {}", url, e);
            FinderError::HttpError(e)
        })?;
        tracing::debug!("Received {} bytes", body.len());

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("❌ Response from {} is not valid JSON: {}", url, e);
            FinderError::ParseError(e)
        })
    }
}
