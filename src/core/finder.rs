use crate::adapters::http::HttpFetcher;
use crate::config::toml_config::{FinderConfig, DEFAULT_COLORS_URL};
use crate::domain::matcher;
use crate::domain::model::{ColorRecord, Criteria};
use crate::domain::ports::JsonFetcher;
use crate::utils::error::Result;

/// Fetches the color list and filters it against a [`Criteria`].
///
/// Every call fetches fresh data; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct ColorFinder<F: JsonFetcher> {
    fetcher: F,
    url: String,
}

impl<F: JsonFetcher> ColorFinder<F> {
    pub fn new(fetcher: F, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
        }
    }

    pub fn with_default_url(fetcher: F) -> Self {
        Self::new(fetcher, DEFAULT_COLORS_URL)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch then match. `Ok(vec![])` means the fetch worked and nothing matched.
    pub async fn search(&self, criteria: &Criteria) -> Result<Vec<ColorRecord>> {
        tracing::debug!("Searching {} with {:?}", self.url, criteria);

        let data = self.fetcher.fetch_json(&self.url).await?;
        let records: Vec<ColorRecord> = serde_json::from_value(data).map_err(|e| {
            tracing::error!("❌ Color data from {} has an unexpected shape: {}", self.url, e);
            e
        })?;

        let total = records.len();
        let found = matcher::filter_colors(records, criteria);
        tracing::info!("🎨 {} of {} colors matched", found.len(), total);

        Ok(found)
    }

    /// Like [`search`](Self::search), but any failure is logged and collapsed to `None`.
    pub async fn fetch_colors(&self, criteria: &Criteria) -> Option<Vec<ColorRecord>> {
        match self.search(criteria).await {
            Ok(found) => Some(found),
            Err(e) => {
                tracing::warn!("No color data available: {}", e);
                None
            }
        }
    }
}

impl ColorFinder<HttpFetcher> {
    pub fn from_config(config: &FinderConfig) -> Result<Self> {
        let fetcher = HttpFetcher::from_source(&config.source)?;
        Ok(Self::new(fetcher, config.endpoint()))
    }
}
