//! Dataset loading
//!
//! Fetches the visualization payload and the summary concurrently. Each
//! fetch fails on its own: a failure is logged and that dataset becomes
//! absent, while the other one is still used.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{InsightError, Result};
use crate::types::{RawPayload, SummaryStatistics};

/// Where JSON documents come from
#[allow(async_fn_in_trait)]
pub trait JsonSource {
    async fn fetch_json(&self, path: &str) -> Result<Value>;
}

/// Fetches over HTTP, resolving relative paths against a base URL
pub struct HttpSource {
    client: reqwest::Client,
    base: reqwest::Url,
}

impl HttpSource {
    /// `base` is usually the page URL
    pub fn new(base: &str) -> Result<Self> {
        let base = reqwest::Url::parse(base)
            .map_err(|e| InsightError::Config(format!("invalid base URL '{base}': {e}")))?;
        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    pub fn resolve(&self, path: &str) -> Result<reqwest::Url> {
        self.base
            .join(path)
            .map_err(|e| InsightError::Config(format!("invalid dataset path '{path}': {e}")))
    }

    /// Check the status before decoding the body
    async fn handle_response(path: &str, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            return Err(InsightError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl JsonSource for HttpSource {
    async fn fetch_json(&self, path: &str) -> Result<Value> {
        let url = self.resolve(path)?;
        debug!(%url, "fetching dataset");
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;
        Self::handle_response(path, response).await
    }
}

/// Both datasets, each absent when its fetch or decode failed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datasets {
    pub payload: Option<RawPayload>,
    pub summary: Option<SummaryStatistics>,
}

/// Fetch and decode one document; any failure is logged and yields `None`
pub async fn fetch_optional<T: DeserializeOwned>(source: &impl JsonSource, path: &str) -> Option<T> {
    let decoded = match source.fetch_json(path).await {
        Ok(value) => serde_json::from_value(value).map_err(InsightError::from),
        Err(e) => Err(e),
    };
    match decoded {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(path, error = %e, "unable to load dataset");
            None
        }
    }
}

/// Issue both fetches together and wait for both
pub async fn load_datasets(source: &impl JsonSource, config: &Config) -> Datasets {
    let (payload, summary) = futures::join!(
        fetch_optional::<RawPayload>(source, &config.payload_url),
        fetch_optional::<SummaryStatistics>(source, &config.summary_url),
    );
    if payload.is_none() {
        warn!("visualization payload missing; charts will show fallbacks");
    }
    Datasets { payload, summary }
}
