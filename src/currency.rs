//! Exchange-rate upstream. The proxy relays whatever JSON the upstream returns.

use crate::config::CurrencyConfig;
use crate::error::AppError;
use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, warn};

/// Source of the daily rates document.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Raw JSON body of the rates document. Fails on transport errors, non-2xx status, or a
    /// body that is not JSON.
    async fn fetch(&self) -> Result<Bytes, AppError>;
}

pub struct ReqwestRateSource {
    client: reqwest::Client,
    url: String,
}

impl ReqwestRateSource {
    pub fn new(config: &CurrencyConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl RateSource for ReqwestRateSource {
    async fn fetch(&self) -> Result<Bytes, AppError> {
        let start = tokio::time::Instant::now();
        debug!(url = %self.url, "HTTP GET start");
        let resp = self.client.get(&self.url).send().await.map_err(|e| {
            warn!(url = %self.url, error = %e, "HTTP GET failed");
            AppError::Upstream(e.to_string())
        })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!("upstream returned {}", status)));
        }
        let body = resp
            .bytes()
            .await
            .map_err(|e| AppError::Upstream(format!("failed reading body: {}", e)))?;
        serde_json::from_slice::<serde_json::Value>(&body)
            .map_err(|e| AppError::Upstream(format!("body is not JSON: {}", e)))?;
        debug!(
            url = %self.url,
            bytes = body.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "HTTP GET done"
        );
        Ok(body)
    }
}
