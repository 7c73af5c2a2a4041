//! HTTP client for the alpha-trade ticker endpoint.
//!
//! # Responsibilities
//! - Issue exactly one GET per call, with the configured browser headers
//! - Enforce the upstream timeout
//! - Classify failures into transport, timeout and payload errors

use reqwest::header::{HOST, REFERER, USER_AGENT};
use std::time::{Duration, Instant};

use crate::config::UpstreamConfig;
use crate::error::{ProxyError, ProxyResult};
use crate::observability::metrics;
use crate::ticker::UpstreamTickerRecord;
use crate::upstream::payload::parse_payload;

/// Upstream ticker client. Cheap to clone; connections are pooled.
#[derive(Clone)]
pub struct AlphaClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl AlphaClient {
    /// Create a new client for the given upstream.
    pub fn new(config: UpstreamConfig) -> ProxyResult<Self> {
        let mut builder = reqwest::Client::builder().timeout(Duration::from_millis(config.timeout_ms));
        if !config.system_proxy {
            builder = builder.no_proxy();
        }

        let http = builder
            .build()
            .map_err(|e| ProxyError::UpstreamTransport(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Upstream configuration this client was built with.
    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// Fetch and validate the upstream ticker list.
    pub async fn fetch_records(&self) -> ProxyResult<Vec<UpstreamTickerRecord>> {
        let start = Instant::now();
        let result = self.fetch_inner().await;

        let outcome = match &result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        };
        metrics::record_upstream(outcome, start);

        if let Ok(records) = &result {
            tracing::debug!(
                url = %self.config.url,
                records = records.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Upstream ticker fetched"
            );
        }

        result
    }

    async fn fetch_inner(&self) -> ProxyResult<Vec<UpstreamTickerRecord>> {
        let response = self
            .http
            .get(&self.config.url)
            .header(USER_AGENT, &self.config.user_agent)
            .header(REFERER, &self.config.referer)
            .header(HOST, &self.config.host)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProxyError::UpstreamTransport(format!(
                "Request failed with status code {}",
                status.as_u16()
            )));
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        parse_payload(&body)
    }

    fn classify(&self, error: reqwest::Error) -> ProxyError {
        if error.is_timeout() {
            ProxyError::UpstreamTimeout(self.config.timeout_ms)
        } else {
            ProxyError::UpstreamTransport(error.to_string())
        }
    }
}
