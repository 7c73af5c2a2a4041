//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.
//! The defaults encode the production upstream, so an empty file (or no
//! file at all) yields a working proxy.

use serde::{Deserialize, Serialize};

/// Root configuration for the ticker proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream ticker endpoint and the headers sent to it.
    pub upstream: UpstreamConfig,

    /// Ranking and reshaping of the upstream records.
    pub ranking: RankingConfig,

    /// Cache directives attached to every response.
    pub cache: CacheConfig,

    /// Inbound timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

pub const DEFAULT_UPSTREAM_URL: &str =
    "https://www.binance.com/bapi/defi/v1/public/alpha-trade/ticker";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Upstream endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Full URL of the ticker endpoint.
    pub url: String,

    /// User-Agent header sent upstream.
    pub user_agent: String,

    /// Referer header sent upstream.
    pub referer: String,

    /// Explicit Host header sent upstream.
    pub host: String,

    /// Upstream request timeout in milliseconds.
    pub timeout_ms: u64,

    /// Label echoed in the `source` field of error bodies.
    pub source_label: String,

    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub system_proxy: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_UPSTREAM_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            referer: "https://www.binance.com/en/dotslot".to_string(),
            host: "www.binance.com".to_string(),
            timeout_ms: 8000,
            source_label: "Official Binance Alpha API".to_string(),
            system_proxy: true,
        }
    }
}

/// Ranking configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Maximum number of records returned.
    pub limit: usize,

    /// Quote currency suffix stripped from symbols to derive the base asset.
    pub quote_suffix: String,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            limit: 15,
            quote_suffix: "USDT".to_string(),
        }
    }
}

/// Cache-Control configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Freshness lifetime for shared caches (`s-maxage`).
    pub s_maxage_secs: u64,

    /// Append `stale-while-revalidate` to the directive.
    pub stale_while_revalidate: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            s_maxage_secs: 15,
            stale_while_revalidate: true,
        }
    }
}

impl CacheConfig {
    /// Render the `Cache-Control` header value.
    pub fn header_value(&self) -> String {
        if self.stale_while_revalidate {
            format!("s-maxage={}, stale-while-revalidate", self.s_maxage_secs)
        } else {
            format!("s-maxage={}", self.s_maxage_secs)
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 10 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "alpha_ticker_proxy=info,tower_http=info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
