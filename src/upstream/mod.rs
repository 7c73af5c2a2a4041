//! Upstream ticker source.
//!
//! # Data Flow
//! ```text
//! AlphaClient::fetch_records
//!     → GET alpha-trade/ticker (UA, Referer, Host, timeout)
//!     → payload.rs (code == "000000", data is array)
//!     → Vec<UpstreamTickerRecord>
//! ```
//!
//! # Design Decisions
//! - One call per inbound request; no retries, no caching
//! - Timeouts are reported separately from other transport failures

pub mod client;
pub mod payload;

pub use client::AlphaClient;
pub use payload::parse_payload;

use crate::config::RankingConfig;
use crate::error::ProxyResult;
use crate::ticker::{top_by_volume, OutputTickerRecord};

/// Run the whole fetch-transform pipeline once.
pub async fn fetch_top_tickers(
    client: &AlphaClient,
    ranking: &RankingConfig,
) -> ProxyResult<Vec<OutputTickerRecord>> {
    let records = client.fetch_records().await?;
    top_by_volume(records, ranking)
}
