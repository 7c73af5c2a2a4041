//! Upstream and output ticker records.

use serde::{Deserialize, Serialize, Serializer};

/// Status code the upstream uses for a successful response.
pub const SUCCESS_CODE: &str = "000000";

/// One record of the upstream `data` array, as received.
///
/// Only the fields the proxy reads are declared; anything else the upstream
/// sends is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamTickerRecord {
    pub symbol: String,
    pub last_price: String,
    pub price_change_percent: String,
    pub quote_volume: String,
}

/// One ranked entry of the proxy response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputTickerRecord {
    pub symbol: String,
    pub base_asset: String,
    pub last_price: String,
    /// Percentage with two decimals, e.g. `"1.50"`.
    pub price_change_percent: String,
    #[serde(serialize_with = "serialize_volume")]
    pub quote_volume: f64,
    /// Reserved; always zero.
    pub bps: u32,
}

/// Emit integral volumes as JSON integers (`2000000`, not `2000000.0`).
fn serialize_volume<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53

    if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        if *value >= 0.0 {
            serializer.serialize_u64(*value as u64)
        } else {
            serializer.serialize_i64(*value as i64)
        }
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Error body returned with every failed fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFailure {
    pub error: String,
    pub msg: String,
    pub source: String,
}

impl FetchFailure {
    pub const LABEL: &'static str = "Fetch Failed";

    pub fn new(msg: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            error: Self::LABEL.to_string(),
            msg: msg.into(),
            source: source.into(),
        }
    }
}
