//! Upstream envelope validation.
//!
//! The ticker endpoint wraps its records as `{ "code": "000000", "data": [...] }`.
//! Anything else is rejected with the raw body attached.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ProxyError, ProxyResult};
use crate::ticker::{UpstreamTickerRecord, SUCCESS_CODE};

/// Parse and validate an upstream body, returning its records in order.
pub fn parse_payload(body: &[u8]) -> ProxyResult<Vec<UpstreamTickerRecord>> {
    let value: Value = serde_json::from_slice(body).map_err(|_| {
        ProxyError::InvalidUpstreamResponse(String::from_utf8_lossy(body).into_owned())
    })?;

    let code_ok = value.get("code").and_then(Value::as_str) == Some(SUCCESS_CODE);
    let data = match value.get("data").and_then(Value::as_array) {
        Some(data) if code_ok => data,
        _ => return Err(ProxyError::InvalidUpstreamResponse(value.to_string())),
    };

    data.iter()
        .enumerate()
        .map(|(index, item)| {
            UpstreamTickerRecord::deserialize(item)
                .map_err(|e| ProxyError::Transform(format!("record {index}: {e}")))
        })
        .collect()
}
