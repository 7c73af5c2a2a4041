//! Response shaping.
//!
//! # Responsibilities
//! - CORS and cache headers attached to every response
//! - Map pipeline errors to the uniform 500 JSON body

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::config::CacheConfig;
use crate::error::ProxyError;
use crate::ticker::FetchFailure;

/// Value of `Access-Control-Allow-Origin`.
pub const ALLOW_ORIGIN: HeaderValue = HeaderValue::from_static("*");

/// Value of `Access-Control-Allow-Methods`.
pub const ALLOW_METHODS: HeaderValue = HeaderValue::from_static("GET,OPTIONS");

/// Render the configured `Cache-Control` directive.
pub fn cache_control(cache: &CacheConfig) -> HeaderValue {
    HeaderValue::from_str(&cache.header_value()).unwrap_or(HeaderValue::from_static("no-store"))
}

/// Build the 500 response for a failed fetch.
pub fn fetch_failure(error: &ProxyError, source: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(FetchFailure::new(error.to_string(), source)),
    )
        .into_response()
}
