use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::time::Instant;

use crate::http::request::request_id;
use crate::http::response::fetch_failure;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::upstream::fetch_top_tickers;

/// Fetch the upstream ticker and return the top entries by quote volume.
pub async fn top_tickers(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
) -> Response {
    let start = Instant::now();
    let request_id = request_id(&headers);

    let response = match fetch_top_tickers(&state.client, &state.config.ranking).await {
        Ok(top) => {
            tracing::debug!(request_id = %request_id, entries = top.len(), "Serving top tickers");
            (StatusCode::OK, Json(top)).into_response()
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                kind = e.kind(),
                error = %e,
                "Alpha API error"
            );
            fetch_failure(&e, &state.config.upstream.source_label)
        }
    };

    metrics::record_request(method.as_str(), response.status().as_u16(), start);
    response
}

/// CORS preflight: empty 200, headers come from the router layers.
pub async fn preflight() -> StatusCode {
    metrics::record_preflight();
    StatusCode::OK
}

/// Liveness probe. Never touches the upstream.
pub async fn health() -> &'static str {
    "ok"
}
