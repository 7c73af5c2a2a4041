//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → ticker.rs (preflight short-circuit, or fetch + transform)
//!     → response.rs (CORS/cache headers, error body)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;
pub mod ticker;

pub use request::{request_id, MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
