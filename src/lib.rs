//! Alpha ticker proxy library.
//!
//! Fetches the Binance alpha-trade ticker, reshapes each record, and serves
//! the top entries by quote volume with permissive CORS and a short shared
//! cache lifetime.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod ticker;
pub mod upstream;

pub use config::schema::ProxyConfig;
pub use error::{ProxyError, ProxyResult};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use ticker::OutputTickerRecord;
pub use upstream::{fetch_top_tickers, AlphaClient};
