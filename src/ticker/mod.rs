//! Ticker reshaping.
//!
//! # Data Flow
//! ```text
//! Vec<UpstreamTickerRecord>
//!     → transform.rs (map fields, parse numbers)
//!     → transform.rs (sort by quoteVolume desc, truncate)
//!     → Vec<OutputTickerRecord>
//! ```

pub mod transform;
pub mod types;

pub use transform::{
    base_asset, format_change_percent, rank_by_volume, to_fixed_2, to_output, top_by_volume,
};
pub use types::{FetchFailure, OutputTickerRecord, UpstreamTickerRecord, SUCCESS_CODE};
