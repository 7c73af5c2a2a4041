//! Field mapping and volume ranking.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::RankingConfig;
use crate::error::{ProxyError, ProxyResult};
use crate::ticker::types::{OutputTickerRecord, UpstreamTickerRecord};

/// Strip one trailing quote suffix from a trading-pair symbol.
///
/// `"BTCUSDT"` becomes `"BTC"`; symbols without the suffix pass through.
pub fn base_asset<'a>(symbol: &'a str, quote_suffix: &str) -> &'a str {
    symbol.strip_suffix(quote_suffix).unwrap_or(symbol)
}

fn parse_finite(field: &str, raw: &str) -> ProxyResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ProxyError::Transform(format!(
            "{field} is not a finite number: '{raw}'"
        ))),
    }
}

/// Format with two decimals the way JavaScript `toFixed(2)` does.
///
/// The exact binary value is rounded half away from zero, and the sign is
/// written only for values below zero, so `-0` renders as `"0.00"`.
pub fn to_fixed_2(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    match Decimal::from_f64_retain(value.abs()) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{sign}{rounded:.2}")
        }
        // Beyond Decimal's range there are no fractional digits left to round.
        None => format!("{sign}{:.2}", value.abs()),
    }
}

/// Convert a fractional change (`"0.015"`) to a two-decimal percentage (`"1.50"`).
pub fn format_change_percent(raw: &str) -> ProxyResult<String> {
    let fraction = parse_finite("priceChangePercent", raw)?;
    Ok(to_fixed_2(fraction * 100.0))
}

/// Map one upstream record into its output shape.
pub fn to_output(record: UpstreamTickerRecord, quote_suffix: &str) -> ProxyResult<OutputTickerRecord> {
    let price_change_percent = format_change_percent(&record.price_change_percent)?;
    let quote_volume = parse_finite("quoteVolume", &record.quote_volume)?;
    let base_asset = base_asset(&record.symbol, quote_suffix).to_string();

    Ok(OutputTickerRecord {
        symbol: record.symbol,
        base_asset,
        last_price: record.last_price,
        price_change_percent,
        quote_volume,
        bps: 0,
    })
}

/// Sort by quote volume, highest first, and keep the first `limit` entries.
pub fn rank_by_volume(mut records: Vec<OutputTickerRecord>, limit: usize) -> Vec<OutputTickerRecord> {
    records.sort_by(|a, b| b.quote_volume.total_cmp(&a.quote_volume));
    records.truncate(limit);
    records
}

/// Map every upstream record and return the top entries by volume.
pub fn top_by_volume(
    records: Vec<UpstreamTickerRecord>,
    ranking: &RankingConfig,
) -> ProxyResult<Vec<OutputTickerRecord>> {
    let mapped = records
        .into_iter()
        .map(|record| to_output(record, &ranking.quote_suffix))
        .collect::<ProxyResult<Vec<_>>>()?;

    Ok(rank_by_volume(mapped, ranking.limit))
}
