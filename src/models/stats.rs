//! Per-ticker aggregate statistics returned by `GET /get_stats`.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Aggregates for one ticker. Computed by the service and shown as-is.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TickerStats {
    pub highest_price: f64,
    pub lowest_price: f64,
    pub total_value: f64,
    pub total_volume: f64,
    /// Volume-weighted average price.
    pub vwap: f64,
}

/// Ticker symbol → aggregates, ordered by symbol for stable rendering.
pub type StatsByTicker = BTreeMap<String, TickerStats>;
