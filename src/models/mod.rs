//! Wire and domain models for the trade-processing service.
//!
//! - [`trade`] - the order draft and the submit payload
//! - [`stats`] - per-ticker aggregates
//! - [`history`] - the historical trade log

pub mod history;
pub mod stats;
pub mod trade;

pub use history::{HistoricalTrade, HistoricalTradesResponse};
pub use stats::{StatsByTicker, TickerStats};
pub use trade::{DraftField, Side, TradeDraft, TradeOrder};
