//! Shared test utilities: a scripted in-memory trade service.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tradedesk::client::TradeService;
use tradedesk::models::{HistoricalTrade, StatsByTicker, TickerStats, TradeOrder};
use tradedesk::{Result, TradedeskError};

/// A call received by [`ScriptedService`].
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Submit(TradeOrder),
    Stats(String),
    History(String),
}

/// In-memory [`TradeService`] with per-identity canned responses.
///
/// Identities without a scripted response fail with a simulated network
/// error, as does every submit when `fail_submits` is set.
#[derive(Default)]
pub struct ScriptedService {
    pub calls: Mutex<Vec<Call>>,
    pub stats: Mutex<HashMap<String, StatsByTicker>>,
    pub history: Mutex<HashMap<String, Vec<HistoricalTrade>>>,
    pub fail_submits: bool,
}

impl ScriptedService {
    pub fn with_stats(self, user_id: &str, stats: StatsByTicker) -> Self {
        self.stats.lock().unwrap().insert(user_id.to_string(), stats);
        self
    }

    pub fn with_history(self, user_id: &str, trades: Vec<HistoricalTrade>) -> Self {
        self.history
            .lock()
            .unwrap()
            .insert(user_id.to_string(), trades);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TradeService for ScriptedService {
    async fn submit_trade(&self, order: &TradeOrder) -> Result<()> {
        self.calls.lock().unwrap().push(Call::Submit(order.clone()));
        if self.fail_submits {
            return Err(network_error());
        }
        Ok(())
    }

    async fn get_stats(&self, user_id: &str) -> Result<StatsByTicker> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Stats(user_id.to_string()));
        self.stats
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .ok_or_else(network_error)
    }

    async fn get_historical_trades(&self, user_id: &str) -> Result<Vec<HistoricalTrade>> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::History(user_id.to_string()));
        self.history
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .ok_or_else(network_error)
    }
}

/// The error used for every simulated failure.
pub fn network_error() -> TradedeskError {
    TradedeskError::Io("simulated network error".to_string())
}

/// Stats for a single ticker.
pub fn single_ticker_stats(
    ticker: &str,
    highest_price: f64,
    lowest_price: f64,
    total_value: f64,
    total_volume: f64,
    vwap: f64,
) -> StatsByTicker {
    let mut stats = StatsByTicker::new();
    stats.insert(
        ticker.to_string(),
        TickerStats {
            highest_price,
            lowest_price,
            total_value,
            total_volume,
            vwap,
        },
    );
    stats
}

/// A filled trade record.
pub fn trade(timestamp: &str, ticker: &str, side: &str, price: f64, volume: f64) -> HistoricalTrade {
    HistoricalTrade {
        timestamp: timestamp.to_string(),
        ticker: ticker.to_string(),
        side: side.to_string(),
        price,
        volume,
        status: "filled".to_string(),
    }
}
