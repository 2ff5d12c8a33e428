//! Historical trade log returned by `GET /get_historical_trades`.

use serde::{Deserialize, Deserializer};

/// Envelope of the historical trades response.
///
/// A missing or `null` `historical_trades` field means "no trades".
#[derive(Debug, Default, Deserialize)]
pub struct HistoricalTradesResponse {
    #[serde(default)]
    pub historical_trades: Option<Vec<HistoricalTrade>>,
}

impl HistoricalTradesResponse {
    /// Returns the trades in service order, empty when the field was absent.
    pub fn into_trades(self) -> Vec<HistoricalTrade> {
        self.historical_trades.unwrap_or_default()
    }
}

/// One recorded trade.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HistoricalTrade {
    /// Kept as display text; the service may send a string or a number.
    #[serde(deserialize_with = "string_or_number")]
    pub timestamp: String,
    pub ticker: String,
    pub side: String,
    pub price: f64,
    pub volume: f64,
    pub status: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
