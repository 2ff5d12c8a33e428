//! Trade draft and submit-order models.

use serde::{Deserialize, Serialize};

/// Side of the market for an order.
///
/// `Unset` is a real, submittable value: an incomplete draft goes out as-is
/// and the wire value is the empty string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "buy")]
    Buy,
    #[serde(rename = "sell")]
    Sell,
}

impl Side {
    /// Parses a side from user text. Anything other than `buy`/`sell`
    /// (case-insensitive, surrounding whitespace ignored) is `Unset`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("buy") {
            Side::Buy
        } else if raw.eq_ignore_ascii_case("sell") {
            Side::Sell
        } else {
            Side::Unset
        }
    }

    /// Returns the wire-format value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Unset => "",
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Side::Unset => "Select Side",
            Side::Buy => "Buy",
            Side::Sell => "Sell",
        }
    }

    /// Cycles unset → buy → sell → unset.
    pub fn next(self) -> Self {
        match self {
            Side::Unset => Side::Buy,
            Side::Buy => Side::Sell,
            Side::Sell => Side::Unset,
        }
    }

    /// Cycles in the opposite direction of [`Side::next`].
    pub fn previous(self) -> Self {
        match self {
            Side::Unset => Side::Sell,
            Side::Buy => Side::Unset,
            Side::Sell => Side::Buy,
        }
    }
}

/// Names one field of a [`TradeDraft`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Ticker,
    Side,
    Price,
    Volume,
}

/// The order currently being composed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TradeDraft {
    pub side: Side,
    /// Free text; case is left exactly as typed.
    pub ticker: String,
    pub price: f64,
    pub volume: i64,
}

impl TradeDraft {
    /// Replaces exactly one field from raw user text.
    ///
    /// Price and volume never fail: unparseable input becomes `0`.
    /// No range checks are made, so negative values are kept.
    pub fn set_field(&mut self, field: DraftField, raw: &str) {
        match field {
            DraftField::Ticker => self.ticker = raw.to_string(),
            DraftField::Side => self.side = Side::parse(raw),
            DraftField::Price => self.price = parse_price(raw),
            DraftField::Volume => self.volume = parse_volume(raw),
        }
    }

    /// Builds the submit payload for `user_id`.
    pub fn to_order(&self, user_id: &str) -> TradeOrder {
        TradeOrder {
            user_id: user_id.to_string(),
            ticker: self.ticker.clone(),
            side: self.side,
            price: self.price,
            volume: self.volume,
        }
    }
}

/// Body of a `POST /submit_trade` request.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TradeOrder {
    pub user_id: String,
    pub ticker: String,
    pub side: Side,
    pub price: f64,
    pub volume: i64,
}

/// Parses the longest leading decimal number in `raw`, or `0.0`.
///
/// `"12.5"` → 12.5, `"12.5abc"` → 12.5, `"abc"` → 0.
pub fn parse_price(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = sign_len(bytes);

    let int_digits = digit_run(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_start = end + 1;
        let exp_sign = sign_len(&bytes[exp_start..]);
        let exp_digits = digit_run(&bytes[exp_start + exp_sign..]);
        if exp_digits > 0 {
            end = exp_start + exp_sign + exp_digits;
        }
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parses the longest leading integer in `raw`, or `0`.
///
/// `"-3"` → -3, `"12.7"` → 12, `"abc"` → 0. Out-of-range values become `0`.
pub fn parse_volume(raw: &str) -> i64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let sign = sign_len(bytes);
    let digits = digit_run(&bytes[sign..]);
    if digits == 0 {
        return 0;
    }
    s[..sign + digits].parse::<i64>().unwrap_or(0)
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
