//! Tests against a live trade-processing service.
//!
//! Requires the service on `TRADEDESK_SERVICE_URL` (default
//! `http://127.0.0.1:5000`). Run with: `cargo test --features integration-tests`

#![cfg(feature = "integration-tests")]

use tradedesk::client::{HttpTradeService, TradeService};
use tradedesk::config::DEFAULT_SERVICE_URL;
use tradedesk::dispatch::execute;
use tradedesk::models::DraftField;
use tradedesk::session::{Outcome, SUBMIT_CONFIRMATION, Session};

fn live_service() -> HttpTradeService {
    let url = std::env::var("TRADEDESK_SERVICE_URL")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
    HttpTradeService::new(&url).expect("failed to build client")
}

fn unique_user() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("it-{nanos}")
}

#[tokio::test]
async fn test_fresh_user_has_no_history() {
    let service = live_service();
    let trades = service
        .get_historical_trades(&unique_user())
        .await
        .expect("history request failed");
    assert!(trades.is_empty());
}

#[tokio::test]
async fn test_submitted_trade_appears_in_stats_and_history() {
    let service = live_service();
    let user = unique_user();
    let mut session = Session::new();
    session.set_identity(user.clone());
    session.update_draft_field(DraftField::Ticker, "ABC");
    session.update_draft_field(DraftField::Side, "buy");
    session.update_draft_field(DraftField::Price, "10");
    session.update_draft_field(DraftField::Volume, "5");

    let submit = session.submit_trade();
    let completion = execute(&service, submit).await;
    let (outcome, follow_up) = session.apply(completion);
    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(session.confirmation(), Some(SUBMIT_CONFIRMATION));

    for request in follow_up {
        let completion = execute(&service, request).await;
        let (outcome, _) = session.apply(completion);
        assert_eq!(outcome, Outcome::Applied);
    }

    assert!(session.stats().is_some_and(|s| s.contains_key("ABC")));
    assert!(session.history().iter().any(|t| t.ticker == "ABC"));
}
