//! End-to-end flow through dispatch: requests run against a scripted
//! service and their completions are applied back to the session.

mod common;

use std::sync::Arc;

use tokio::sync::mpsc;

use tradedesk::client::TradeService;
use tradedesk::dispatch::{execute, spawn_request};
use tradedesk::models::DraftField;
use tradedesk::session::{Completion, Outcome, Request, SUBMIT_CONFIRMATION, Session};
use tradedesk::tui::Message;

use common::{Call, ScriptedService, single_ticker_stats, trade};

/// Executes every request in order, applying completions and following
/// up until nothing is left to run.
async fn drive(
    session: &mut Session,
    service: &dyn TradeService,
    mut queue: Vec<Request>,
) -> Vec<Outcome> {
    let mut outcomes = Vec::new();
    while !queue.is_empty() {
        let request = queue.remove(0);
        let completion = execute(service, request).await;
        let (outcome, follow_up) = session.apply(completion);
        outcomes.push(outcome);
        queue.extend(follow_up);
    }
    outcomes
}

#[tokio::test]
async fn test_execute_passes_identity_to_service() {
    let service = ScriptedService::default()
        .with_stats("u1", single_ticker_stats("ABC", 10.0, 8.0, 900.0, 100.0, 9.0));
    let mut session = Session::new();
    let requests = session.set_identity("u1");

    let completion = execute(&service, requests[0].clone()).await;

    assert!(matches!(completion, Completion::StatsLoaded { ref result, .. } if result.is_ok()));
    assert_eq!(service.calls(), vec![Call::Stats("u1".to_string())]);
}

#[tokio::test]
async fn test_submit_flow_refetches_both_views() {
    let service = ScriptedService::default()
        .with_stats("u1", single_ticker_stats("ABC", 10.0, 8.0, 900.0, 100.0, 9.0))
        .with_history("u1", vec![trade("1", "ABC", "buy", 9.0, 100.0)]);
    let mut session = Session::new();
    session.set_identity("u1");
    session.update_draft_field(DraftField::Ticker, "ABC");
    session.update_draft_field(DraftField::Side, "buy");
    session.update_draft_field(DraftField::Price, "9");
    session.update_draft_field(DraftField::Volume, "100");

    let submit = session.submit_trade();
    let outcomes = drive(&mut session, &service, vec![submit]).await;

    assert_eq!(outcomes, vec![Outcome::Applied; 3]);
    assert_eq!(session.confirmation(), Some(SUBMIT_CONFIRMATION));
    assert_eq!(session.stats().map(|s| s.len()), Some(1));
    assert_eq!(session.history().len(), 1);

    let calls = service.calls();
    assert_eq!(calls.len(), 3);
    assert!(
        matches!(&calls[0], Call::Submit(order) if order.user_id == "u1" && order.volume == 100)
    );
    assert!(calls.contains(&Call::Stats("u1".to_string())));
    assert!(calls.contains(&Call::History("u1".to_string())));
}

#[tokio::test]
async fn test_failed_submit_does_not_refetch() {
    let service = ScriptedService {
        fail_submits: true,
        ..ScriptedService::default()
    };
    let mut session = Session::new();
    let submit = session.submit_trade();

    let outcomes = drive(&mut session, &service, vec![submit]).await;

    assert_eq!(outcomes.len(), 1);
    assert!(matches!(outcomes[0], Outcome::Failed(_)));
    assert!(session.confirmation().is_none());
    assert_eq!(service.calls().len(), 1);
}

#[tokio::test]
async fn test_unknown_identity_falls_back_to_empty_views() {
    let service = ScriptedService::default();
    let mut session = Session::new();
    let requests = session.set_identity("ghost");

    let outcomes = drive(&mut session, &service, requests).await;

    assert!(outcomes.iter().all(|o| matches!(o, Outcome::Failed(_))));
    assert!(session.stats().is_none());
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_spawn_request_delivers_completion_to_loop() {
    let service: Arc<dyn TradeService> = Arc::new(
        ScriptedService::default().with_history("u1", vec![trade("1", "ABC", "buy", 9.0, 1.0)]),
    );
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();
    let mut session = Session::new();
    let requests = session.set_identity("u1");

    for request in requests {
        spawn_request(Arc::clone(&service), request, tx.clone());
    }
    drop(tx);

    let mut received = 0;
    while let Some(message) = rx.recv().await {
        match message {
            Message::Completed(completion) => {
                session.apply(completion);
            }
            other => panic!("unexpected message {other:?}"),
        }
        received += 1;
    }

    assert_eq!(received, 2);
    assert_eq!(session.history().len(), 1);
    // no stats scripted for u1: the fetch failed and left stats absent
    assert!(session.stats().is_none());
}

#[tokio::test]
async fn test_spawn_request_survives_closed_loop() {
    let service: Arc<dyn TradeService> = Arc::new(ScriptedService::default());
    let (tx, rx) = mpsc::unbounded_channel::<Message>();
    drop(rx);

    let mut session = Session::new();
    let request = session.refresh_stats();
    let handle = spawn_request(service, request, tx);

    assert!(handle.await.is_ok());
}
