//! Runs session requests against a [`TradeService`].
//!
//! Each request runs on its own tokio task and reports back through the
//! event loop's channel, so completions are applied one at a time on the
//! loop in the order they arrive.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::client::TradeService;
use crate::session::{Completion, Request};
use crate::tui::Message;

/// Performs one request and wraps its result as a [`Completion`].
pub async fn execute(service: &dyn TradeService, request: Request) -> Completion {
    match request {
        Request::SubmitTrade { tag, order } => {
            let result = service.submit_trade(&order).await;
            Completion::TradeSubmitted { tag, result }
        }
        Request::FetchStats(tag) => {
            let result = service.get_stats(&tag.identity).await;
            Completion::StatsLoaded { tag, result }
        }
        Request::FetchHistory(tag) => {
            let result = service.get_historical_trades(&tag.identity).await;
            Completion::HistoryLoaded { tag, result }
        }
    }
}

/// Spawns a task that performs `request` and sends
/// [`Message::Completed`] on `tx`.
///
/// The task is never cancelled; if the loop is gone by the time it
/// finishes, the completion is dropped.
pub fn spawn_request(
    service: Arc<dyn TradeService>,
    request: Request,
    tx: mpsc::UnboundedSender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let completion = execute(service.as_ref(), request).await;
        if tx.send(Message::Completed(completion)).is_err() {
            debug!("Event loop closed before completion was delivered");
        }
    })
}
