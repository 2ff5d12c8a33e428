//! Session state: the active identity, the trade draft, and the two views
//! derived from the trade-processing service.
//!
//! [`Session`] never performs I/O. Operations that need the network return
//! [`Request`] values; whoever runs them feeds the result back in as a
//! [`Completion`]. Every request carries a [`RequestTag`], and a fetch
//! completion is applied only if it answers the most recently issued fetch
//! for its view. Responses can therefore arrive in any order without a
//! previous identity's data ever overwriting the current one.

use tracing::{debug, error, info, warn};

use crate::Result;
use crate::models::{DraftField, HistoricalTrade, StatsByTicker, TradeDraft, TradeOrder};

/// Message shown after the service accepts a trade.
pub const SUBMIT_CONFIRMATION: &str = "Trade submitted successfully!";

/// Identifies one issued request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTag {
    /// Identity the request was issued for.
    pub identity: String,
    /// Position in the session's issue order.
    pub seq: u64,
}

/// Network work the session wants performed.
#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    SubmitTrade { tag: RequestTag, order: TradeOrder },
    FetchStats(RequestTag),
    FetchHistory(RequestTag),
}

impl Request {
    /// Returns the tag attached to this request.
    pub fn tag(&self) -> &RequestTag {
        match self {
            Request::SubmitTrade { tag, .. } => tag,
            Request::FetchStats(tag) | Request::FetchHistory(tag) => tag,
        }
    }
}

/// Result of a [`Request`], ready to be applied to the session.
#[derive(Debug)]
pub enum Completion {
    TradeSubmitted {
        tag: RequestTag,
        result: Result<()>,
    },
    StatsLoaded {
        tag: RequestTag,
        result: Result<StatsByTicker>,
    },
    HistoryLoaded {
        tag: RequestTag,
        result: Result<Vec<HistoricalTrade>>,
    },
}

/// What applying a [`Completion`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The response was applied.
    Applied,
    /// The call failed; the fallback was applied. Carries the reason.
    Failed(String),
    /// A newer request for the same view was issued; the response was dropped.
    Stale,
}

/// State owned by one dashboard instance.
#[derive(Debug, Default)]
pub struct Session {
    draft: TradeDraft,
    identity: String,
    stats: Option<StatsByTicker>,
    history: Vec<HistoricalTrade>,
    confirmation: Option<String>,
    next_seq: u64,
    latest_stats_seq: Option<u64>,
    latest_history_seq: Option<u64>,
}

impl Session {
    /// Creates a session with an empty draft, empty identity and no data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the trade being composed.
    pub fn draft(&self) -> &TradeDraft {
        &self.draft
    }

    /// Returns the active identity. The empty string is a valid identity.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Returns the latest stats, or `None` if absent or the last fetch failed.
    pub fn stats(&self) -> Option<&StatsByTicker> {
        self.stats.as_ref()
    }

    /// Returns the latest trade log, in service order.
    pub fn history(&self) -> &[HistoricalTrade] {
        &self.history
    }

    /// Returns the confirmation of the last successful submit, if any.
    pub fn confirmation(&self) -> Option<&str> {
        self.confirmation.as_deref()
    }

    /// Makes `identity` active and requests both views for it.
    ///
    /// Always clears the confirmation and always refetches, even when
    /// `identity` equals the current one.
    pub fn set_identity(&mut self, identity: impl Into<String>) -> Vec<Request> {
        self.identity = identity.into();
        self.confirmation = None;
        info!(identity = %self.identity, "Identity changed");
        self.refresh_all()
    }

    /// Replaces one draft field from raw user text.
    pub fn update_draft_field(&mut self, field: DraftField, raw: &str) {
        self.draft.set_field(field, raw);
    }

    /// Sends the draft as-is for the current identity. The draft is kept.
    pub fn submit_trade(&mut self) -> Request {
        let tag = self.issue();
        let order = self.draft.to_order(&self.identity);
        info!(
            identity = %tag.identity,
            seq = tag.seq,
            ticker = %order.ticker,
            side = order.side.as_str(),
            price = order.price,
            volume = order.volume,
            "Submitting trade"
        );
        Request::SubmitTrade { tag, order }
    }

    /// Requests the stats view for the current identity.
    pub fn refresh_stats(&mut self) -> Request {
        let tag = self.issue();
        self.latest_stats_seq = Some(tag.seq);
        debug!(identity = %tag.identity, seq = tag.seq, "Fetching stats");
        Request::FetchStats(tag)
    }

    /// Requests the trade log for the current identity.
    pub fn refresh_history(&mut self) -> Request {
        let tag = self.issue();
        self.latest_history_seq = Some(tag.seq);
        debug!(identity = %tag.identity, seq = tag.seq, "Fetching historical trades");
        Request::FetchHistory(tag)
    }

    /// Requests both views for the current identity.
    pub fn refresh_all(&mut self) -> Vec<Request> {
        vec![self.refresh_stats(), self.refresh_history()]
    }

    /// Applies any completion. Returns the outcome and follow-up requests.
    pub fn apply(&mut self, completion: Completion) -> (Outcome, Vec<Request>) {
        match completion {
            Completion::TradeSubmitted { tag, result } => self.apply_submit(&tag, result),
            Completion::StatsLoaded { tag, result } => (self.apply_stats(&tag, result), Vec::new()),
            Completion::HistoryLoaded { tag, result } => {
                (self.apply_history(&tag, result), Vec::new())
            }
        }
    }

    /// Applies a submit result.
    ///
    /// On success both views are refetched for the *current* identity. The
    /// confirmation is only shown if the identity has not changed since the
    /// submit was issued. On failure nothing changes.
    pub fn apply_submit(
        &mut self,
        tag: &RequestTag,
        result: Result<()>,
    ) -> (Outcome, Vec<Request>) {
        match result {
            Ok(()) => {
                if tag.identity == self.identity {
                    self.confirmation = Some(SUBMIT_CONFIRMATION.to_string());
                } else {
                    warn!(
                        submitted_for = %tag.identity,
                        current = %self.identity,
                        "Trade accepted after identity changed, not confirming"
                    );
                }
                info!(identity = %tag.identity, seq = tag.seq, "Trade submitted");
                (Outcome::Applied, self.refresh_all())
            }
            Err(e) => {
                error!(identity = %tag.identity, seq = tag.seq, "Error submitting trade: {e}");
                (Outcome::Failed(e.to_string()), Vec::new())
            }
        }
    }

    /// Applies a stats result, replacing the view wholesale.
    pub fn apply_stats(&mut self, tag: &RequestTag, result: Result<StatsByTicker>) -> Outcome {
        if !is_current(self.latest_stats_seq, tag) {
            debug!(identity = %tag.identity, seq = tag.seq, "Discarding stale stats response");
            return Outcome::Stale;
        }
        match result {
            Ok(stats) => {
                debug!(identity = %tag.identity, tickers = stats.len(), "Stats loaded");
                self.stats = Some(stats);
                Outcome::Applied
            }
            Err(e) => {
                error!(identity = %tag.identity, seq = tag.seq, "Error fetching stats: {e}");
                self.stats = None;
                Outcome::Failed(e.to_string())
            }
        }
    }

    /// Applies a trade log result, replacing the view wholesale.
    pub fn apply_history(
        &mut self,
        tag: &RequestTag,
        result: Result<Vec<HistoricalTrade>>,
    ) -> Outcome {
        if !is_current(self.latest_history_seq, tag) {
            debug!(identity = %tag.identity, seq = tag.seq, "Discarding stale history response");
            return Outcome::Stale;
        }
        match result {
            Ok(trades) => {
                debug!(identity = %tag.identity, trades = trades.len(), "Historical trades loaded");
                self.history = trades;
                Outcome::Applied
            }
            Err(e) => {
                error!(
                    identity = %tag.identity,
                    seq = tag.seq,
                    "Error fetching historical trades: {e}"
                );
                self.history.clear();
                Outcome::Failed(e.to_string())
            }
        }
    }

    fn issue(&mut self) -> RequestTag {
        let seq = self.next_seq;
        self.next_seq += 1;
        RequestTag {
            identity: self.identity.clone(),
            seq,
        }
    }
}

/// A fetch response counts only if it answers the view's latest fetch.
fn is_current(latest: Option<u64>, tag: &RequestTag) -> bool {
    latest == Some(tag.seq)
}
