//! Client for the remote trade-processing service.
//!
//! [`TradeService`] is the seam between the session and the network; the
//! binary uses [`HttpTradeService`], tests substitute scripted fakes.

use async_trait::async_trait;
use tracing::debug;

use crate::Result;
use crate::models::{HistoricalTrade, HistoricalTradesResponse, StatsByTicker, TradeOrder};

/// The three operations exposed by the trade-processing service.
#[async_trait]
pub trait TradeService: Send + Sync {
    /// Records a trade. The response body is not consumed.
    async fn submit_trade(&self, order: &TradeOrder) -> Result<()>;

    /// Fetches per-ticker aggregates for `user_id`.
    async fn get_stats(&self, user_id: &str) -> Result<StatsByTicker>;

    /// Fetches the trade log for `user_id`, in service order.
    async fn get_historical_trades(&self, user_id: &str) -> Result<Vec<HistoricalTrade>>;
}

/// [`TradeService`] over HTTP with JSON bodies.
#[derive(Clone, Debug)]
pub struct HttpTradeService {
    base_url: String,
    http: reqwest::Client,
}

impl HttpTradeService {
    /// Creates a client for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`TradedeskError::Http`](crate::TradedeskError::Http) if the
    /// underlying HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Returns the base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// GETs `path?user_id=<id>` and returns the body as text.
    async fn get_for_user(&self, path: &str, user_id: &str) -> Result<String> {
        let response = self
            .http
            .get(self.endpoint(path))
            .query(&[("user_id", user_id)])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl TradeService for HttpTradeService {
    async fn submit_trade(&self, order: &TradeOrder) -> Result<()> {
        let response = self
            .http
            .post(self.endpoint("submit_trade"))
            .json(order)
            .send()
            .await?
            .error_for_status()?;
        debug!(status = %response.status(), ticker = %order.ticker, "Trade accepted");
        Ok(())
    }

    async fn get_stats(&self, user_id: &str) -> Result<StatsByTicker> {
        let body = self.get_for_user("get_stats", user_id).await?;
        let stats: Option<StatsByTicker> = serde_json::from_str(&body)?;
        Ok(stats.unwrap_or_default())
    }

    async fn get_historical_trades(&self, user_id: &str) -> Result<Vec<HistoricalTrade>> {
        let body = self.get_for_user("get_historical_trades", user_id).await?;
        let response: HistoricalTradesResponse = serde_json::from_str(&body)?;
        Ok(response.into_trades())
    }
}
