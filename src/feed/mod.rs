pub mod http;

use crate::types::{HistorySample, Snapshot};
use async_trait::async_trait;

/// Abstraction over the two feed resources so the controller can be tested
/// against scripted outcomes instead of a live endpoint.
#[async_trait]
pub trait ArbitrageFeed: Send + Sync {
    /// Fetch the current arbitrage snapshot. Failure here is a hard failure
    /// for the poll.
    async fn fetch_snapshot(&self) -> anyhow::Result<Snapshot>;

    /// Fetch the opportunity-count history. Failure here is soft; callers
    /// keep their previous series.
    async fn fetch_history(&self) -> anyhow::Result<Vec<HistorySample>>;
}

pub use http::HttpFeed;
