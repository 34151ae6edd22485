use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::feed::ArbitrageFeed;
use crate::types::{HistorySample, Snapshot};

/// HTTP feed client. Every request carries a fresh `t=<millis>` query
/// parameter to defeat intermediate caches between us and the producer.
pub struct HttpFeed {
    snapshot_url: String,
    history_url: String,
    http: reqwest::Client,
}

impl HttpFeed {
    pub fn new(snapshot_url: String, history_url: String) -> Self {
        Self {
            snapshot_url,
            history_url,
            http: reqwest::Client::new(),
        }
    }

    fn cache_busted(url: &str) -> String {
        let sep = if url.contains('?') { '&' } else { '?' };
        format!("{}{}t={}", url, sep, chrono::Utc::now().timestamp_millis())
    }
}

#[async_trait]
impl ArbitrageFeed for HttpFeed {
    async fn fetch_snapshot(&self) -> Result<Snapshot> {
        self.http
            .get(Self::cache_busted(&self.snapshot_url))
            .send()
            .await
            .context("GET snapshot failed")?
            .error_for_status()
            .context("GET snapshot non-200")?
            .json()
            .await
            .context("decode snapshot json failed")
    }

    async fn fetch_history(&self) -> Result<Vec<HistorySample>> {
        self.http
            .get(Self::cache_busted(&self.history_url))
            .send()
            .await
            .context("GET history failed")?
            .error_for_status()
            .context("GET history non-200")?
            .json()
            .await
            .context("decode history json failed")
    }
}
