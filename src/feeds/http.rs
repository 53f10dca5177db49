//! HTTP feed reader backed by `reqwest`.

use super::parse::parse_feed;
use super::{FeedReader, FetchError};
use crate::models::RawEntry;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Fetches feeds over HTTP(S) and parses them with [`parse_feed`].
#[derive(Debug, Clone)]
pub struct HttpFeedReader {
    client: Client,
}

impl HttpFeedReader {
    /// Build a reader whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self { client })
    }
}

impl FeedReader for HttpFeedReader {
    #[instrument(level = "info", skip(self))]
    async fn fetch(&self, url: &str) -> Result<Vec<RawEntry>, FetchError> {
        let t0 = Instant::now();
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            warn!(%status, "Feed request returned non-success status");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        debug!(bytes = body.len(), "Downloaded feed body");

        let entries = parse_feed(&body)?;
        info!(
            count = entries.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Parsed feed"
        );
        Ok(entries)
    }
}
