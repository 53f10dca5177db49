//! Feed sources and the feed-reading boundary.
//!
//! Fetching and parsing sit behind the [`FeedReader`] trait so the filtering
//! and formatting pipeline can be driven without network access. Submodules:
//!
//! - [`parse`]: RSS 2.0 / RSS 1.0 / Atom documents into [`RawEntry`] values
//! - [`http`]: [`http::HttpFeedReader`], the `reqwest`-backed reader
//!
//! # Feed list
//!
//! The built-in list from [`default_feeds`] is used unless a YAML file is given:
//!
//! ```yaml
//! - name: PIB India
//!   url: https://pib.gov.in/RssMain.aspx?ModId=6&Lang=1
//! - name: UN News
//!   url: https://www.un.org/en/rss/news.xml
//! ```

pub mod http;
pub mod parse;

use crate::models::{FeedSource, RawEntry};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument};
use url::Url;

/// Failure to fetch or parse one feed. Never fatal to a run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("could not parse feed: {0}")]
    Parse(String),
}

/// Problems with a user-supplied feed list. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read feed list {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid feed list YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("feed {name:?} has an invalid URL {url:?}")]
    InvalidUrl { name: String, url: String },

    #[error("feed list is empty")]
    Empty,
}

/// Something that turns a feed URL into raw entries.
///
/// Implementations return entries in feed order.
pub trait FeedReader {
    async fn fetch(&self, url: &str) -> Result<Vec<RawEntry>, FetchError>;
}

/// The built-in feeds, in processing order.
pub fn default_feeds() -> Vec<FeedSource> {
    vec![
        FeedSource::new(
            "PIB India",
            "https://pib.gov.in/RssMain.aspx?ModId=6&Lang=1",
        ),
        FeedSource::new(
            "The Hindu National",
            "https://www.thehindu.com/news/national/?service=rss",
        ),
        FeedSource::new(
            "Indian Express",
            "https://indianexpress.com/section/india/feed/",
        ),
        FeedSource::new("UN News", "https://www.un.org/en/rss/news.xml"),
    ]
}

/// Parse and validate a YAML feed list.
pub fn parse_feed_list(yaml: &str) -> Result<Vec<FeedSource>, ConfigError> {
    let feeds: Vec<FeedSource> = serde_yaml::from_str(yaml)?;
    if feeds.is_empty() {
        return Err(ConfigError::Empty);
    }
    for feed in &feeds {
        let valid = Url::parse(&feed.url)
            .map(|u| matches!(u.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !valid {
            return Err(ConfigError::InvalidUrl {
                name: feed.name.clone(),
                url: feed.url.clone(),
            });
        }
    }
    Ok(feeds)
}

/// Load the feed list from `path`, or fall back to [`default_feeds`].
#[instrument(level = "info")]
pub async fn load_feeds(path: Option<&Path>) -> Result<Vec<FeedSource>, ConfigError> {
    let Some(path) = path else {
        return Ok(default_feeds());
    };
    let yaml = fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let feeds = parse_feed_list(&yaml)?;
    info!(count = feeds.len(), path = %path.display(), "Loaded feed list");
    Ok(feeds)
}
