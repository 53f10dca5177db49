//! The fetch → filter → dedupe → write pipeline.
//!
//! Feeds are processed strictly one after another, in configured order, and
//! entries within a feed in feed order. A feed that fails to fetch or parse
//! contributes no items; the run carries on with the next feed.

use crate::dedup::dedupe;
use crate::feeds::FeedReader;
use crate::filter::classify;
use crate::models::{FeedSource, NewsItem, RawEntry};
use crate::outputs::markdown::{append_items, render_items};
use crate::utils::{clean_text, truncate_for_log};
use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use std::error::Error;
use std::path::PathBuf;
use tracing::{debug, error, info, instrument};

/// Entries considered per feed unless configured otherwise.
pub const DEFAULT_PER_FEED_LIMIT: usize = 10;

/// Settings for a single run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Archive root, e.g. `data/current-affairs`.
    pub output_dir: PathBuf,
    /// Day whose file receives the items.
    pub date: NaiveDate,
    /// Only the first this-many entries of each feed are looked at.
    pub per_feed_limit: usize,
    /// Render instead of writing.
    pub dry_run: bool,
}

/// What a run did.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Relevant items before deduplication.
    pub found: usize,
    /// Items written (or rendered) after deduplication.
    pub kept: usize,
    /// Feeds skipped because of fetch or parse errors.
    pub failed_feeds: usize,
    /// File written to; `None` on a dry run.
    pub path: Option<PathBuf>,
    /// Rendered Markdown; only set on a dry run.
    pub rendered: Option<String>,
}

/// Clean, filter and categorize the entries of one feed.
///
/// Only the first `limit` entries are considered. Entries whose cleaned title
/// is empty are skipped; a missing description counts as empty.
pub fn process_entries(entries: Vec<RawEntry>, source: &str, limit: usize) -> Vec<NewsItem> {
    let mut items = Vec::new();
    for entry in entries.into_iter().take(limit) {
        let title = clean_text(entry.title.as_deref().unwrap_or_default());
        if title.is_empty() {
            debug!(%source, "Skipping entry without title");
            continue;
        }
        let description = clean_text(entry.body());

        match classify(&title, &description) {
            Some(category) => items.push(NewsItem {
                title,
                description,
                category,
                source: source.to_string(),
            }),
            None => debug!(%source, title = %truncate_for_log(&title, 80), "Not relevant"),
        }
    }
    items
}

/// Fetch every feed in order and collect the relevant items.
///
/// Returns the items in feed order and the number of feeds that failed.
#[instrument(level = "info", skip_all, fields(feeds = feeds.len()))]
pub async fn collect_items<R: FeedReader>(
    reader: &R,
    feeds: &[FeedSource],
    per_feed_limit: usize,
) -> (Vec<NewsItem>, usize) {
    let per_feed: Vec<Option<Vec<NewsItem>>> = stream::iter(feeds)
        .then(|feed| async move {
            info!(feed = %feed.name, "Processing feed");
            match reader.fetch(&feed.url).await {
                Ok(entries) => {
                    let total = entries.len();
                    let items = process_entries(entries, &feed.name, per_feed_limit);
                    info!(feed = %feed.name, entries = total, relevant = items.len(), "Processed feed");
                    Some(items)
                }
                Err(e) => {
                    error!(feed = %feed.name, url = %feed.url, error = %e, "Error processing feed; skipping");
                    None
                }
            }
        })
        .collect()
        .await;

    let failed = per_feed.iter().filter(|r| r.is_none()).count();
    let items = per_feed.into_iter().flatten().flatten().collect();
    (items, failed)
}

/// Run the whole pipeline once.
///
/// Per-feed failures are tolerated; failing to create or write the output
/// file is returned as an error.
#[instrument(level = "info", skip_all, fields(date = %opts.date, dry_run = opts.dry_run))]
pub async fn run<R: FeedReader>(
    reader: &R,
    feeds: &[FeedSource],
    opts: &RunOptions,
) -> Result<RunReport, Box<dyn Error>> {
    info!("Fetching news from RSS feeds");
    let (items, failed_feeds) = collect_items(reader, feeds, opts.per_feed_limit).await;
    let found = items.len();
    info!(count = found, failed_feeds, "Found relevant news items");

    let unique = dedupe(items);
    info!(count = unique.len(), "After removing duplicates");

    let mut report = RunReport {
        found,
        kept: unique.len(),
        failed_feeds,
        ..Default::default()
    };

    if opts.dry_run {
        report.rendered = Some(render_items(&unique, Some(opts.date)));
    } else {
        let path = append_items(&opts.output_dir, opts.date, &unique).await?;
        info!(path = %path.display(), "News saved");
        report.path = Some(path);
    }
    Ok(report)
}
