//! Text helpers and file system checks shared across the pipeline.
//!
//! This module provides:
//! - Text cleaning applied to every title and description
//! - The lossy dedup key used to collapse near-identical headlines
//! - The short summary written under each headline
//! - String truncation for logging
//! - Output directory validation

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument, warn};

/// Number of characters kept in a dedup key.
pub const DEDUP_KEY_LEN: usize = 50;

/// Summaries longer than this many characters are cut and get `...` appended.
pub const SUMMARY_MAX_CHARS: usize = 200;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+").unwrap());

/// Clean feed text for filtering and display.
///
/// Steps, in order:
/// 1. Remove markup tags (`<...>`)
/// 2. Remove URL-like tokens (anything from `http` up to the next whitespace)
/// 3. Collapse whitespace runs to a single space and trim both ends
///
/// URLs are removed before collapsing so that no double space is left where a
/// URL stood. The function is idempotent.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(clean_text("<p>Hello   <b>world</b></p>"), "Hello world");
/// assert_eq!(clean_text("See http://x.com for more"), "See for more");
/// ```
pub fn clean_text(text: &str) -> String {
    let without_tags = TAG_RE.replace_all(text, "");
    let without_urls = URL_RE.replace_all(&without_tags, "");
    without_urls.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Build the dedup key for a title.
///
/// The key is the lowercased title with everything except ASCII letters and
/// digits removed, cut to [`DEDUP_KEY_LEN`] characters. Distinct stories that
/// share a long common prefix collapse to the same key.
pub fn dedup_key(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .take(DEDUP_KEY_LEN)
        .collect()
}

/// Build a short summary from a description.
///
/// The cleaned description is split on every `.`, the first two pieces are
/// joined back with `". "`, and the result is cut to [`SUMMARY_MAX_CHARS`]
/// characters with `...` appended when it is longer.
pub fn summarize(description: &str) -> String {
    let desc = clean_text(description);
    let summary = desc.split('.').take(2).collect::<Vec<_>>().join(". ");

    if summary.chars().count() > SUMMARY_MAX_CHARS {
        let cut: String = summary.chars().take(SUMMARY_MAX_CHARS).collect();
        format!("{cut}...")
    } else {
        summary
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` characters with an ellipsis and
/// a count of the dropped characters appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    let total = s.chars().count();
    if total <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max).collect();
        format!("{}…(+{} chars)", head, total - max)
    }
}

/// Ensure a directory exists and is writable.
///
/// This function creates the directory (and any missing parents) if it
/// doesn't exist, then performs a write test by creating and immediately
/// deleting a probe file.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let probe_path = path.join("..__probe_write__");
    drop(fs::File::create(&probe_path).await?);
    if let Err(e) = fs::remove_file(&probe_path).await {
        warn!(probe = %probe_path.display(), error = %e, "Failed to remove probe file");
    }
    info!("Output directory is writable");
    Ok(())
}
