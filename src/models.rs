//! Data models for feed entries, categorized news items, and archived items.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Category`]: The eight fixed exam categories, in tie-break order
//! - [`FeedSource`]: A configured feed URL with its display name
//! - [`RawEntry`]: An unprocessed entry as returned by a feed reader
//! - [`NewsItem`]: A cleaned, categorized entry ready to be written
//! - [`ArchivedItem`]: An item read back from a daily Markdown file

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight fixed news categories.
///
/// The declaration order is significant: when a text matches keywords from
/// several categories, the earliest category in [`Category::ALL`] wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Polity,
    Economy,
    Schemes,
    Defence,
    International,
    Science,
    Reports,
    Environment,
}

impl Category {
    /// All categories in tie-break order.
    pub const ALL: [Category; 8] = [
        Category::Polity,
        Category::Economy,
        Category::Schemes,
        Category::Defence,
        Category::International,
        Category::Science,
        Category::Reports,
        Category::Environment,
    ];

    /// The human-readable label written to the `**Category:**` line.
    pub fn label(self) -> &'static str {
        match self {
            Category::Polity => "Polity",
            Category::Economy => "Economy",
            Category::Schemes => "Government Schemes",
            Category::Defence => "Defence",
            Category::International => "International Relations",
            Category::Science => "Science & Technology",
            Category::Reports => "Reports & Indices",
            Category::Environment => "Environment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A configured feed: where to fetch it and what to call it in logs and output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedSource {
    /// Display name, e.g. `"PIB India"`.
    pub name: String,
    /// Absolute feed URL.
    pub url: String,
}

impl FeedSource {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// A raw feed entry before cleaning.
///
/// Both text fields are optional; feeds routinely omit one or the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub title: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
}

impl RawEntry {
    /// The entry's body text: `description` when non-empty, otherwise `summary`,
    /// otherwise the empty string.
    pub fn body(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => self.summary.as_deref().unwrap_or_default(),
        }
    }
}

/// A cleaned and categorized news item.
///
/// Created once by the pipeline, consumed once by the Markdown writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    /// Cleaned title.
    pub title: String,
    /// Cleaned description (may be empty).
    pub description: String,
    /// The single category assigned by keyword matching.
    pub category: Category,
    /// Display name of the feed the item came from.
    pub source: String,
}

/// A news item parsed back out of a daily Markdown file.
///
/// Category, exam angle and static link are kept as free text because older
/// files may carry labels this build does not know.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedItem {
    /// `YYYY-MM-DD`, taken from the file name.
    pub date: String,
    /// Year directory name.
    pub year: String,
    /// Month directory name (full English month name).
    pub month: String,
    pub headline: String,
    pub content: String,
    pub category: String,
    pub exam_angle: String,
    pub static_link: String,
}
