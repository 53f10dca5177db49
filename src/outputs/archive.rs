//! Reading the daily Markdown archive back.
//!
//! The archive written by [`super::markdown`] doubles as the data source for
//! browsing past current affairs: every `<year>/<month>/<date>.md` file is
//! parsed back into [`ArchivedItem`]s, which can then be filtered by free
//! text, year, month and topic.

use crate::models::ArchivedItem;
use itertools::Itertools;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument, warn};

const CATEGORY_PREFIX: &str = "**Category:**";
const EXAM_ANGLE_PREFIX: &str = "**Exam Angle:**";
const STATIC_LINK_PREFIX: &str = "**Static Link:**";

/// Parse one daily file.
///
/// `## ` lines open a new item; the bold `Category`, `Exam Angle` and
/// `Static Link` lines fill those fields; any other non-empty line (other than
/// bold lines, `---` rules and the `# ` date heading) is added to the item's
/// content. Lines before the first item are ignored.
pub fn parse_markdown(content: &str, date: &str, year: &str, month: &str) -> Vec<ArchivedItem> {
    let mut items = Vec::new();
    let mut current: Option<ArchivedItem> = None;

    for line in content.lines().map(str::trim) {
        if let Some(headline) = line.strip_prefix("## ") {
            items.extend(current.take());
            current = Some(ArchivedItem {
                date: date.to_string(),
                year: year.to_string(),
                month: month.to_string(),
                headline: headline.to_string(),
                ..Default::default()
            });
            continue;
        }

        let Some(item) = current.as_mut() else {
            continue;
        };

        if let Some(rest) = line.strip_prefix(CATEGORY_PREFIX) {
            item.category = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix(EXAM_ANGLE_PREFIX) {
            item.exam_angle = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix(STATIC_LINK_PREFIX) {
            item.static_link = rest.trim().to_string();
        } else if !line.is_empty() && !line.starts_with("**") && line != "---" && !line.starts_with("# ") {
            if !item.content.is_empty() {
                item.content.push(' ');
            }
            item.content.push_str(line);
        }
    }

    items.extend(current);
    items
}

/// Free-text and facet filters. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Case-insensitive match against headline, content or category.
    pub term: Option<String>,
    /// Exact year directory name.
    pub year: Option<String>,
    /// Exact month directory name.
    pub month: Option<String>,
    /// Substring of the category label.
    pub topic: Option<String>,
}

impl SearchFilter {
    pub fn matches(&self, item: &ArchivedItem) -> bool {
        let matches_term = self.term.as_deref().is_none_or(|term| {
            let term = term.to_lowercase();
            term.is_empty()
                || item.headline.to_lowercase().contains(&term)
                || item.content.to_lowercase().contains(&term)
                || item.category.to_lowercase().contains(&term)
        });
        let matches_year = self.year.as_deref().is_none_or(|y| item.year == y);
        let matches_month = self.month.as_deref().is_none_or(|m| item.month == m);
        let matches_topic = self
            .topic
            .as_deref()
            .is_none_or(|t| item.category.contains(t));

        matches_term && matches_year && matches_month && matches_topic
    }
}

async fn sorted_entries(dir: &Path, want_dirs: bool) -> Result<Vec<String>, Box<dyn Error>> {
    let mut names = Vec::new();
    let mut rd = fs::read_dir(dir).await?;
    while let Some(entry) = rd.next_entry().await? {
        let is_dir = entry.file_type().await?.is_dir();
        if is_dir != want_dirs {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Load every daily file under `root`, newest date first.
///
/// A missing root yields an empty archive. Files that cannot be read are
/// logged and skipped.
#[instrument(level = "info", skip_all, fields(root = %root.display()))]
pub async fn load_archive(root: &Path) -> Result<Vec<ArchivedItem>, Box<dyn Error>> {
    if !fs::try_exists(root).await? {
        warn!("Archive directory does not exist");
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    for year in sorted_entries(root, true).await? {
        let year_dir = root.join(&year);
        for month in sorted_entries(&year_dir, true).await? {
            let month_dir = year_dir.join(&month);
            for file in sorted_entries(&month_dir, false).await? {
                let Some(date) = file.strip_suffix(".md") else {
                    continue;
                };
                let path = month_dir.join(&file);
                match fs::read_to_string(&path).await {
                    Ok(content) => {
                        let parsed = parse_markdown(&content, date, &year, &month);
                        debug!(path = %path.display(), count = parsed.len(), "Parsed daily file");
                        items.extend(parsed);
                    }
                    Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable file"),
                }
            }
        }
    }

    // Stable sort keeps in-file order within a day.
    items.sort_by(|a, b| b.date.cmp(&a.date));
    info!(count = items.len(), "Loaded archive");
    Ok(items)
}

/// Load the archive and keep only items matching `filter`.
pub async fn search(root: &Path, filter: &SearchFilter) -> Result<Vec<ArchivedItem>, Box<dyn Error>> {
    let items = load_archive(root).await?;
    Ok(items.into_iter().filter(|i| filter.matches(i)).collect())
}

/// Plain-text listing grouped by date, in the order given.
pub fn render_listing(items: &[ArchivedItem]) -> String {
    let mut out = String::new();
    for (date, group) in &items.iter().chunk_by(|i| i.date.clone()) {
        let group: Vec<&ArchivedItem> = group.collect();
        out.push_str(&format!("### {} ({} news items)\n", date, group.len()));
        for item in group {
            out.push_str(&format!("- [{}] {}\n", item.category, item.headline));
        }
        out.push('\n');
    }
    out
}
