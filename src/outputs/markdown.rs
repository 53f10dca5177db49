//! Markdown rendering and the daily archive file.
//!
//! Each run appends to one file per calendar day:
//!
//! ```text
//! data/current-affairs/
//! └── 2025/
//!     └── May/
//!         └── 2025-05-06.md
//! ```
//!
//! The `# Current Affairs - <DD Month YYYY>` heading is written only when the
//! file is created. Later runs on the same day append blocks after whatever
//! is already there; nothing already written is ever rewritten.

use crate::keywords::{exam_angle, static_link};
use crate::models::NewsItem;
use crate::utils::{ensure_writable_dir, summarize};
use chrono::NaiveDate;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument};

/// Default archive root, relative to the working directory.
pub const DEFAULT_ARCHIVE_DIR: &str = "data/current-affairs";

/// `<root>/<YYYY>/<Month>/<YYYY-MM-DD>.md`
pub fn output_path(root: &Path, date: NaiveDate) -> PathBuf {
    root.join(date.format("%Y").to_string())
        .join(date.format("%B").to_string())
        .join(format!("{}.md", date.format("%Y-%m-%d")))
}

/// The level-1 heading that opens a new daily file.
pub fn date_heading(date: NaiveDate) -> String {
    format!("# Current Affairs - {}\n\n", date.format("%d %B %Y"))
}

/// Render one item as a Markdown block, trailing rule included.
pub fn render_item(item: &NewsItem) -> String {
    format!(
        "## {title}\n\n\
         **Category:** {category}\n\n\
         {summary}\n\n\
         **Exam Angle:** {angle}\n\n\
         **Static Link:** {link}\n\n\
         ---\n\n",
        title = item.title,
        category = item.category.label(),
        summary = summarize(&item.description),
        angle = exam_angle(item.category),
        link = static_link(item.category),
    )
}

/// Render a batch of items, optionally preceded by the date heading.
pub fn render_items(items: &[NewsItem], heading: Option<NaiveDate>) -> String {
    let mut md = heading.map(date_heading).unwrap_or_default();
    for item in items {
        md.push_str(&render_item(item));
    }
    md
}

/// Append `items` to the daily file for `date` under `root`.
///
/// Directories are created as needed. A new file gets the date heading first,
/// an existing one is opened in append mode. Returns the file path.
#[instrument(level = "info", skip_all, fields(root = %root.display(), %date, count = items.len()))]
pub async fn append_items(
    root: &Path,
    date: NaiveDate,
    items: &[NewsItem],
) -> Result<PathBuf, Box<dyn Error>> {
    let path = output_path(root, date);
    if let Some(dir) = path.parent() {
        ensure_writable_dir(dir).await?;
    }

    let exists = tokio::fs::try_exists(&path).await?;
    if exists {
        info!(path = %path.display(), "File already exists; appending new content");
    }
    let md = render_items(items, (!exists).then_some(date));

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .await?;
    file.write_all(md.as_bytes()).await?;
    file.flush().await?;

    info!(path = %path.display(), bytes = md.len(), "Wrote daily Markdown");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 6).unwrap()
    }

    fn item(title: &str, description: &str, category: Category) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            description: description.to_string(),
            category,
            source: "Test".to_string(),
        }
    }

    #[test]
    fn test_output_path_layout() {
        let path = output_path(Path::new("data/current-affairs"), date());
        assert_eq!(
            path,
            PathBuf::from("data/current-affairs/2025/May/2025-05-06.md")
        );
    }

    #[test]
    fn test_date_heading_format() {
        assert_eq!(date_heading(date()), "# Current Affairs - 06 May 2025\n\n");
    }

    #[test]
    fn test_render_item_block() {
        let md = render_item(&item(
            "GDP grows 7%",
            "Growth beat estimates. Exports rose. Imports fell.",
            Category::Economy,
        ));
        assert_eq!(
            md,
            "## GDP grows 7%\n\n\
             **Category:** Economy\n\n\
             Growth beat estimates.  Exports rose\n\n\
             **Exam Angle:** Economic indicators, monetary policy, fiscal measures ke liye important\n\n\
             **Static Link:** Economic Survey aur Budget documents dekho\n\n\
             ---\n\n"
        );
    }

    #[test]
    fn test_render_items_with_and_without_heading() {
        let items = vec![item("A", "", Category::Polity), item("B", "", Category::Defence)];
        let with = render_items(&items, Some(date()));
        assert!(with.starts_with("# Current Affairs - 06 May 2025\n\n## A\n\n"));
        let without = render_items(&items, None);
        assert!(without.starts_with("## A\n\n"));
        assert_eq!(without.matches("---\n\n").count(), 2);
    }

    #[tokio::test]
    async fn test_append_creates_then_appends() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();

        let first = vec![item("First story", "One.", Category::Polity)];
        let path = append_items(root, date(), &first).await.unwrap();
        assert_eq!(path, root.join("2025/May/2025-05-06.md"));

        let second = vec![item("Second story", "Two.", Category::Reports)];
        append_items(root, date(), &second).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("# Current Affairs - 06 May 2025").count(), 1);
        assert!(content.starts_with("# Current Affairs - 06 May 2025\n\n## First story"));
        let first_at = content.find("## First story").unwrap();
        let second_at = content.find("## Second story").unwrap();
        assert!(first_at < second_at);
    }

    #[tokio::test]
    async fn test_append_with_no_items_still_creates_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = append_items(tmp.path(), date(), &[]).await.unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, "# Current Affairs - 06 May 2025\n\n");
    }
}
