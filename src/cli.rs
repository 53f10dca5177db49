//! Command-line interface definitions.
//!
//! Every option has a default that reproduces the standard daily run, so the
//! binary is normally invoked with no arguments. Options can also be supplied
//! through environment variables where noted.

use crate::outputs::markdown::DEFAULT_ARCHIVE_DIR;
use crate::pipeline::DEFAULT_PER_FEED_LIMIT;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the current affairs fetcher.
///
/// # Examples
///
/// ```sh
/// # Daily run: fetch the built-in feeds into data/current-affairs
/// current_affairs
///
/// # Preview without touching the archive
/// current_affairs --dry-run
///
/// # Browse the archive
/// current_affairs search --topic Economy --month May
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Root directory of the daily Markdown archive
    #[arg(short, long, global = true, env = "CURRENT_AFFAIRS_DIR", default_value = DEFAULT_ARCHIVE_DIR)]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub fetch: FetchArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options for the fetch run (the default action).
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// YAML file listing feeds (`- name: ...` / `url: ...`); built-in feeds when absent
    #[arg(short, long, env = "CURRENT_AFFAIRS_FEEDS")]
    pub feeds: Option<PathBuf>,

    /// Number of entries considered from each feed
    #[arg(long, default_value_t = DEFAULT_PER_FEED_LIMIT)]
    pub per_feed_limit: usize,

    /// Date of the output file (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// HTTP timeout per feed, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Print the rendered Markdown instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search previously written daily files
    Search(SearchArgs),
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for in headlines, summaries and categories
    pub term: Option<String>,

    /// Year directory, e.g. 2025
    #[arg(long)]
    pub year: Option<String>,

    /// Month directory, e.g. May
    #[arg(long)]
    pub month: Option<String>,

    /// Category label or part of it, e.g. "Economy"
    #[arg(long)]
    pub topic: Option<String>,

    /// Emit JSON instead of a text listing
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["current_affairs"]);
        assert_eq!(cli.output_dir, PathBuf::from("data/current-affairs"));
        assert_eq!(cli.fetch.per_feed_limit, 10);
        assert_eq!(cli.fetch.timeout_secs, 30);
        assert!(cli.fetch.feeds.is_none());
        assert!(cli.fetch.date.is_none());
        assert!(!cli.fetch.dry_run);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_fetch_flags() {
        let cli = Cli::parse_from([
            "current_affairs",
            "-o",
            "/tmp/archive",
            "--feeds",
            "feeds.yaml",
            "--per-feed-limit",
            "5",
            "--date",
            "2025-05-06",
            "--dry-run",
        ]);
        assert_eq!(cli.output_dir, PathBuf::from("/tmp/archive"));
        assert_eq!(cli.fetch.feeds, Some(PathBuf::from("feeds.yaml")));
        assert_eq!(cli.fetch.per_feed_limit, 5);
        assert_eq!(cli.fetch.date, NaiveDate::from_ymd_opt(2025, 5, 6));
        assert!(cli.fetch.dry_run);
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        assert!(Cli::try_parse_from(["current_affairs", "--date", "06/05/2025"]).is_err());
    }

    #[test]
    fn test_cli_search_subcommand() {
        let cli = Cli::parse_from([
            "current_affairs",
            "search",
            "repo rate",
            "--topic",
            "Economy",
            "--json",
            "--output-dir",
            "/srv/archive",
        ]);
        assert_eq!(cli.output_dir, PathBuf::from("/srv/archive"));
        match cli.command {
            Some(Command::Search(args)) => {
                assert_eq!(args.term.as_deref(), Some("repo rate"));
                assert_eq!(args.topic.as_deref(), Some("Economy"));
                assert!(args.json);
                assert!(args.year.is_none());
            }
            other => panic!("expected search, got {other:?}"),
        }
    }
}
