//! # Current Affairs
//!
//! Collects exam-relevant news from a fixed set of RSS feeds and appends it
//! to a date-partitioned Markdown archive for exam preparation.
//!
//! ## Usage
//!
//! ```sh
//! current_affairs                      # fetch today's news
//! current_affairs search "repo rate"   # browse what was collected
//! ```
//!
//! ## Architecture
//!
//! The fetch run is a single sequential pipeline:
//! 1. **Reading**: Fetch and parse each configured feed, one at a time
//! 2. **Filtering**: Clean the text, drop irrelevant entries, assign one category
//! 3. **Deduplication**: Drop entries whose normalized title prefix was seen
//! 4. **Output**: Append Markdown blocks to `<year>/<Month>/<YYYY-MM-DD>.md`

use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod dedup;
mod feeds;
mod filter;
mod keywords;
mod models;
mod outputs;
mod pipeline;
mod utils;

use cli::{Cli, Command, FetchArgs, SearchArgs};
use feeds::http::HttpFeedReader;
use outputs::archive::{self, SearchFilter};
use pipeline::RunOptions;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    match args.command {
        Some(Command::Search(search)) => run_search(&args.output_dir, search).await,
        None => run_fetch(&args.output_dir, args.fetch).await,
    }
}

#[instrument(level = "info", skip_all)]
async fn run_fetch(output_dir: &Path, args: FetchArgs) -> Result<(), Box<dyn Error>> {
    let start_time = std::time::Instant::now();

    let feeds = feeds::load_feeds(args.feeds.as_deref()).await?;
    let reader = HttpFeedReader::new(Duration::from_secs(args.timeout_secs))?;
    let opts = RunOptions {
        output_dir: output_dir.to_path_buf(),
        date: args.date.unwrap_or_else(|| Local::now().date_naive()),
        per_feed_limit: args.per_feed_limit,
        dry_run: args.dry_run,
    };
    info!(feeds = feeds.len(), date = %opts.date, "Starting fetch run");

    let report = pipeline::run(&reader, &feeds, &opts).await?;

    if let Some(md) = &report.rendered {
        print!("{md}");
    }
    println!("{}", success_line(report.kept));

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        found = report.found,
        kept = report.kept,
        failed_feeds = report.failed_feeds,
        "Execution complete"
    );
    Ok(())
}

/// The single line a successful fetch run prints to stdout.
fn success_line(kept: usize) -> String {
    format!("Successfully processed {kept} news items!")
}

#[instrument(level = "info", skip_all)]
async fn run_search(output_dir: &Path, args: SearchArgs) -> Result<(), Box<dyn Error>> {
    let filter = SearchFilter {
        term: args.term,
        year: args.year,
        month: args.month,
        topic: args.topic,
    };
    let items = archive::search(output_dir, &filter).await?;
    info!(count = items.len(), "Search complete");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if items.is_empty() {
        println!("No results found");
    } else {
        print!("{}", archive::render_listing(&items));
    }
    Ok(())
}
