//! Site-Distill main entry point
//!
//! Command-line interface for the same-origin site text crawler.

use anyhow::Context;
use clap::Parser;
use site_distill::config::{load_options, CrawlOptions};
use site_distill::crawler::{run_crawl_with_progress, CrawlAction, ProgressEvent};
use site_distill::output::summarize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Site-Distill: same-origin site text crawler
///
/// Crawls every reachable page on the start URL's host, extracts the
/// readable text from each page, and prints one combined document.
#[derive(Parser, Debug)]
#[command(name = "site-distill")]
#[command(version = "1.0.0")]
#[command(about = "Extract the readable text of an entire site", long_about = None)]
struct Cli {
    /// Start URL; the crawl is confined to this URL's hostname
    #[arg(value_name = "START_URL")]
    start_url: String,

    /// Path to a TOML options file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// User agent to send with every request
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Maximum simultaneous in-flight fetches
    #[arg(long, value_name = "N")]
    max_concurrent: Option<usize>,

    /// Write the combined text to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let options = build_options(&cli)?;
    tracing::info!(
        user_agent = %options.user_agent,
        max_concurrent = options.max_concurrent_requests,
        "Crawling {}",
        cli.start_url
    );

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let reporter = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            log_progress(&event);
        }
    });

    let report = run_crawl_with_progress(&cli.start_url, options, tx)
        .await
        .context("crawl failed to start")?;

    // The sender inside the coordinator is gone once the crawl returns,
    // so the reporter drains and exits on its own
    let _ = reporter.await;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &report.text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote combined text to {}", path.display());
        }
        None => println!("{}", report.text),
    }

    if !cli.quiet {
        eprintln!("\n{}", summarize(&report).render());
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_distill=info,warn"),
            1 => EnvFilter::new("site_distill=debug,info"),
            2 => EnvFilter::new("site_distill=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds crawl options from the config file (if any) with CLI overrides
fn build_options(cli: &Cli) -> anyhow::Result<CrawlOptions> {
    let mut options = match &cli.config {
        Some(path) => load_options(path)
            .with_context(|| format!("failed to load options from {}", path.display()))?,
        None => CrawlOptions::default(),
    };

    if let Some(ua) = &cli.user_agent {
        options.user_agent = ua.clone();
    }
    if let Some(n) = cli.max_concurrent {
        options.max_concurrent_requests = n;
    }

    Ok(options)
}

/// Logs one progress event at an appropriate level
fn log_progress(event: &ProgressEvent) {
    let url = event.url.as_deref().unwrap_or("-");
    match event.action {
        CrawlAction::Initializing => tracing::info!("Initializing crawl of {}", url),
        CrawlAction::Queueing => tracing::debug!("Queued {} (queue: {})", url, event.queue_size),
        CrawlAction::Fetching => tracing::info!(
            "[{}/{} ok, {} failed, {} queued] Fetching {}",
            event.stats.succeeded,
            event.stats.attempted,
            event.stats.failed,
            event.queue_size,
            url
        ),
        CrawlAction::Processing => tracing::debug!("Processing {}", url),
        CrawlAction::Success => tracing::debug!("Done {}", url),
        CrawlAction::Error => tracing::warn!("Failed {}", url),
        CrawlAction::Idle => tracing::debug!("Discarded off-domain redirect from {}", url),
        CrawlAction::Complete => tracing::info!(
            "Complete: {} attempted, {} succeeded, {} failed",
            event.stats.attempted,
            event.stats.succeeded,
            event.stats.failed
        ),
    }
}
