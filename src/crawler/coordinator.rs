//! Crawl coordinator - the control loop that owns all mutable crawl state
//!
//! The coordinator runs up to N page workers concurrently, drains the
//! frontier until it is empty and no worker is in flight, aggregates the
//! extracted text, and emits a progress event at every state transition.
//!
//! Workers are pure: each one fetches a page, scope-checks the redirected
//! URL, and extracts links and content, then returns everything as a
//! value. The frontier, counters, and accumulator are mutated only here,
//! on the control loop, so the crawl needs no locks.

use crate::config::{validate, CrawlOptions};
use crate::crawler::extractor::{extract_content, ContentBlock, ExtractError};
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchOutcome};
use crate::crawler::frontier::{CrawlTarget, Frontier};
use crate::crawler::links::extract_links;
use crate::crawler::progress::{CrawlAction, CrawlStats, ProgressEvent, ProgressSender};
use crate::url::{normalize_target, DomainScope};
use crate::DistillError;
use reqwest::Client;
use std::collections::HashSet;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinSet;
use url::Url;

/// Outcome of processing one crawl target, produced by a worker
#[derive(Debug)]
enum PageOutcome {
    /// The page was fetched; content extraction may still have failed
    Fetched {
        content: Result<ContentBlock, ExtractError>,
        links: HashSet<Url>,
    },

    /// The fetch itself failed (transport or non-2xx status)
    FetchFailed { reason: String },

    /// Redirects left the crawl's host; discarded without counting
    OffDomain { final_url: Url },
}

/// What a worker hands back to the control loop
#[derive(Debug)]
struct WorkerReport {
    target: CrawlTarget,
    outcome: PageOutcome,
}

/// Final artifact of a crawl
#[derive(Debug)]
pub struct CrawlReport {
    /// All content blocks concatenated in worker-completion order
    pub text: String,

    /// Final counter values
    pub stats: CrawlStats,
}

/// Crawl coordinator
///
/// Created per crawl; holds the frontier, counters, and result
/// accumulator for exactly one run and is discarded afterwards.
pub struct Coordinator {
    options: CrawlOptions,
    client: Client,
    scope: DomainScope,
    frontier: Frontier,
    stats: CrawlStats,
    blocks: Vec<ContentBlock>,
    progress: ProgressSender,
}

impl Coordinator {
    /// Creates a coordinator for one crawl
    ///
    /// The start URL is normalized, its hostname becomes the crawl's
    /// domain scope, and it is seeded as the sole initial frontier
    /// member. An unparseable start URL or one without a hostname is a
    /// fatal start-up error; nothing below that level will ever surface
    /// through `Err` again.
    ///
    /// # Arguments
    ///
    /// * `start_url` - Absolute URL the crawl begins from
    /// * `options` - Recognized crawl options
    /// * `progress` - Event channel to the caller (may be disabled)
    pub fn new(
        start_url: &str,
        options: CrawlOptions,
        progress: ProgressSender,
    ) -> Result<Self, DistillError> {
        validate(&options)?;

        let start = normalize_target(start_url)?;
        let scope = DomainScope::from_url(&start)?;
        let client = build_http_client(&options.user_agent)?;

        let mut frontier = Frontier::new();
        frontier.offer(CrawlTarget::new(start.clone()));

        let coordinator = Self {
            options,
            client,
            scope,
            frontier,
            stats: CrawlStats::default(),
            blocks: Vec::new(),
            progress,
        };

        coordinator.emit(CrawlAction::Initializing, Some(start.as_str()), 0);
        Ok(coordinator)
    }

    /// Runs the crawl to completion
    ///
    /// The loop dispatches a worker whenever the frontier has a pending
    /// target and fewer than `max_concurrent_requests` workers are in
    /// flight, then absorbs one completion at a time. The crawl reaches
    /// its fixed point when the frontier is empty and no worker remains:
    /// the frontier only admits brand-new URLs, so a host with finitely
    /// many reachable pages always terminates.
    pub async fn run(&mut self) -> CrawlReport {
        tracing::info!(
            host = self.scope.host(),
            concurrency = self.options.max_concurrent_requests,
            "Starting crawl"
        );

        let mut workers: JoinSet<WorkerReport> = JoinSet::new();

        loop {
            while workers.len() < self.options.max_concurrent_requests {
                let Some(target) = self.frontier.take_next() else {
                    break;
                };

                self.stats.attempted += 1;
                self.emit(CrawlAction::Fetching, Some(target.as_str()), workers.len() + 1);

                tracing::debug!(url = %target, "Dispatching worker");
                let client = self.client.clone();
                let scope = self.scope.clone();
                workers.spawn(process_page(client, target, scope));
            }

            let Some(joined) = workers.join_next().await else {
                // Frontier empty and nothing in flight: the fixed point
                break;
            };

            let in_flight = workers.len();
            match joined {
                Ok(report) => self.absorb(report, in_flight),
                Err(e) => {
                    // A panicked worker counts as a page failure and the
                    // crawl continues
                    tracing::error!("Worker panicked: {}", e);
                    self.stats.failed += 1;
                    self.emit(CrawlAction::Error, None, in_flight);
                }
            }
        }

        self.emit(CrawlAction::Complete, None, 0);
        tracing::info!(
            attempted = self.stats.attempted,
            succeeded = self.stats.succeeded,
            failed = self.stats.failed,
            "Crawl complete"
        );

        let text = self
            .blocks
            .iter()
            .map(ContentBlock::render)
            .collect::<Vec<_>>()
            .join("\n\n");

        CrawlReport {
            text,
            stats: self.stats,
        }
    }

    /// Absorbs one worker's report into the crawl state
    ///
    /// All counter updates, frontier offers, and accumulator appends
    /// happen here, on the control loop.
    fn absorb(&mut self, report: WorkerReport, in_flight: usize) {
        self.emit(CrawlAction::Processing, Some(report.target.as_str()), in_flight);

        match report.outcome {
            PageOutcome::Fetched { content, links } => {
                let extraction_failed = content.is_err();

                match content {
                    Ok(block) => self.blocks.push(block),
                    Err(reason) => {
                        tracing::warn!(url = %report.target, %reason, "Content extraction failed");
                        self.blocks
                            .push(ContentBlock::failure(report.target.as_str(), &reason.to_string()));
                    }
                }

                // Link discovery proceeds even when extraction failed,
                // since the HTML itself was available
                for link in links {
                    if self.frontier.offer(CrawlTarget::new(link.clone())) {
                        self.emit(CrawlAction::Queueing, Some(link.as_str()), in_flight);
                    }
                }

                if extraction_failed {
                    self.stats.failed += 1;
                    self.emit(CrawlAction::Error, Some(report.target.as_str()), in_flight);
                } else {
                    self.stats.succeeded += 1;
                    self.emit(CrawlAction::Success, Some(report.target.as_str()), in_flight);
                }
            }

            PageOutcome::FetchFailed { reason } => {
                tracing::warn!(url = %report.target, %reason, "Fetch failed");
                self.stats.failed += 1;
                self.emit(CrawlAction::Error, Some(report.target.as_str()), in_flight);
            }

            PageOutcome::OffDomain { final_url } => {
                // Not a success, not a failure: silently discarded
                tracing::debug!(url = %report.target, redirected_to = %final_url, "Off-domain redirect discarded");
                self.emit(CrawlAction::Idle, Some(report.target.as_str()), in_flight);
            }
        }
    }

    fn emit(&self, action: CrawlAction, url: Option<&str>, in_flight: usize) {
        self.progress.emit(
            action,
            url,
            self.stats,
            self.frontier.pending_count() + in_flight,
        );
    }
}

/// Processes one page: fetch, scope-check, extract links and content
///
/// Pure with respect to crawl state; everything discovered is returned
/// to the control loop as a value.
async fn process_page(client: Client, target: CrawlTarget, scope: DomainScope) -> WorkerReport {
    let outcome = match fetch_url(&client, target.as_url()).await {
        FetchOutcome::Success { final_url, body } => {
            if !scope.contains(&final_url) {
                PageOutcome::OffDomain { final_url }
            } else {
                let links = extract_links(&body, &final_url, &scope);
                let content = extract_content(&body, final_url.as_str());
                PageOutcome::Fetched { content, links }
            }
        }
        FetchOutcome::HttpError { status } => PageOutcome::FetchFailed {
            reason: format!("HTTP {}", status),
        },
        FetchOutcome::NetworkError { error } => PageOutcome::FetchFailed { reason: error },
    };

    WorkerReport { target, outcome }
}

/// Crawls a site and returns the combined text of every reachable page
///
/// # Arguments
///
/// * `start_url` - Absolute URL the crawl begins from
/// * `options` - Recognized crawl options (see [`CrawlOptions`])
///
/// # Returns
///
/// * `Ok(String)` - All extracted content blocks, in worker-completion
///   order
/// * `Err(DistillError)` - A start-up failure; per-page failures never
///   surface here
///
/// # Example
///
/// ```no_run
/// use site_distill::{run_crawl, CrawlOptions};
///
/// # async fn example() -> site_distill::Result<()> {
/// let text = run_crawl("https://example.com/", CrawlOptions::default()).await?;
/// println!("{}", text);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(start_url: &str, options: CrawlOptions) -> Result<String, DistillError> {
    let mut coordinator = Coordinator::new(start_url, options, ProgressSender::disabled())?;
    Ok(coordinator.run().await.text)
}

/// Like [`run_crawl`], but streams a [`ProgressEvent`] for every state
/// transition and returns the final counters alongside the text
pub async fn run_crawl_with_progress(
    start_url: &str,
    options: CrawlOptions,
    progress: UnboundedSender<ProgressEvent>,
) -> Result<CrawlReport, DistillError> {
    let mut coordinator = Coordinator::new(start_url, options, ProgressSender::new(progress))?;
    Ok(coordinator.run().await)
}
