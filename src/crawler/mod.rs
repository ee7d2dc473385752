//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with redirect following and error classification
//! - Readable-text extraction from fetched HTML
//! - Same-domain link discovery
//! - Frontier (queue + visited set) management
//! - Concurrency-bounded crawl coordination with progress events

mod coordinator;
mod extractor;
mod fetcher;
mod frontier;
mod links;
mod progress;

pub use coordinator::{run_crawl, run_crawl_with_progress, Coordinator, CrawlReport};
pub use extractor::{extract_content, ContentBlock, ExtractError};
pub use fetcher::{build_http_client, fetch_url, FetchOutcome};
pub use frontier::{CrawlTarget, Frontier};
pub use links::extract_links;
pub use progress::{CrawlAction, CrawlStats, ProgressEvent, ProgressSender};
