//! Output module for summarizing crawl results
//!
//! The crawl's sole artifact is the in-memory combined text string; this
//! module derives human-readable summary figures from it for the CLI.

mod summary;

pub use summary::{summarize, CrawlSummary};
