//! Site-Distill: a same-origin site text crawler
//!
//! This crate implements a crawler that, given a start URL, fetches every
//! reachable page on the same host, extracts the readable text from each
//! page, and returns one combined document while streaming progress events
//! to the caller.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Site-Distill operations
///
/// Only start-up level problems surface through this type. Per-page
/// transport and processing failures are absorbed into counters and inline
/// error blocks and never abort a running crawl.
#[derive(Debug, Error)]
pub enum DistillError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid start URL: {0}")]
    StartUrl(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing hostname in URL")]
    MissingHost,
}

/// Result type alias for Site-Distill operations
pub type Result<T> = std::result::Result<T, DistillError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::CrawlOptions;
pub use crawler::{run_crawl, run_crawl_with_progress, Coordinator, CrawlReport};
pub use crawler::{CrawlAction, CrawlStats, ProgressEvent};
pub use url::{normalize_target, DomainScope};
