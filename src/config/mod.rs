//! Configuration module for Site-Distill
//!
//! This module handles the crawl options structure, its documented
//! defaults, and loading option overrides from TOML files.
//!
//! # Example
//!
//! ```no_run
//! use site_distill::config::load_options;
//! use std::path::Path;
//!
//! let options = load_options(Path::new("distill.toml")).unwrap();
//! println!("Concurrency cap: {}", options.max_concurrent_requests);
//! ```

mod parser;
mod types;
mod validation;

pub use parser::load_options;
pub use types::{CrawlOptions, DEFAULT_MAX_CONCURRENT_REQUESTS, DEFAULT_USER_AGENT};
pub use validation::validate;
