//! URL handling for Site-Distill
//!
//! This module handles URL normalization and the domain scoping that keeps
//! a crawl confined to the host of its start URL.

mod domain;
mod normalize;

pub use domain::DomainScope;
pub use normalize::normalize_target;
