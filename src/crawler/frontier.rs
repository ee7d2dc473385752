//! Crawl frontier: pending queue plus admitted set
//!
//! The frontier is the single dedup gate of a crawl. It is owned and
//! mutated exclusively by the coordinator's control loop; workers report
//! discoveries back instead of touching it, so no locking is needed.

use std::collections::{HashSet, VecDeque};
use url::Url;

/// A normalized URL queued for crawling
///
/// Identity is the normalized URL string: two targets are the same page
/// if and only if their strings are equal. Construction goes through
/// [`crate::url::normalize_target`] or the link extractor, both of which
/// strip fragments first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CrawlTarget(Url);

impl CrawlTarget {
    pub fn new(url: Url) -> Self {
        Self(url)
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for CrawlTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// FIFO queue of pending targets plus the set of all targets ever admitted
///
/// Invariants: a target enters the pending queue at most once over the
/// frontier's lifetime, and the admitted set only grows.
#[derive(Debug, Default)]
pub struct Frontier {
    pending: VecDeque<CrawlTarget>,
    admitted: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a target for admission
    ///
    /// The target is admitted if and only if it has never been admitted
    /// before, regardless of whether it is still pending, in flight, or
    /// long since processed.
    ///
    /// # Returns
    ///
    /// Whether admission occurred
    pub fn offer(&mut self, target: CrawlTarget) -> bool {
        if self.admitted.contains(target.as_str()) {
            return false;
        }

        self.admitted.insert(target.as_str().to_string());
        self.pending.push_back(target);
        true
    }

    /// Removes and returns the earliest-admitted pending target
    pub fn take_next(&mut self) -> Option<CrawlTarget> {
        self.pending.pop_front()
    }

    /// Returns the number of targets admitted but not yet dispatched
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns the number of targets ever admitted
    pub fn admitted_count(&self) -> usize {
        self.admitted.len()
    }
}
