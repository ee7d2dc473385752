//! Progress reporting from the coordinator to the caller
//!
//! Events are immutable snapshots pushed over an unbounded channel at
//! every coordinator state transition. Delivery is synchronous relative
//! to the transition that produced the event; nothing is retained
//! afterwards.

use tokio::sync::mpsc::UnboundedSender;

/// What the coordinator is doing at the moment an event is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlAction {
    /// Crawl is starting up
    Initializing,
    /// A newly discovered URL was admitted to the frontier
    Queueing,
    /// A worker was dispatched to fetch a URL
    Fetching,
    /// A worker's fetched HTML is being processed
    Processing,
    /// A page completed successfully
    Success,
    /// A page failed (transport, HTTP, or processing)
    Error,
    /// A page was discarded without counting (off-domain redirect)
    Idle,
    /// The crawl finished; this is the final event
    Complete,
}

/// Counters owned exclusively by the coordinator
///
/// `attempted` increments when a worker is dispatched; `succeeded` and
/// `failed` increment exactly once per worker and are mutually exclusive.
/// Off-domain discards count toward none of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    pub attempted: u64,
    pub succeeded: u64,
    pub failed: u64,
}

/// A point-in-time snapshot of crawl state pushed to observers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    pub action: CrawlAction,

    /// The URL the action concerns, when there is one
    pub url: Option<String>,

    /// Counter snapshot at emission time
    pub stats: CrawlStats,

    /// Pending frontier targets plus in-flight workers
    pub queue_size: usize,
}

/// Optional push channel from the coordinator to the caller
///
/// With no sender attached, emission is a no-op. A dropped receiver is
/// also a no-op: observers may stop listening without affecting the crawl.
#[derive(Debug, Clone, Default)]
pub struct ProgressSender {
    tx: Option<UnboundedSender<ProgressEvent>>,
}

impl ProgressSender {
    /// Creates a sender that delivers events over the given channel
    pub fn new(tx: UnboundedSender<ProgressEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Creates a sender that discards all events
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// Emits one event snapshot
    pub fn emit(
        &self,
        action: CrawlAction,
        url: Option<&str>,
        stats: CrawlStats,
        queue_size: usize,
    ) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(ProgressEvent {
                action,
                url: url.map(str::to_string),
                stats,
                queue_size,
            });
        }
    }
}
