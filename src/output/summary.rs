//! Summary figures derived from a finished crawl

use crate::crawler::CrawlReport;

/// Summary counts for one completed crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Pages dispatched to workers
    pub pages_attempted: u64,

    /// Pages that produced a content block
    pub pages_succeeded: u64,

    /// Pages that failed (transport, HTTP, or processing)
    pub pages_failed: u64,

    /// Whitespace-separated words in the combined text
    pub word_count: usize,

    /// Characters in the combined text
    pub char_count: usize,
}

impl CrawlSummary {
    /// Renders the summary as plain text for terminal display
    pub fn render(&self) -> String {
        format!(
            "Pages attempted: {}\nPages succeeded: {}\nPages failed: {}\nWords extracted: {}\nCharacters: {}",
            self.pages_attempted,
            self.pages_succeeded,
            self.pages_failed,
            self.word_count,
            self.char_count
        )
    }
}

/// Computes summary figures from a crawl report
pub fn summarize(report: &CrawlReport) -> CrawlSummary {
    CrawlSummary {
        pages_attempted: report.stats.attempted,
        pages_succeeded: report.stats.succeeded,
        pages_failed: report.stats.failed,
        word_count: report.text.split_whitespace().count(),
        char_count: report.text.chars().count(),
    }
}
