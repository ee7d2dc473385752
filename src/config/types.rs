use serde::Deserialize;

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "SiteDistill/1.0 (site text crawler)";

/// Default cap on simultaneous in-flight fetches
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 5;

/// Options recognized by a crawl run
///
/// The concurrency cap bounds simultaneous in-flight fetches only; the
/// visited set still grows with every distinct same-domain URL discovered.
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlOptions {
    /// User agent string sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of simultaneous in-flight fetches (minimum 1)
    #[serde(
        rename = "max-concurrent-requests",
        default = "default_max_concurrent"
    )]
    pub max_concurrent_requests: usize,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
        }
    }
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_max_concurrent() -> usize {
    DEFAULT_MAX_CONCURRENT_REQUESTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CrawlOptions::default();
        assert_eq!(options.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(options.max_concurrent_requests, 5);
    }
}
