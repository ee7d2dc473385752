//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with the configured user agent
//! - GET requests with transparent redirect following
//! - Error classification
//!
//! Every failure becomes a [`FetchOutcome`] value; nothing below start-up
//! level is raised past this boundary, and no retries happen here.

use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: Url,
        /// Response body as text
        body: String,
    },

    /// Response arrived with a non-2xx status
    HttpError {
        /// The HTTP status code
        status: u16,
    },

    /// Network error (DNS failure, timeout, connection reset, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds an HTTP client with proper configuration
///
/// Redirects are followed transparently up to ten hops; the final resolved
/// URL is reported back through [`FetchOutcome::Success`].
///
/// # Arguments
///
/// * `user_agent` - The user agent string to send with every request
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the result
///
/// Performs exactly one GET (plus any redirect hops the client follows).
/// Retry policy, if any, belongs to the caller; this crawler uses none.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// A [`FetchOutcome`] indicating success or the type of failure. If the
/// transport does not expose a resolved URL the original is reported as
/// the final URL.
pub async fn fetch_url(client: &Client, url: &Url) -> FetchOutcome {
    match client.get(url.clone()).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().clone();

            if !status.is_success() {
                return FetchOutcome::HttpError {
                    status: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchOutcome::Success { final_url, body },
                Err(e) => FetchOutcome::NetworkError {
                    error: format!("Failed to read body: {}", e),
                },
            }
        }
        Err(e) => {
            if e.is_timeout() {
                FetchOutcome::NetworkError {
                    error: "Request timeout".to_string(),
                }
            } else if e.is_connect() {
                FetchOutcome::NetworkError {
                    error: format!("Connection failed: {}", e),
                }
            } else if e.is_redirect() {
                FetchOutcome::NetworkError {
                    error: "Too many redirects".to_string(),
                }
            } else {
                FetchOutcome::NetworkError {
                    error: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client("TestBot/1.0");
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_network_error() {
        let client = build_http_client("TestBot/1.0").unwrap();
        // Port 1 is essentially never listening
        let url = Url::parse("http://127.0.0.1:1/").unwrap();
        let outcome = fetch_url(&client, &url).await;
        assert!(matches!(outcome, FetchOutcome::NetworkError { .. }));
    }
}
