use crate::UrlError;
use url::Url;

/// Normalizes a URL into its crawl-target form
///
/// Two URLs identify the same crawl target if and only if their normalized
/// strings are equal, so this is the single place that defines target
/// identity.
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Reject schemes other than `http` and `https`
/// 3. Reject URLs without a hostname
/// 4. Remove the fragment (everything after `#`)
///
/// Nothing else is rewritten: path, query, and case are kept exactly as
/// the standard URL parser produces them.
///
/// # Arguments
///
/// * `url_str` - The URL string to normalize
///
/// # Returns
///
/// * `Ok(Url)` - Normalized URL
/// * `Err(UrlError)` - Failed to parse or normalize the URL
///
/// # Examples
///
/// ```
/// use site_distill::url::normalize_target;
///
/// let url = normalize_target("https://example.com/page#section").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/page");
/// ```
pub fn normalize_target(url_str: &str) -> Result<Url, UrlError> {
    let mut url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    url.set_fragment(None);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_fragment() {
        let result = normalize_target("https://example.com/page#section").unwrap();
        assert_eq!(result.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_fragment_only_difference_is_same_target() {
        let a = normalize_target("https://example.com/page#top").unwrap();
        let b = normalize_target("https://example.com/page#bottom").unwrap();
        assert_eq!(a.as_str(), b.as_str());
    }

    #[test]
    fn test_http_allowed() {
        let result = normalize_target("http://example.com/").unwrap();
        assert_eq!(result.as_str(), "http://example.com/");
    }

    #[test]
    fn test_query_preserved() {
        let result = normalize_target("https://example.com/page?a=1&b=2").unwrap();
        assert_eq!(result.as_str(), "https://example.com/page?a=1&b=2");
    }

    #[test]
    fn test_empty_path_becomes_root() {
        let result = normalize_target("https://example.com").unwrap();
        assert_eq!(result.as_str(), "https://example.com/");
    }

    #[test]
    fn test_invalid_scheme() {
        let result = normalize_target("ftp://example.com/file");
        assert!(matches!(result, Err(UrlError::InvalidScheme(_))));
    }

    #[test]
    fn test_mailto_rejected() {
        let result = normalize_target("mailto:someone@example.com");
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_url() {
        let result = normalize_target("not a url");
        assert!(matches!(result, Err(UrlError::Parse(_))));
    }

    #[test]
    fn test_port_preserved() {
        let result = normalize_target("http://127.0.0.1:8080/page").unwrap();
        assert_eq!(result.as_str(), "http://127.0.0.1:8080/page");
    }
}
