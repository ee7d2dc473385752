use crate::UrlError;
use url::Url;

/// The single hostname a crawl is restricted to
///
/// The scope is fixed from the start URL when a crawl begins and never
/// changes for the crawl's lifetime. A URL is in scope only when its
/// hostname equals the scope's hostname exactly; subdomains do not match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainScope {
    host: String,
}

impl DomainScope {
    /// Creates a scope from a URL's hostname
    ///
    /// # Arguments
    ///
    /// * `url` - The start URL whose host defines the scope
    ///
    /// # Returns
    ///
    /// * `Ok(DomainScope)` - Scope fixed to the URL's lowercase host
    /// * `Err(UrlError::MissingHost)` - The URL has no hostname
    ///
    /// # Examples
    ///
    /// ```
    /// use site_distill::url::DomainScope;
    /// use url::Url;
    ///
    /// let url = Url::parse("https://Example.COM/start").unwrap();
    /// let scope = DomainScope::from_url(&url).unwrap();
    /// assert_eq!(scope.host(), "example.com");
    /// ```
    pub fn from_url(url: &Url) -> Result<Self, UrlError> {
        let host = url.host_str().ok_or(UrlError::MissingHost)?;
        Ok(Self {
            host: host.to_lowercase(),
        })
    }

    /// Returns the hostname this scope is fixed to
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns whether a URL's hostname matches the scope exactly
    pub fn contains(&self, url: &Url) -> bool {
        url.host_str()
            .map(|h| h.eq_ignore_ascii_case(&self.host))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> DomainScope {
        let url = Url::parse("https://example.com/").unwrap();
        DomainScope::from_url(&url).unwrap()
    }

    #[test]
    fn test_same_host_in_scope() {
        let url = Url::parse("https://example.com/deep/page?q=1").unwrap();
        assert!(scope().contains(&url));
    }

    #[test]
    fn test_other_host_out_of_scope() {
        let url = Url::parse("https://other.com/page").unwrap();
        assert!(!scope().contains(&url));
    }

    #[test]
    fn test_subdomain_does_not_match() {
        let url = Url::parse("https://blog.example.com/post").unwrap();
        assert!(!scope().contains(&url));
    }

    #[test]
    fn test_host_comparison_is_case_insensitive() {
        let url = Url::parse("https://EXAMPLE.com/page").unwrap();
        assert!(scope().contains(&url));
    }

    #[test]
    fn test_scheme_change_stays_in_scope() {
        let url = Url::parse("http://example.com/page").unwrap();
        assert!(scope().contains(&url));
    }

    #[test]
    fn test_from_url_lowercases_host() {
        let url = Url::parse("https://Example.COM/").unwrap();
        let scope = DomainScope::from_url(&url).unwrap();
        assert_eq!(scope.host(), "example.com");
    }

    #[test]
    fn test_from_url_missing_host() {
        let url = Url::parse("data:text/plain,hello").unwrap();
        assert!(matches!(
            DomainScope::from_url(&url),
            Err(UrlError::MissingHost)
        ));
    }
}
