//! Same-domain link discovery
//!
//! This module parses hyperlinks out of fetched HTML and keeps only the
//! absolute, fragment-stripped targets that stay on the crawl's host.

use crate::url::DomainScope;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Schemes that never lead to a fetchable page
const SKIPPED_SCHEMES: &[&str] = &["mailto:", "tel:", "javascript:"];

/// Extracts the set of same-domain link targets from a page
///
/// # Rules
///
/// * Only `<a href>` elements are considered
/// * Empty targets, fragment-only targets, and `mailto:`/`tel:`/
///   `javascript:` targets are discarded (scheme check is
///   case-insensitive)
/// * Remaining targets resolve to absolute form against `base_url`
/// * Only `http`/`https` targets whose hostname equals the scope exactly
///   are kept, with fragments stripped
///
/// Individual malformed hrefs are skipped silently; the result is a set,
/// so duplicates collapse and no ordering is guaranteed.
///
/// # Arguments
///
/// * `html` - The raw HTML to scan
/// * `base_url` - The page's resolved URL, used to absolutize relative hrefs
/// * `scope` - The hostname the crawl is restricted to
pub fn extract_links(html: &str, base_url: &Url, scope: &DomainScope) -> HashSet<Url> {
    let document = Html::parse_document(html);

    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        // A total parse failure yields an empty set rather than aborting
        Err(_) => return HashSet::new(),
    };

    let mut links = HashSet::new();
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(url) = resolve_link(href, base_url, scope) {
                links.insert(url);
            }
        }
    }

    links
}

/// Resolves one href to an in-scope absolute URL, or None to discard it
fn resolve_link(href: &str, base_url: &Url, scope: &DomainScope) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if SKIPPED_SCHEMES.iter().any(|s| lowered.starts_with(s)) {
        return None;
    }

    let mut url = base_url.join(href).ok()?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }

    if !scope.contains(&url) {
        return None;
    }

    url.set_fragment(None);
    Some(url)
}
