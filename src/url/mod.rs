//! URL handling module for Sumi-Gather
//!
//! This module provides seed URL validation and href resolution against the
//! URL of the page the href was found on.

use crate::UrlError;
use url::Url;

/// Returns true if the URL uses a scheme the fetcher can request
pub fn is_fetchable(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

/// Parses and validates a seed URL
///
/// # Returns
///
/// * `Ok(Url)` - An absolute http(s) URL with a host
/// * `Err(UrlError)` - The string is not such a URL
///
/// # Examples
///
/// ```
/// use sumi_gather::url::parse_seed_url;
///
/// assert!(parse_seed_url("https://example.com/").is_ok());
/// assert!(parse_seed_url("mailto:someone@example.com").is_err());
/// ```
pub fn parse_seed_url(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if !is_fetchable(&url) {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}

/// Resolves an href found on `page_url` to an absolute URL
///
/// Hrefs that already carry an http(s) scheme are taken as they are; anything else is
/// joined onto the page URL following RFC 3986 reference resolution (dot segments,
/// query strings and fragments included).
///
/// Returns None if the href is empty, cannot be resolved, or resolves to a scheme the
/// fetcher cannot request (`javascript:`, `mailto:`, `tel:`, `data:` and the like).
///
/// # Examples
///
/// ```
/// use sumi_gather::url::resolve_href;
/// use url::Url;
///
/// let page = Url::parse("https://example.com/a/b").unwrap();
/// let resolved = resolve_href(&page, "../c").unwrap();
/// assert_eq!(resolved.as_str(), "https://example.com/c");
/// ```
pub fn resolve_href(page_url: &Url, href: &str) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    let resolved = if has_http_scheme(href) {
        Url::parse(href).ok()?
    } else {
        page_url.join(href).ok()?
    };

    is_fetchable(&resolved).then_some(resolved)
}

fn has_http_scheme(href: &str) -> bool {
    let lower = href.get(..8).unwrap_or(href).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
