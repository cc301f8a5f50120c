//! HTML parser for extracting links and metadata
//!
//! Parsing is lenient: html5ever recovers from malformed markup, so a broken page
//! yields whatever anchors could be recovered rather than an error.

use crate::url::resolve_href;
use scraper::{Html, Selector};
use url::Url;

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// The page title (from <title> tag)
    pub title: Option<String>,

    /// Every anchor target on the page, resolved to an absolute URL, in document order
    pub links: Vec<Url>,
}

/// Parses HTML content and extracts links and metadata
///
/// # Link Extraction Rules
///
/// - Every `<a href="...">` is considered, in document order
/// - Absolute http(s) hrefs are kept, relative hrefs are resolved against `page_url`
/// - Hrefs that cannot become a fetchable http(s) URL are skipped
/// - Duplicates are kept; the crawl engine deduplicates
///
/// # Example
///
/// ```
/// use sumi_gather::crawler::parse_html;
/// use url::Url;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let page_url = Url::parse("https://example.com/").unwrap();
/// let parsed = parse_html(html, &page_url);
/// assert_eq!(parsed.title, Some("Test".to_string()));
/// assert_eq!(parsed.links[0].as_str(), "https://example.com/page");
/// ```
pub fn parse_html(html: &str, page_url: &Url) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        links: collect_links(&document, page_url),
    }
}

/// Extracts the absolute link targets of every anchor on a page
pub fn extract_links(page_url: &Url, html: &str) -> Vec<Url> {
    let document = Html::parse_document(html);
    collect_links(&document, page_url)
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

fn collect_links(document: &Html, page_url: &Url) -> Vec<Url> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_href(page_url, href))
        .collect()
}
