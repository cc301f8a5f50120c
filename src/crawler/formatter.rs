//! HTML to markdown conversion
//!
//! Conversion is best effort: `htmd` handles the common case, and a document that
//! it cannot convert falls back to its plain text content.

use scraper::Html;

/// Converts an HTML document to markdown
pub fn to_markdown(html: &str) -> String {
    htmd::convert(html)
        .map(|md| md.trim().to_string())
        .unwrap_or_else(|e| {
            tracing::debug!("Markdown conversion failed, using plain text: {}", e);
            to_plain_text(html)
        })
}

/// Extracts whitespace-normalized text from an HTML document
pub fn to_plain_text(html: &str) -> String {
    let document = Html::parse_document(html);
    document
        .root_element()
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
