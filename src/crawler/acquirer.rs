//! Content acquisition for the relevant pages
//!
//! Each URL is fetched with the configured retry budget and converted to markdown.
//! A URL whose attempts all fail yields a result with no content; it never stops
//! the rest of the batch.

use crate::crawler::fetcher::Fetcher;
use crate::crawler::formatter::to_markdown;
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};

/// Fetched content for one URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentResult {
    pub url: String,

    /// Markdown content; `None` when every fetch attempt failed
    pub content: Option<String>,
}

impl ContentResult {
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }
}

/// Fetches one URL and converts it to markdown
pub async fn acquire_one(fetcher: &Fetcher, url: &str) -> ContentResult {
    let content = match fetcher.fetch(url).await {
        Ok(body) => Some(to_markdown(&body)),
        Err(e) => {
            tracing::warn!("No content for {}: {}", url, e);
            None
        }
    };

    ContentResult {
        url: url.to_string(),
        content,
    }
}

/// Fetches every URL with at most `max_workers` requests in flight
///
/// The returned results are in completion order, not input order. Every URL gets
/// exactly one result, and all work has finished by the time this returns.
pub async fn acquire_all(fetcher: &Fetcher, urls: &[String], max_workers: usize) -> Vec<ContentResult> {
    let max_workers = max_workers.max(1);

    tracing::debug!(
        "Acquiring {} pages (max {} concurrent)",
        urls.len(),
        max_workers
    );

    stream::iter(urls)
        .map(|url| acquire_one(fetcher, url))
        .buffer_unordered(max_workers)
        .collect()
        .await
}

/// Fetches every URL one at a time, returning results in input order
pub async fn acquire_all_sequential(fetcher: &Fetcher, urls: &[String]) -> Vec<ContentResult> {
    let mut results = Vec::with_capacity(urls.len());
    for url in urls {
        results.push(acquire_one(fetcher, url).await);
    }
    results
}
