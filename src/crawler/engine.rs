//! Crawl engine - depth-bounded link discovery
//!
//! The engine walks a site depth-first from a seed URL, fetching each page once and
//! collecting every link it finds. Only link targets are gathered here; page content
//! is fetched later by the acquirer for the subset the relevance oracle selects.
//!
//! # Depth
//!
//! The seed sits at depth 0 and links found on a page at depth `d` sit at `d + 1`.
//! A page is fetched only while its depth is at most `max_depth`, so with
//! `max_depth = 0` the seed is the only page fetched and its links are discovered
//! but never explored.

use crate::crawler::fetcher::Fetcher;
use crate::crawler::parser::parse_html;
use std::collections::HashSet;
use url::Url;

/// Ordered set of discovered URLs
///
/// Insertion deduplicates eagerly and keeps first-discovery order.
#[derive(Debug, Clone, Default)]
pub struct DiscoveredLinks {
    order: Vec<Url>,
    seen: HashSet<Url>,
}

impl DiscoveredLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a URL, returning false if it was already present
    pub fn insert(&mut self, url: Url) -> bool {
        if self.seen.contains(&url) {
            return false;
        }
        self.seen.insert(url.clone());
        self.order.push(url);
        true
    }

    pub fn contains(&self, url: &Url) -> bool {
        self.seen.contains(url)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// URL strings in discovery order
    pub fn to_strings(&self) -> Vec<String> {
        self.order.iter().map(|u| u.to_string()).collect()
    }
}

impl FromIterator<Url> for DiscoveredLinks {
    fn from_iter<I: IntoIterator<Item = Url>>(iter: I) -> Self {
        let mut links = Self::new();
        for url in iter {
            links.insert(url);
        }
        links
    }
}

/// Traversal state owned by a single crawl invocation
///
/// Nothing outside the invocation touches it, so independent crawls never share a
/// visited set.
#[derive(Debug)]
pub struct CrawlState {
    max_depth: u32,
    visited: HashSet<Url>,
    visit_order: Vec<Url>,
    discovered: DiscoveredLinks,
    failed_pages: usize,
}

impl CrawlState {
    pub fn new(max_depth: u32) -> Self {
        Self {
            max_depth,
            visited: HashSet::new(),
            visit_order: Vec::new(),
            discovered: DiscoveredLinks::new(),
            failed_pages: 0,
        }
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// The visit guard: within depth budget and not yet visited
    pub fn should_visit(&self, url: &Url, depth: u32) -> bool {
        depth <= self.max_depth && !self.visited.contains(url)
    }

    /// Marks a URL visited, returning false if it already was
    pub fn mark_visited(&mut self, url: Url) -> bool {
        if !self.visited.insert(url.clone()) {
            return false;
        }
        self.visit_order.push(url);
        true
    }

    /// Records links found on a page, skipping those already visited
    ///
    /// Returns the links that were not yet visited, in page order, for exploration.
    pub fn record_links(&mut self, links: Vec<Url>) -> Vec<Url> {
        let fresh: Vec<Url> = links
            .into_iter()
            .filter(|link| !self.visited.contains(link))
            .collect();

        for link in &fresh {
            self.discovered.insert(link.clone());
        }

        fresh
    }

    pub fn record_failure(&mut self) {
        self.failed_pages += 1;
    }

    pub fn into_outcome(self) -> CrawlOutcome {
        CrawlOutcome {
            discovered: self.discovered,
            visit_order: self.visit_order,
            failed_pages: self.failed_pages,
        }
    }
}

/// Result of a crawl
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    /// Every link discovered, deduplicated, in discovery order; never contains the seed
    pub discovered: DiscoveredLinks,

    /// Pages fetched, in depth-first visiting order
    pub visit_order: Vec<Url>,

    /// Pages whose fetch failed
    pub failed_pages: usize,
}

/// Crawls from `start_url`, discovering links up to `max_depth`
///
/// Traversal is depth-first in document order. An explicit stack stands in for
/// recursion: children are pushed in reverse so the first link on a page is explored
/// (with its whole subtree) before the second. The visit guard is checked when a URL
/// is popped, so a link reached through an earlier sibling's subtree is skipped.
///
/// A page that fails to fetch contributes no links; the crawl continues.
///
/// # Example
///
/// ```no_run
/// use sumi_gather::config::DEFAULT_USER_AGENT;
/// use sumi_gather::crawler::{build_http_client, crawl, Fetcher};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = Fetcher::new(build_http_client(DEFAULT_USER_AGENT)?, 3);
/// let seed = Url::parse("https://example.com/")?;
/// let outcome = crawl(&fetcher, &seed, 2).await;
/// println!("Discovered {} links", outcome.discovered.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(fetcher: &Fetcher, start_url: &Url, max_depth: u32) -> CrawlOutcome {
    let mut state = CrawlState::new(max_depth);
    let mut stack: Vec<(Url, u32)> = vec![(start_url.clone(), 0)];

    while let Some((url, depth)) = stack.pop() {
        if !state.should_visit(&url, depth) {
            continue;
        }
        state.mark_visited(url.clone());

        tracing::info!("Fetching links from: {} (depth: {})", url, depth);

        let body = match fetcher.fetch_once(url.as_str()).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Error fetching links from {}: {}", url, e);
                state.record_failure();
                continue;
            }
        };

        let page = parse_html(&body, &url);
        let found = page.links.len();
        let fresh = state.record_links(page.links);

        tracing::debug!(
            "{} ({}): {} links, {} not yet visited",
            url,
            page.title.as_deref().unwrap_or("untitled"),
            found,
            fresh.len()
        );

        let next_depth = depth + 1;
        if next_depth <= state.max_depth() {
            stack.extend(fresh.into_iter().rev().map(|link| (link, next_depth)));
        }
    }

    let outcome = state.into_outcome();
    tracing::info!(
        "Link discovery finished: {} pages visited, {} failed, {} links discovered",
        outcome.visit_order.len(),
        outcome.failed_pages,
        outcome.discovered.len()
    );
    outcome
}
