//! Crawler module for link discovery and content acquisition
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching with retry logic
//! - HTML parsing and link extraction
//! - Depth-bounded link discovery
//! - Bounded concurrent content acquisition
//! - Overall scrape coordination

mod acquirer;
mod coordinator;
mod engine;
mod fetcher;
pub mod formatter;
mod parser;

pub use acquirer::{acquire_all, acquire_all_sequential, acquire_one, ContentResult};
pub use coordinator::{run_scrape, run_scrape_with_env, Coordinator};
pub use engine::{crawl, CrawlOutcome, CrawlState, DiscoveredLinks};
pub use fetcher::{build_http_client, FetchError, FetchFailed, Fetcher};
pub use parser::{extract_links, parse_html, ParsedPage};
