//! Crawler coordinator - main scrape orchestration logic
//!
//! This module sequences the three stages of a scrape:
//! - Link discovery from the seed URL
//! - Relevance filtering of the discovered URLs against the instruction
//! - Content acquisition for the relevant URLs
//!
//! Each stage consumes the previous stage's output, and none of them can abort the
//! run: a stage that fails degrades to an empty or partial result.

use crate::config::{resolve_api_key_from, Config, API_KEY_ENV};
use crate::crawler::acquirer::{acquire_all, acquire_all_sequential, ContentResult};
use crate::crawler::engine::{crawl, CrawlOutcome};
use crate::crawler::fetcher::Fetcher;
use crate::output::ScrapeReport;
use crate::relevance::{filter_relevant, OpenAiOracle, RelevanceOracle};
use crate::url::parse_seed_url;
use crate::GatherError;
use chrono::Utc;
use url::Url;

/// Main scrape coordinator structure
pub struct Coordinator {
    config: Config,
    seed: Url,
    fetcher: Fetcher,
    oracle: Box<dyn RelevanceOracle>,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The scrape configuration
    /// * `oracle` - The relevance oracle consulted between discovery and acquisition
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(GatherError)` - The seed URL is invalid or the HTTP client could not be built
    pub fn new(config: Config, oracle: Box<dyn RelevanceOracle>) -> Result<Self, GatherError> {
        let seed = parse_seed_url(&config.crawler.base_url)?;
        let fetcher = Fetcher::from_config(&config.crawler)?;

        Ok(Self {
            config,
            seed,
            fetcher,
            oracle,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn seed(&self) -> &Url {
        &self.seed
    }

    /// Runs link discovery only
    pub async fn discover(&self) -> CrawlOutcome {
        crawl(&self.fetcher, &self.seed, self.config.crawler.max_depth).await
    }

    /// Fetches content for the given URLs, concurrently or in order per configuration
    pub async fn acquire(&self, urls: &[String]) -> Vec<ContentResult> {
        if self.config.acquire.concurrent {
            acquire_all(&self.fetcher, urls, self.config.acquire.max_workers).await
        } else {
            acquire_all_sequential(&self.fetcher, urls).await
        }
    }

    /// Runs the full scrape for an instruction
    ///
    /// 1. Crawl from the seed URL and collect every discovered link
    /// 2. Ask the relevance oracle which links matter for the instruction
    /// 3. Fetch markdown content for the relevant links
    pub async fn run(&self, instruction: &str) -> ScrapeReport {
        let started_at = Utc::now();
        tracing::info!(
            "Starting scrape of {} (max depth {})",
            self.seed,
            self.config.crawler.max_depth
        );

        let outcome = self.discover().await;
        let candidates = outcome.discovered.to_strings();

        tracing::info!(
            "Ranking {} discovered URLs against instruction",
            candidates.len()
        );
        let relevant = filter_relevant(self.oracle.as_ref(), instruction, &candidates).await;
        tracing::info!("{} URLs selected as relevant", relevant.len());

        let results = self.acquire(&relevant).await;
        let fetched = results.iter().filter(|r| r.has_content()).count();
        tracing::info!(
            "Content acquired for {}/{} relevant URLs",
            fetched,
            results.len()
        );

        ScrapeReport {
            seed_url: self.seed.to_string(),
            instruction: instruction.to_string(),
            started_at,
            finished_at: Utc::now(),
            pages_visited: outcome.visit_order.len(),
            pages_failed: outcome.failed_pages,
            discovered: candidates,
            relevant,
            results,
        }
    }
}

/// Runs a complete scrape with the OpenAI relevance oracle
///
/// The oracle credential is resolved before anything is fetched, so a missing key
/// fails fast.
///
/// # Example
///
/// ```no_run
/// use sumi_gather::config::load_config;
/// use sumi_gather::crawler::run_scrape;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("gather.toml"))?;
/// let report = run_scrape(config, "Find the pricing for the team plan").await?;
/// println!("{} pages with content", report.results.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_scrape(config: Config, instruction: &str) -> Result<ScrapeReport, GatherError> {
    run_scrape_with_env(config, instruction, std::env::var(API_KEY_ENV).ok()).await
}

/// Runs a complete scrape with an explicit value standing in for `OPENAI_API_KEY`
pub async fn run_scrape_with_env(
    config: Config,
    instruction: &str,
    env_api_key: Option<String>,
) -> Result<ScrapeReport, GatherError> {
    let api_key = resolve_api_key_from(&config.oracle, env_api_key)?;
    let oracle = OpenAiOracle::from_config(&config.oracle, api_key)?;
    let coordinator = Coordinator::new(config, Box::new(oracle))?;
    Ok(coordinator.run(instruction).await)
}
