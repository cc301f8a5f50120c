//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with a browser user agent string
//! - GET requests with bounded-attempt retry
//! - Error classification per attempt
//!
//! Retries are unconditional repeats: transport errors and 4xx/5xx statuses are
//! treated alike, with no backoff between attempts.

use crate::config::CrawlerConfig;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use thiserror::Error;

/// Maximum number of redirect hops followed per request
const MAX_REDIRECTS: usize = 10;

/// Why a single fetch attempt failed
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connect, TLS, timeout or body read failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a 4xx or 5xx status
    #[error("HTTP status {status}")]
    HttpStatus { status: u16 },
}

/// Every attempt for a URL failed
///
/// This is a reportable condition, not a crash: callers record the URL as having
/// no content and carry on.
#[derive(Debug, Error)]
#[error("failed to fetch {url} after {attempts} attempt(s): {last_error}")]
pub struct FetchFailed {
    /// The URL that could not be fetched
    pub url: String,

    /// Number of attempts made
    pub attempts: u32,

    /// Cause of the final attempt's failure
    pub last_error: FetchError,
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The User-Agent header sent with every request
///
/// # Example
///
/// ```no_run
/// use sumi_gather::config::DEFAULT_USER_AGENT;
/// use sumi_gather::crawler::build_http_client;
///
/// let client = build_http_client(DEFAULT_USER_AGENT).unwrap();
/// ```
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Issues GET requests with a fixed retry budget
///
/// A `Fetcher` holds no per-URL state, so a shared reference can be used from any
/// number of concurrent acquisition workers.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    retries: u32,
}

impl Fetcher {
    /// Creates a fetcher around an existing client
    ///
    /// A retry budget of zero is treated as one attempt.
    pub fn new(client: Client, retries: u32) -> Self {
        Self {
            client,
            retries: retries.max(1),
        }
    }

    /// Creates a fetcher from crawler configuration
    pub fn from_config(config: &CrawlerConfig) -> Result<Self, reqwest::Error> {
        let client = build_http_client(&config.user_agent)?;
        Ok(Self::new(client, config.retries))
    }

    /// Number of attempts `fetch` makes before giving up
    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// Fetches a URL body, retrying up to the configured budget
    pub async fn fetch(&self, url: &str) -> Result<String, FetchFailed> {
        self.fetch_with_retries(url, self.retries).await
    }

    /// Fetches a URL body with a single attempt
    ///
    /// Link discovery uses this: a page that fails once simply contributes no links.
    pub async fn fetch_once(&self, url: &str) -> Result<String, FetchFailed> {
        self.fetch_with_retries(url, 1).await
    }

    /// Fetches a URL body, making up to `max_retries` sequential attempts
    ///
    /// Each failed attempt is logged with the URL and its cause.
    pub async fn fetch_with_retries(
        &self,
        url: &str,
        max_retries: u32,
    ) -> Result<String, FetchFailed> {
        let max_retries = max_retries.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;

            match self.attempt(url).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    tracing::warn!(
                        "Error fetching {} (attempt {}/{}): {}",
                        url,
                        attempt,
                        max_retries,
                        e
                    );

                    if attempt >= max_retries {
                        return Err(FetchFailed {
                            url: url.to_string(),
                            attempts: attempt,
                            last_error: e,
                        });
                    }
                }
            }
        }
    }

    /// Performs one GET and reads the body
    async fn attempt(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
