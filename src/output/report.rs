//! Scrape report types and output errors

use crate::crawler::ContentResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Everything one scrape produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeReport {
    pub seed_url: String,
    pub instruction: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// Pages fetched during link discovery
    pub pages_visited: usize,

    /// Discovery fetches that failed
    pub pages_failed: usize,

    /// Every discovered URL, in discovery order
    pub discovered: Vec<String>,

    /// URLs the relevance oracle selected
    pub relevant: Vec<String>,

    /// One result per relevant URL
    pub results: Vec<ContentResult>,
}

impl ScrapeReport {
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }

    pub fn with_content(&self) -> usize {
        self.results.iter().filter(|r| r.has_content()).count()
    }

    pub fn without_content(&self) -> usize {
        self.results.len() - self.with_content()
    }
}
