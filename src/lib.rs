//! Sumi-Gather: an instruction-guided site harvester
//!
//! This crate crawls a website from a seed URL, asks a relevance oracle which of the
//! discovered pages matter for a natural-language instruction, and fetches those pages
//! as markdown.

pub mod config;
pub mod crawler;
pub mod output;
pub mod relevance;
pub mod url;

use thiserror::Error;

/// Main error type for Sumi-Gather operations
#[derive(Debug, Error)]
pub enum GatherError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Relevance oracle error: {0}")]
    Oracle(#[from] relevance::OracleError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Missing oracle credential: set [oracle] api-key or the {0} environment variable")]
    MissingCredential(&'static str),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for Sumi-Gather operations
pub type Result<T> = std::result::Result<T, GatherError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{ContentResult, Coordinator, DiscoveredLinks};
pub use output::ScrapeReport;
pub use relevance::{OpenAiOracle, RelevanceOracle};
pub use crate::url::{parse_seed_url, resolve_href};
