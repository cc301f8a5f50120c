//! Configuration module for Sumi-Gather
//!
//! This module handles loading, parsing, and validating TOML configuration files,
//! and resolving the relevance oracle credential.
//!
//! # Example
//!
//! ```no_run
//! use sumi_gather::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("gather.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod credential;
mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    AcquireConfig, Config, CrawlerConfig, OracleConfig, OutputConfig, API_KEY_ENV,
    DEFAULT_ORACLE_ENDPOINT, DEFAULT_ORACLE_MODEL, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use credential::{resolve_api_key, resolve_api_key_from};
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
