//! Oracle credential resolution
//!
//! The key comes from `[oracle] api-key` when present, otherwise from the process
//! environment. Resolution happens before any crawling so a missing key fails fast.

use crate::config::types::{OracleConfig, API_KEY_ENV};
use crate::ConfigError;

/// Resolves the oracle API key from config or the process environment
pub fn resolve_api_key(config: &OracleConfig) -> Result<String, ConfigError> {
    resolve_api_key_from(config, std::env::var(API_KEY_ENV).ok())
}

/// Resolves the oracle API key with an explicit environment value
///
/// Blank values count as absent.
pub fn resolve_api_key_from(
    config: &OracleConfig,
    env_value: Option<String>,
) -> Result<String, ConfigError> {
    config
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .or_else(|| {
            env_value
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty())
        })
        .ok_or(ConfigError::MissingCredential(API_KEY_ENV))
}
