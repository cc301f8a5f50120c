use serde::Deserialize;

/// Browser user agent sent with every page request; some servers reject bot-like agents
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_5) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/84.0.4147.89 Safari/537.36";

/// Environment variable consulted when the config carries no oracle key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

pub const DEFAULT_ORACLE_MODEL: &str = "gpt-4o-mini";

pub const DEFAULT_ORACLE_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Main configuration structure for Sumi-Gather
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub acquire: AcquireConfig,
    #[serde(default)]
    pub oracle: OracleConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Builds a configuration with every option at its default, seeded at `base_url`
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            crawler: CrawlerConfig {
                base_url: base_url.into(),
                max_depth: default_max_depth(),
                retries: default_retries(),
                user_agent: default_user_agent(),
            },
            acquire: AcquireConfig::default(),
            oracle: OracleConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Link discovery configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Seed URL the crawl starts from (depth 0)
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Deepest level below the seed whose pages are fetched
    #[serde(rename = "max-depth", default = "default_max_depth")]
    pub max_depth: u32,

    /// Attempts per content fetch before giving up on a URL
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Content acquisition configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AcquireConfig {
    /// Fetch relevant pages concurrently; sequential and ordered when false
    #[serde(default = "default_concurrent")]
    pub concurrent: bool,

    /// Maximum number of in-flight content fetches
    #[serde(rename = "max-workers", default = "default_max_workers")]
    pub max_workers: usize,
}

impl Default for AcquireConfig {
    fn default() -> Self {
        Self {
            concurrent: default_concurrent(),
            max_workers: default_max_workers(),
        }
    }
}

/// Relevance oracle configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OracleConfig {
    /// API key; `OPENAI_API_KEY` is used when absent
    #[serde(rename = "api-key", default)]
    pub api_key: Option<String>,

    /// Chat model used for relevance ranking
    #[serde(default = "default_model")]
    pub model: String,

    /// Chat-completions endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            endpoint: default_endpoint(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the JSON results file
    #[serde(rename = "results-path", default = "default_results_path")]
    pub results_path: String,

    /// Optional path of a combined markdown document of every fetched page
    #[serde(rename = "summary-path", default)]
    pub summary_path: Option<String>,

    /// Optional path of the full run report as JSON
    #[serde(rename = "report-path", default)]
    pub report_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: default_results_path(),
            summary_path: None,
            report_path: None,
        }
    }
}

fn default_max_depth() -> u32 {
    2
}

fn default_retries() -> u32 {
    3
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_concurrent() -> bool {
    true
}

fn default_max_workers() -> usize {
    5
}

fn default_model() -> String {
    DEFAULT_ORACLE_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ORACLE_ENDPOINT.to_string()
}

fn default_results_path() -> String {
    "./results.json".to_string()
}
