//! Sumi-Gather main entry point
//!
//! This is the command-line interface for the Sumi-Gather site harvester.

use clap::Parser;
use std::path::PathBuf;
use sumi_gather::config::{load_config_with_hash, resolve_api_key, validate, Config};
use sumi_gather::crawler::run_scrape;
use sumi_gather::output::{print_statistics, write_outputs, ScrapeStatistics};
use tracing_subscriber::EnvFilter;

/// Sumi-Gather: an instruction-guided site harvester
///
/// Sumi-Gather crawls a site from its seed URL, asks a language model which
/// of the discovered pages matter for your instruction, and saves those
/// pages as markdown.
#[derive(Parser, Debug)]
#[command(name = "sumi-gather")]
#[command(version = "1.0.0")]
#[command(about = "An instruction-guided site harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// What to look for, in plain language
    #[arg(value_name = "INSTRUCTION")]
    instruction: String,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Override the seed URL from the configuration
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Override the maximum crawl depth
    #[arg(long, value_name = "DEPTH")]
    max_depth: Option<u32>,

    /// Fetch relevant pages one at a time, in order
    #[arg(long)]
    sequential: bool,

    /// Override the results file path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // A missing .env is fine; the key may come from config or the real environment
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (mut config, config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => (cfg, hash),
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    apply_overrides(&mut config, &cli);
    if let Err(e) = validate(&config) {
        tracing::error!("Invalid configuration after command-line overrides: {}", e);
        return Err(e.into());
    }
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_scrape(config, &cli.instruction, cli.quiet).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sumi_gather=info,warn"),
            1 => EnvFilter::new("sumi_gather=debug,info"),
            2 => EnvFilter::new("sumi_gather=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Applies command-line overrides on top of the file configuration
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(base_url) = &cli.base_url {
        config.crawler.base_url = base_url.clone();
    }
    if let Some(max_depth) = cli.max_depth {
        config.crawler.max_depth = max_depth;
    }
    if cli.sequential {
        config.acquire.concurrent = false;
    }
    if let Some(output) = &cli.output {
        config.output.results_path = output.display().to_string();
    }
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== Sumi-Gather Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Seed URL: {}", config.crawler.base_url);
    println!("  Max depth: {}", config.crawler.max_depth);
    println!("  Retries per page: {}", config.crawler.retries);
    println!("  User agent: {}", config.crawler.user_agent);

    println!("\nAcquisition:");
    if config.acquire.concurrent {
        println!("  Mode: concurrent ({} workers)", config.acquire.max_workers);
    } else {
        println!("  Mode: sequential");
    }

    println!("\nRelevance Oracle:");
    println!("  Model: {}", config.oracle.model);
    println!("  Endpoint: {}", config.oracle.endpoint);
    match resolve_api_key(&config.oracle) {
        Ok(_) => println!("  Credential: found"),
        Err(e) => println!("  Credential: MISSING ({})", e),
    }

    println!("\nOutput:");
    println!("  Results: {}", config.output.results_path);
    if let Some(summary) = &config.output.summary_path {
        println!("  Digest: {}", summary);
    }
    if let Some(report) = &config.output.report_path {
        println!("  Report: {}", report);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main scrape operation
async fn handle_scrape(
    config: Config,
    instruction: &str,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_config = config.output.clone();

    let report = match run_scrape(config, instruction).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            return Err(e.into());
        }
    };

    write_outputs(&report, &output_config)?;

    if !quiet {
        print_statistics(&ScrapeStatistics::from_report(&report));
    }

    Ok(())
}
