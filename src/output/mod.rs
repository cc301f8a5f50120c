//! Output module for scrape results
//!
//! This module handles:
//! - Writing the `{url, content}` results as JSON
//! - Writing the full scrape report as JSON
//! - Generating a combined markdown document of the fetched pages
//! - Summarizing scrape statistics

mod markdown;
mod report;
pub mod stats;

pub use markdown::{format_markdown_digest, generate_markdown_digest};
pub use report::{OutputError, OutputResult, ScrapeReport};
pub use stats::{print_statistics, ScrapeStatistics};

use crate::config::OutputConfig;
use crate::crawler::ContentResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes content results as a pretty-printed JSON array
///
/// Each entry is `{"url": ..., "content": ...}` with `content` null for URLs that
/// could not be fetched.
pub fn write_results_json(results: &[ContentResult], output_path: &Path) -> OutputResult<()> {
    write_json(results, output_path)
}

/// Writes the whole scrape report as pretty-printed JSON
pub fn write_report_json(report: &ScrapeReport, output_path: &Path) -> OutputResult<()> {
    write_json(report, output_path)
}

/// Writes every output the configuration asks for
///
/// The results file is always written; the markdown digest and the full report only
/// when their paths are set.
pub fn write_outputs(report: &ScrapeReport, config: &OutputConfig) -> OutputResult<()> {
    let results_path = Path::new(&config.results_path);
    write_results_json(&report.results, results_path)?;
    tracing::info!("Results saved to {}", results_path.display());

    if let Some(summary_path) = config.summary_path.as_deref().map(Path::new) {
        generate_markdown_digest(report, summary_path)?;
        tracing::info!("Markdown digest saved to {}", summary_path.display());
    }

    if let Some(report_path) = config.report_path.as_deref().map(Path::new) {
        write_report_json(report, report_path)?;
        tracing::info!("Run report saved to {}", report_path.display());
    }

    Ok(())
}

fn write_json<T: serde::Serialize + ?Sized>(value: &T, output_path: &Path) -> OutputResult<()> {
    let mut writer = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
