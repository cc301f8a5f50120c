//! Markdown digest generation
//!
//! Combines the content of every fetched page into one markdown document, headed by
//! the instruction and run metadata.

use crate::output::report::{OutputResult, ScrapeReport};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a markdown digest of a scrape report
pub fn generate_markdown_digest(report: &ScrapeReport, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_digest(report);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a scrape report as a markdown document
pub fn format_markdown_digest(report: &ScrapeReport) -> String {
    let mut md = String::new();

    md.push_str("# Sumi-Gather Results\n\n");

    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Instruction**: {}\n", report.instruction));
    md.push_str(&format!("- **Seed URL**: {}\n", report.seed_url));
    md.push_str(&format!("- **Started**: {}\n", report.started_at.to_rfc3339()));
    md.push_str(&format!(
        "- **Duration**: {} seconds\n",
        report.duration_seconds()
    ));
    md.push_str(&format!(
        "- **Pages visited**: {} ({} failed)\n",
        report.pages_visited, report.pages_failed
    ));
    md.push_str(&format!("- **URLs discovered**: {}\n", report.discovered.len()));
    md.push_str(&format!("- **URLs selected**: {}\n", report.relevant.len()));
    md.push_str(&format!(
        "- **Pages with content**: {}\n\n",
        report.with_content()
    ));

    if report.results.is_empty() {
        md.push_str("_No relevant pages were found._\n");
        return md;
    }

    for result in &report.results {
        md.push_str("---\n\n");
        md.push_str(&format!("## {}\n\n", result.url));
        match &result.content {
            Some(content) => {
                md.push_str(content.trim());
                md.push_str("\n\n");
            }
            None => md.push_str("_Content could not be fetched._\n\n"),
        }
    }

    md
}
