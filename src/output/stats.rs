//! Statistics for a finished scrape
//!
//! This module provides functionality for summarizing and displaying the counts
//! of a scrape report.

use crate::output::report::ScrapeReport;

/// Scrape statistics summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeStatistics {
    /// Pages fetched during link discovery
    pub pages_visited: usize,

    /// Discovery fetches that failed
    pub pages_failed: usize,

    /// Distinct URLs discovered
    pub discovered: usize,

    /// URLs the relevance oracle selected
    pub relevant: usize,

    /// Relevant URLs whose content was fetched
    pub with_content: usize,

    /// Relevant URLs whose fetch attempts all failed
    pub without_content: usize,
}

impl ScrapeStatistics {
    pub fn from_report(report: &ScrapeReport) -> Self {
        Self {
            pages_visited: report.pages_visited,
            pages_failed: report.pages_failed,
            discovered: report.discovered.len(),
            relevant: report.relevant.len(),
            with_content: report.with_content(),
            without_content: report.without_content(),
        }
    }

    /// Share of relevant URLs that produced content, as a percentage
    pub fn success_rate(&self) -> f64 {
        let total = self.with_content + self.without_content;
        if total > 0 {
            (self.with_content as f64 / total as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &ScrapeStatistics) {
    println!("=== Scrape Statistics ===\n");

    println!("Discovery:");
    println!("  Pages visited: {}", stats.pages_visited);
    println!("  Pages failed: {}", stats.pages_failed);
    println!("  URLs discovered: {}", stats.discovered);
    println!();

    println!("Relevance:");
    println!("  URLs selected: {}", stats.relevant);
    println!();

    println!(
        "Success Rate: {:.1}% ({} / {} pages with content)",
        stats.success_rate(),
        stats.with_content,
        stats.with_content + stats.without_content
    );
}
