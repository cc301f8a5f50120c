//! Relevance filtering of discovered URLs
//!
//! This module handles:
//! - Rendering the instruction and candidate URLs into a single oracle prompt
//! - Calling the oracle once, without retry
//! - Parsing its free-text reply back into a list of URLs
//!
//! Every failure here is soft: an oracle error or an unparseable reply produces an
//! empty list, and the pipeline finishes with zero content results.

mod oracle;
mod parse;

pub use oracle::{OpenAiOracle, OracleError, RelevanceOracle};
pub use parse::parse_url_list;

use std::collections::HashSet;

/// A single request to the relevance oracle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevanceQuery {
    pub instruction: String,
    pub candidate_urls: Vec<String>,
}

impl RelevanceQuery {
    pub fn new(instruction: impl Into<String>, candidate_urls: Vec<String>) -> Self {
        Self {
            instruction: instruction.into(),
            candidate_urls,
        }
    }

    /// Renders the natural-language prompt sent to the oracle
    pub fn to_prompt(&self) -> String {
        let candidates = self
            .candidate_urls
            .iter()
            .map(|url| format!("'{}'", url.replace('\\', "\\\\").replace('\'', "\\'")))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Based on the given instructions: '{}', select the most relevant URLs which might \
             contain relevant information from the following list of URLs: [{}].\n\n\
             Return ONLY the URLs as a list. (Ex: ['url_1', 'url_2'])",
            self.instruction, candidates
        )
    }
}

/// Asks the oracle which candidates are relevant to the instruction
///
/// Returns the selected URLs in the oracle's order, trimmed and deduplicated, with
/// anything that is not an absolute http(s) URL dropped. An empty candidate list
/// returns immediately without an oracle call.
pub async fn filter_relevant(
    oracle: &dyn RelevanceOracle,
    instruction: &str,
    candidates: &[String],
) -> Vec<String> {
    if candidates.is_empty() {
        tracing::info!("No candidate URLs to rank; skipping relevance oracle");
        return Vec::new();
    }

    let query = RelevanceQuery::new(instruction, candidates.to_vec());

    let reply = match oracle.complete(&query.to_prompt()).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!("Relevance oracle failed, no URLs selected: {}", e);
            return Vec::new();
        }
    };

    match parse_url_list(&reply) {
        Some(urls) => clean_urls(urls),
        None => {
            tracing::warn!("Could not parse relevance oracle reply as a URL list: {:?}", reply);
            Vec::new()
        }
    }
}

fn clean_urls(urls: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();

    urls.into_iter()
        .map(|url| url.trim().to_string())
        .filter(|url| match crate::url::parse_seed_url(url) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("Dropping oracle entry {:?}: {}", url, e);
                false
            }
        })
        .filter(|url| seen.insert(url.clone()))
        .collect()
}
