//! Relevance oracle implementations
//!
//! The oracle is a black box that takes a prompt and returns free text. The crate
//! ships an OpenAI chat-completions client; anything else can plug in through the
//! `RelevanceOracle` trait.

use crate::config::OracleConfig;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors from an oracle call
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("oracle request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("oracle returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid oracle API key")]
    InvalidKey,

    #[error("oracle response contained no message")]
    EmptyResponse,
}

/// A text-completion service that ranks URLs against an instruction
#[async_trait]
pub trait RelevanceOracle: Send + Sync {
    /// Sends one prompt and returns the raw text reply
    async fn complete(&self, prompt: &str) -> Result<String, OracleError>;
}

/// OpenAI chat-completions oracle
pub struct OpenAiOracle {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAiOracle {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, OracleError> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            endpoint: endpoint.into(),
        })
    }

    /// Builds an oracle from config and an already-resolved API key
    pub fn from_config(config: &OracleConfig, api_key: impl Into<String>) -> Result<Self, OracleError> {
        Self::new(api_key, config.model.clone(), config.endpoint.clone())
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl RelevanceOracle for OpenAiOracle {
    async fn complete(&self, prompt: &str) -> Result<String, OracleError> {
        let mut headers = HeaderMap::new();
        let auth = format!("Bearer {}", self.api_key.trim());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth).map_err(|_| OracleError::InvalidKey)?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(OracleError::Status { status, body });
        }

        let parsed: ChatResponse = resp.json().await?;
        parsed
            .choices
            .into_iter()
            .find_map(|choice| choice.message.content)
            .ok_or(OracleError::EmptyResponse)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}
