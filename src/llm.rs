//! Ollama client for the local language-model endpoint
//!
//! This module provides HTTP client functionality for issuing text
//! completions against a locally hosted Ollama instance. Completions run
//! once, without retries or streaming; the request timeout is applied to
//! the HTTP client as a whole.

use crate::config::LlmConfig;
use crate::TripAiError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};

/// Completion request for the Ollama `/api/generate` endpoint
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerateOptions>,
}

/// Sampling options passed through to the model runtime
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Completion response from the Ollama `/api/generate` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
    pub done: bool,
    #[serde(default)]
    pub total_duration: Option<u64>,
    #[serde(default)]
    pub eval_count: Option<u32>,
}

/// Error payload returned by the Ollama API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// HTTP client for a local Ollama endpoint
pub struct OllamaClient {
    /// HTTP client
    client: reqwest::Client,
    /// Endpoint configuration
    config: LlmConfig,
}

impl OllamaClient {
    /// Create a new client for the configured endpoint
    pub fn new(config: LlmConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("TripAI/0.1.0")
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Model identifier this client completes with
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Issue a single completion and return the raw response text
    #[instrument(skip(self, prompt), fields(model = %self.config.model, prompt_len = prompt.len()))]
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/api/generate",
            self.config.base_url.trim_end_matches('/')
        );

        debug!("Requesting completion from {}", url);
        let start_time = Instant::now();

        let request = GenerateRequest {
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
            options: Some(GenerateOptions {
                temperature: Some(self.config.temperature),
            }),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to reach Ollama at {}: {}", self.config.base_url, e);
                TripAiError::llm(format!(
                    "Unable to reach Ollama at {}: {e}",
                    self.config.base_url
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            // Ollama reports unknown models with a 404 and a JSON error body
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body);

            error!("Ollama request failed with status {}: {}", status, detail);

            if status.as_u16() == 404 {
                return Err(TripAiError::llm(format!(
                    "Model '{}' is not available on the endpoint: {detail}",
                    self.config.model
                ))
                .into());
            }

            return Err(TripAiError::llm(format!(
                "Ollama request failed with status {status}: {detail}"
            ))
            .into());
        }

        let completion: GenerateResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Ollama response: {}", e);
            TripAiError::llm("Invalid completion payload received from Ollama")
        })?;

        let total_duration = start_time.elapsed();
        info!(
            "Completion of {} characters in {:.3}s",
            completion.response.len(),
            total_duration.as_secs_f64()
        );

        if !completion.done {
            warn!("Ollama returned a completion that is not marked done");
        }

        Ok(completion.response)
    }

    /// One test completion to confirm the endpoint is reachable.
    /// Any failure here is fatal to manager construction.
    pub async fn verify_connection(&self) -> Result<()> {
        info!(
            "Testing connection to Ollama at {} (model '{}')",
            self.config.base_url, self.config.model
        );

        self.generate("test")
            .await
            .with_context(|| "Ollama connection test failed")?;

        info!("Successfully connected to Ollama");
        Ok(())
    }
}
