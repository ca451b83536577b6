// Summarization adapter over a pretrained sequence-to-sequence model served
// behind an HTTP endpoint.
//
// The model is probed exactly once at process start. The probe result is an
// explicit ModelStatus handle passed through the orchestration layer: either
// a ready summarizer, or a permanently-degraded state whose diagnostic is
// replayed on every request. No lazy global state, no per-call retry.

pub mod ollama;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::{info, warn};

use crate::config::SummarizerConfig;
use crate::error::{Result, TinytalkError};

/// Main trait for summarization operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize English text to between `min_length` and `max_length`
    /// tokens using greedy decoding.
    async fn summarize(&self, text: &str, min_length: u32, max_length: u32) -> Result<String>;
}

/// Outcome of the one-time model acquisition at process start.
pub enum ModelStatus {
    /// The model answered the availability probe and is ready for use.
    Ready(Box<dyn Summarizer>),
    /// The probe failed; every summarization request fails fast with this
    /// diagnostic for the remainder of the process lifetime.
    Failed(String),
}

/// Factory for acquiring the summarization model once per process.
pub struct SummarizerFactory;

impl SummarizerFactory {
    pub async fn initialize(config: SummarizerConfig) -> ModelStatus {
        match check_model_availability(&config.endpoint, &config.model).await {
            Ok(()) => ModelStatus::Ready(Box::new(ollama::OllamaSummarizer::new(config))),
            Err(e) => {
                warn!("Summarization model unavailable: {}", e);
                ModelStatus::Failed(e.to_string())
            }
        }
    }
}

/// Check that the endpoint is reachable and serves the requested model.
pub async fn check_model_availability(endpoint: &str, model: &str) -> Result<()> {
    let client = Client::new();
    let url = format!("{}/api/show", endpoint);

    let request = json!({
        "name": model
    });

    let response = client
        .post(&url)
        .json(&request)
        .send()
        .await
        .map_err(|e| TinytalkError::Summarization(format!("Failed to connect to model endpoint: {}", e)))?;

    if response.status().is_success() {
        info!("Summarization model '{}' is available", model);
        Ok(())
    } else {
        Err(TinytalkError::Summarization(format!(
            "Model '{}' not found at {}. Please make sure the endpoint serves it and try again",
            model, endpoint
        )))
    }
}
