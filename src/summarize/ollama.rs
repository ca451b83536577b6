use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SummarizerConfig;
use crate::error::{Result, TinytalkError};
use super::Summarizer;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequestBody {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub format: String,
    pub options: DecodingOptions,
}

/// Greedy decoding: temperature zero, generation capped at the maximum
/// summary length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodingOptions {
    pub temperature: f64,
    pub num_predict: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponseBody {
    pub response: String,
    pub done: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryPayload {
    pub summary: String,
}

/// Summarizer backed by a pretrained seq2seq model behind an Ollama-style
/// HTTP endpoint.
pub struct OllamaSummarizer {
    client: Client,
    config: SummarizerConfig,
}

impl OllamaSummarizer {
    pub fn new(config: SummarizerConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("HTTP client creation should not fail");

        Self { client, config }
    }

    fn build_summary_prompt(&self, text: &str, min_length: u32, max_length: u32) -> String {
        format!(
            "You are a professional summarizer.\n\
             \n\
             Summarize the following text in between {} and {} tokens.\n\
             Preserve the key facts and drop everything else.\n\
             \n\
             Return ONLY the summary in JSON format as {{\"summary\":\"your summary here\"}}.\n\
             Do not include any explanations or commentary.\n\
             \n\
             [Text to summarize]\n\
             {}\n",
            min_length, max_length, text
        )
    }
}

#[async_trait]
impl Summarizer for OllamaSummarizer {
    async fn summarize(&self, text: &str, min_length: u32, max_length: u32) -> Result<String> {
        let request = SummaryRequestBody {
            model: self.config.model.clone(),
            prompt: self.build_summary_prompt(text, min_length, max_length),
            stream: false,
            format: "json".to_string(),
            options: DecodingOptions {
                temperature: 0.0,
                num_predict: max_length,
            },
        };

        let url = format!("{}/api/generate", self.config.endpoint);

        debug!("Sending summarization request to: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| TinytalkError::Summarization(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(TinytalkError::Summarization(format!(
                "Model endpoint error {}: {}",
                status, error_text
            )));
        }

        let body: SummaryResponseBody = response
            .json()
            .await
            .map_err(|e| TinytalkError::Summarization(format!("Failed to parse response: {}", e)))?;

        let raw_response = body.response.trim().to_string();

        debug!("Raw model response: {}", raw_response);

        if raw_response.is_empty() {
            return Err(TinytalkError::Summarization("Empty summary received".to_string()));
        }

        if let Ok(payload) = serde_json::from_str::<SummaryPayload>(&raw_response) {
            return Ok(payload.summary.trim().to_string());
        }

        Ok(raw_response)
    }
}
