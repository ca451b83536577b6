use std::time::Duration;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TranslateConfig;
use crate::error::{Result, TinytalkError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub response: String,
    pub done: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    pub text: String,
}

/// Base translator with the shared HTTP and prompt plumbing.
pub struct BaseTranslator {
    pub client: Client,
    pub config: TranslateConfig,
}

impl BaseTranslator {
    pub fn new(config: TranslateConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("HTTP client creation should not fail");

        Self { client, config }
    }

    /// Perform the actual translation using the model endpoint with JSON format.
    pub async fn translate_text(&self, text: &str, target_language: &str) -> Result<String> {
        let prompt = self.build_translation_prompt(text, target_language);

        let request = TranslationRequest {
            model: self.config.model.clone(),
            prompt,
            stream: false,
            format: "json".to_string(),
        };

        let url = format!("{}/api/generate", self.config.endpoint);

        debug!("Sending translation request to: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| TinytalkError::Translation(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(TinytalkError::Translation(format!(
                "Translation endpoint error {}: {}",
                status, error_text
            )));
        }

        let translation_response: TranslationResponse = response
            .json()
            .await
            .map_err(|e| TinytalkError::Translation(format!("Failed to parse response: {}", e)))?;

        let raw_response = translation_response.response.trim().to_string();

        debug!("Raw translation response: {}", raw_response);

        if raw_response.is_empty() {
            return Err(TinytalkError::Translation("Empty translation received".to_string()));
        }

        if let Ok(result) = serde_json::from_str::<TranslationResult>(&raw_response) {
            return Ok(result.text.trim().to_string());
        }

        Ok(self.clean_translation_response(&raw_response))
    }

    /// Build a translation prompt; the model detects the source language.
    pub fn build_translation_prompt(&self, text: &str, target_language: &str) -> String {
        let language_name = language_code_to_name(target_language);

        format!(
            "You are a professional translator.\n\
             \n\
             Detect the source language of the text automatically.\n\
             CRITICAL: You must translate the text to {} ONLY. Do not translate to any other language.\n\
             The target language is: {} (language code: {})\n\
             \n\
             Return ONLY the translation in JSON format as {{\"text\":\"your {} translation here\"}}.\n\
             Do not include any explanations, alternatives, or text in other languages.\n\
             \n\
             [Text to translate]\n\
             {}\n",
            language_name, language_name, target_language, language_name, text
        )
    }

    /// Clean up a non-JSON response to extract just the translation.
    fn clean_translation_response(&self, response: &str) -> String {
        for line in response.lines() {
            let trimmed = line.trim();

            if trimmed.is_empty() {
                continue;
            }

            if trimmed.starts_with("Here")
                || trimmed.starts_with("Translation:")
                || trimmed.starts_with("- ")
                || trimmed.starts_with("* ")
                || (trimmed.starts_with("**") && trimmed.ends_with("**"))
            {
                continue;
            }

            if trimmed.len() > 3 {
                return trimmed.to_string();
            }
        }

        response.trim().to_string()
    }
}

/// Convert a language code to a full language name for clearer prompts.
pub fn language_code_to_name(code: &str) -> String {
    match code.to_lowercase().as_str() {
        "en" => "English".to_string(),
        "ta" => "Tamil".to_string(),
        "hi" => "Hindi".to_string(),
        "fr" => "French".to_string(),
        "es" => "Spanish".to_string(),
        _ => isolang::Language::from_639_1(code)
            .map(|lang| lang.to_name().to_string())
            .unwrap_or_else(|| code.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_language_names() {
        assert_eq!(language_code_to_name("en"), "English");
        assert_eq!(language_code_to_name("ta"), "Tamil");
        assert_eq!(language_code_to_name("es"), "Spanish");
        assert_eq!(language_code_to_name("zz"), "zz");
    }

    #[test]
    fn test_prompt_names_target_language() {
        let base = BaseTranslator::new(Config::default().translate);
        let prompt = base.build_translation_prompt("bonjour", "es");
        assert!(prompt.contains("Spanish"));
        assert!(prompt.contains("language code: es"));
        assert!(prompt.contains("Detect the source language"));
        assert!(prompt.contains("bonjour"));
    }

    #[test]
    fn test_clean_response_skips_preamble() {
        let base = BaseTranslator::new(Config::default().translate);
        let cleaned = base.clean_translation_response(
            "Here is the translation:\nTranslation:\nHola mundo",
        );
        assert_eq!(cleaned, "Hola mundo");
    }

    #[test]
    fn test_result_parsing() {
        let raw = r#"{"text":" Hola mundo "}"#;
        let result: TranslationResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.text.trim(), "Hola mundo");
    }
}
