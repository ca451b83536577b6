use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::error::{Result, TinytalkError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub summarizer: SummarizerConfig,
    pub translate: TranslateConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Endpoint serving the pretrained summarization model
    pub endpoint: String,
    /// Model name to request from the endpoint
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Translation endpoint URL
    pub endpoint: String,
    /// Model to use for translation
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Filename for the plain-text summary artifact
    pub summary_filename: String,
    /// Filename for the single-page HTML report
    pub report_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summarizer: SummarizerConfig {
                endpoint: "http://localhost:11434".to_string(),
                model: "distilbart-cnn-12-6".to_string(),
                timeout_secs: 300,
            },
            translate: TranslateConfig {
                endpoint: "http://localhost:11434".to_string(),
                model: "llama3.2:3b".to_string(),
                timeout_secs: 300,
            },
            output: OutputConfig {
                summary_filename: "summary.txt".to_string(),
                report_filename: "report.html".to_string(),
            },
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TinytalkError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| TinytalkError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TinytalkError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| TinytalkError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}
