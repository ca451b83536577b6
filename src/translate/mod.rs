// Translation adapter over an external model endpoint.
//
// The source language is auto-detected by the model; callers only name the
// target. Used twice per pipeline run: once to normalize arbitrary-language
// input to English before summarization, once to render the English summary
// into the requested output language.

pub mod common;
pub mod ollama;

use async_trait::async_trait;

pub use common::*;
use crate::config::TranslateConfig;
use crate::error::Result;

/// Main trait for translation operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate text into the target language, auto-detecting the source.
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String>;
}

/// Factory for creating translator instances.
pub struct TranslatorFactory;

impl TranslatorFactory {
    pub fn create(config: TranslateConfig) -> Box<dyn Translator> {
        Box::new(ollama::OllamaTranslator::new(config))
    }
}
