use async_trait::async_trait;
use tracing::info;

use crate::config::TranslateConfig;
use crate::error::Result;
use super::{common::BaseTranslator, Translator};

/// Translator backed by an LLM behind an Ollama-style HTTP endpoint.
pub struct OllamaTranslator {
    base: BaseTranslator,
}

impl OllamaTranslator {
    pub fn new(config: TranslateConfig) -> Self {
        Self {
            base: BaseTranslator::new(config),
        }
    }
}

#[async_trait]
impl Translator for OllamaTranslator {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String> {
        info!("Translating {} characters to {}", text.len(), target_lang);
        self.base.translate_text(text, target_lang).await
    }
}
