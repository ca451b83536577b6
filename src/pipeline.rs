//! Sequential summarization pipeline: validate, measure, normalize to
//! English, summarize, translate, measure again.
//!
//! One invocation is one request. Nothing persists across runs, the calls
//! run strictly in sequence, and every adapter failure surfaces here at the
//! single orchestration boundary without retries.

use tracing::info;

use crate::error::{Result, TinytalkError};
use crate::metrics::{compression_ratio, text_metrics, TextMetrics};
use crate::summarize::ModelStatus;
use crate::translate::Translator;

/// Per-invocation parameters supplied by the user.
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub min_length: u32,
    pub max_length: u32,
    pub target_language: String,
}

/// Everything the presentation layer renders for one request.
#[derive(Debug, Clone)]
pub struct SummaryOutcome {
    pub original_metrics: TextMetrics,
    /// Metrics of the English summary, computed before the final
    /// translation. Kept as the original behaved: when the input is not
    /// English these sit beside metrics of a different language.
    pub summary_metrics: TextMetrics,
    pub compression_ratio: f64,
    /// The English summary produced by the model.
    pub summary_text: String,
    /// The summary rendered in the requested target language.
    pub translated_text: String,
}

pub struct Pipeline {
    summarizer: ModelStatus,
    translator: Box<dyn Translator>,
}

impl Pipeline {
    pub fn new(summarizer: ModelStatus, translator: Box<dyn Translator>) -> Self {
        Self {
            summarizer,
            translator,
        }
    }

    /// Run the full pipeline for one text.
    pub async fn run(&self, text: &str, request: &SummaryRequest) -> Result<SummaryOutcome> {
        if text.trim().is_empty() {
            return Err(TinytalkError::EmptyInput);
        }

        let summarizer = match &self.summarizer {
            ModelStatus::Ready(summarizer) => summarizer,
            ModelStatus::Failed(diagnostic) => {
                return Err(TinytalkError::ModelUnavailable(diagnostic.clone()));
            }
        };

        let original_metrics = text_metrics(text);
        if original_metrics.word_count == 0 {
            // Punctuation-only input yields zero tokens and an undefined
            // compression ratio.
            return Err(TinytalkError::EmptyInput);
        }

        info!(
            "Original text: {} words, {} sentences, language {}",
            original_metrics.word_count,
            original_metrics.sentence_count,
            original_metrics.language
        );

        let english_input = self.translator.translate(text, "en").await?;

        info!(
            "Summarizing with bounds [{}, {}]",
            request.min_length, request.max_length
        );
        let summary_text = summarizer
            .summarize(&english_input, request.min_length, request.max_length)
            .await?;

        let translated_text = self
            .translator
            .translate(&summary_text, &request.target_language)
            .await?;

        let summary_metrics = text_metrics(&summary_text);
        let ratio = compression_ratio(original_metrics.word_count, summary_metrics.word_count);

        info!(
            "Summary: {} words, compression ratio {:.1}%",
            summary_metrics.word_count, ratio
        );

        Ok(SummaryOutcome {
            original_metrics,
            summary_metrics,
            compression_ratio: ratio,
            summary_text,
            translated_text,
        })
    }
}
