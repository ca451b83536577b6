//! Tinytalk - Text Summarization and Translation
//!
//! A linear pipeline around external pretrained models: extract text from a
//! document, measure it, normalize it to English, summarize it, translate
//! the summary, and report readability metrics alongside the result.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod summarize;
pub mod translate;
