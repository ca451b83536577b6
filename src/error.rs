use thiserror::Error;

#[derive(Error, Debug)]
pub enum TinytalkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Summarization error: {0}")]
    Summarization(String),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Summarization model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("No text to process")]
    EmptyInput,

    #[error("Document error: {0}")]
    Document(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, TinytalkError>;
