//! Error types for the extraction pipeline

use thiserror::Error;

/// Errors that can occur while turning one document into a draft
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error
    #[error("LLM provider error: {0}")]
    Llm(String),

    /// Document text exceeds the configured limit
    #[error("Document text too long: {0} characters (max: {1})")]
    TextTooLong(usize, usize),

    /// Extraction timed out
    #[error("Extraction timed out")]
    Timeout,

    /// The model response could not be parsed into a payload
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors from parsing the model's raw text response
#[derive(Error, Debug)]
pub enum ParseError {
    /// No JSON object could be located in the response text
    #[error("Response contains no JSON object")]
    NoJson,

    /// The located JSON failed to deserialize into the payload shape
    #[error("Invalid payload JSON: {0}")]
    Json(#[from] serde_json::Error),
}
