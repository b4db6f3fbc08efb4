//! Kyujin LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `kyujin-domain`.
//! The extraction pipeline never talks to a model API directly; it goes
//! through this seam so tests can run fully offline.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GeminiProvider`: Google Generative Language API integration
//!
//! # Examples
//!
//! ```
//! use kyujin_llm::MockProvider;
//! use kyujin_domain::{Document, LlmProvider};
//!
//! let provider = MockProvider::new(r#"{"title":"テスト求人"}"#);
//! let document = Document::text("posting.txt", "求人票の本文");
//! let result = provider.generate("extract", &document).unwrap();
//! assert_eq!(result, r#"{"title":"テスト求人"}"#);
//! ```

#![warn(missing_docs)]

pub mod gemini;

use kyujin_domain::traits::LlmProvider as LlmProviderTrait;
use kyujin_domain::Document;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::GeminiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the model API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses keyed by document name without making
/// any network calls.
///
/// # Examples
///
/// ```
/// use kyujin_llm::MockProvider;
/// use kyujin_domain::{Document, LlmProvider};
///
/// let mut provider = MockProvider::new("{}");
/// provider.add_response("a.txt", r#"{"title":"求人A"}"#);
///
/// let doc = Document::text("a.txt", "本文");
/// assert_eq!(provider.generate("p", &doc).unwrap(), r#"{"title":"求人A"}"#);
///
/// let other = Document::text("b.txt", "本文");
/// assert_eq!(provider.generate("p", &other).unwrap(), "{}");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all documents
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given document name
    pub fn add_response(&mut self, document_name: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(document_name.into(), response.into());
    }

    /// Configure an error for a specific document name
    pub fn add_error(&mut self, document_name: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(document_name.into(), "ERROR".to_string());
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("{}")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, _prompt: &str, document: &Document) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(&document.name) {
            if response == "ERROR" {
                return Err(LlmError::Other("Mock error".to_string()));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}
