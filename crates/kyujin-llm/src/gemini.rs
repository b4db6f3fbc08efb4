//! Gemini Provider Implementation
//!
//! Integration with the Google Generative Language API used for
//! structured extraction.
//!
//! # Features
//!
//! - Async HTTP communication with the generateContent endpoint
//! - Configurable endpoint and model
//! - Retry logic with exponential backoff
//! - Timeout handling and token-usage logging
//!
//! # Examples
//!
//! ```no_run
//! use kyujin_llm::GeminiProvider;
//!
//! let provider = GeminiProvider::new("api-key", "gemini-2.0-flash");
//! // The async generate method needs an async context; the LlmProvider
//! // trait impl offers a blocking wrapper.
//! ```

use crate::LlmError;
use kyujin_domain::traits::LlmProvider as LlmProviderTrait;
use kyujin_domain::Document;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default Generative Language API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default timeout for extraction requests (90 seconds; documents are long)
pub const DEFAULT_TIMEOUT_SECS: u64 = 90;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Gemini API provider for structured extraction
pub struct GeminiProvider {
    endpoint: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
    max_retries: u32,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

#[derive(Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount", default)]
    prompt_token_count: u32,
    #[serde(rename = "candidatesTokenCount", default)]
    candidates_token_count: u32,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    ///
    /// # Parameters
    ///
    /// - `api_key`: Generative Language API key
    /// - `model`: Model to use (e.g., "gemini-2.0-flash")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            model: model.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Override the API endpoint (proxies, regional endpoints)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Run an extraction prompt against one document
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Network communication fails after all retries
    /// - The model name is unknown to the API
    /// - The rate limit is exceeded
    /// - The response shape is invalid
    pub async fn generate(&self, prompt: &str, document: &Document) -> Result<String, LlmError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part { text: prompt.to_string() },
                    Part { text: document.text.clone() },
                ],
            }],
        };

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.post(&url).json(&request_body).send().await {
                Ok(response) => {
                    if response.status().is_success() {
                        return self.parse_response(response, document).await;
                    } else if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    } else if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        warn!(document = %document.name, "Gemini rate limit hit, backing off");
                        last_error = Some(LlmError::RateLimitExceeded);
                    } else {
                        let status = response.status();
                        let error_text =
                            response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
                        last_error =
                            Some(LlmError::Communication(format!("HTTP {}: {}", status, error_text)));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, ...
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error.unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }

    async fn parse_response(
        &self,
        response: reqwest::Response,
        document: &Document,
    ) -> Result<String, LlmError> {
        let parsed = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                document = %document.name,
                prompt_tokens = usage.prompt_token_count,
                response_tokens = usage.candidates_token_count,
                "Gemini extraction completed"
            );
        }

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| LlmError::InvalidResponse("Response contained no candidates".to_string()))
    }
}

impl LlmProviderTrait for GeminiProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str, document: &Document) -> Result<String, Self::Error> {
        // Blocking wrapper for async function
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(async { self.generate(prompt, document).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_provider_creation() {
        let provider = GeminiProvider::new("key", "gemini-2.0-flash");
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(provider.model, "gemini-2.0-flash");
        assert_eq!(provider.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_gemini_provider_builders() {
        let provider = GeminiProvider::new("key", "gemini-2.0-flash")
            .with_endpoint("http://localhost:8080/v1beta")
            .with_max_retries(5);
        assert_eq!(provider.endpoint, "http://localhost:8080/v1beta");
        assert_eq!(provider.max_retries, 5);
    }

    #[tokio::test]
    async fn test_gemini_error_handling() {
        // Unroutable endpoint to trigger a communication error
        let provider = GeminiProvider::new("key", "gemini-2.0-flash")
            .with_endpoint("http://127.0.0.1:9/v1beta")
            .with_max_retries(1);

        let document = Document::text("a.txt", "本文");
        let result = provider.generate("prompt", &document).await;

        match result {
            Err(LlmError::Communication(_)) => {}
            other => panic!("Expected Communication error, got {:?}", other.map(|_| ())),
        }
    }
}
