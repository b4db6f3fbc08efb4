//! Per-document extraction pipeline
//!
//! Drives one document through prompt construction, the model call,
//! response parsing, compensation recovery, taxonomy reconciliation,
//! validation, and employment-type routing, producing a [`DraftJob`]
//! ready for operator review.

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_response;
use crate::prompt::{build_full_prompt, ExtractionMode};
use kyujin_domain::traits::LlmProvider;
use kyujin_domain::{
    route, Document, DraftId, DraftJob, ExtractedJobData, ExtractionStatus, ValidationLevel,
};
use kyujin_masters::{reconcile, MasterTaxonomy};
use kyujin_normalize::{derive_primary_job_category, merge_job_tags, recover_compensation_fields};
use kyujin_validator::JobValidator;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info};

/// Heuristic extraction confidence, deducted from 100 per missing field
pub fn calculate_ai_confidence(data: &ExtractedJobData) -> u8 {
    let mut score: i32 = 100;

    if !ExtractedJobData::has_text(&data.title) {
        score -= 30;
    }
    if !ExtractedJobData::has_text(&data.area) {
        score -= 20;
    }
    if !ExtractedJobData::has_text(&data.salary) {
        score -= 20;
    }
    if !ExtractedJobData::has_text(&data.description) {
        score -= 10;
    }
    if !ExtractedJobData::has_text(&data.employment_type) {
        score -= 5;
    }
    if data.tags.is_empty() {
        score -= 5;
    }
    if data.requirements.is_empty() {
        score -= 5;
    }

    score.clamp(0, 100) as u8
}

/// The extraction pipeline for one document
pub struct JobExtractor<L>
where
    L: LlmProvider,
{
    provider: Arc<L>,
    validator: JobValidator,
    config: ExtractorConfig,
}

impl<L> JobExtractor<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new extractor around an LLM provider
    pub fn new(provider: L, config: ExtractorConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            validator: JobValidator::default_config(),
            config,
        }
    }

    /// Extract one document into a draft posting.
    ///
    /// The taxonomy snapshot is passed in by the caller so every document
    /// of a batch reconciles against the same vocabulary.
    pub async fn extract(
        &self,
        document: &Document,
        mode: ExtractionMode,
        taxonomy: &MasterTaxonomy,
    ) -> Result<DraftJob, ExtractorError> {
        if document.text.len() > self.config.max_text_length {
            return Err(ExtractorError::TextTooLong(
                document.text.len(),
                self.config.max_text_length,
            ));
        }

        info!(
            document = %document.name,
            text_length = document.text.len(),
            "Starting extraction"
        );

        let prompt = build_full_prompt(mode, taxonomy);
        debug!(prompt_length = prompt.len(), "Prompt built");

        let response = timeout(
            self.config.extraction_timeout(),
            self.call_provider(&prompt, document),
        )
        .await
        .map_err(|_| ExtractorError::Timeout)??;

        debug!(response_length = response.len(), "Model responded");

        let data = parse_response(&response)?;
        let mut data = recover_compensation_fields(data);

        if !ExtractedJobData::has_text(&data.category) {
            data.category = Some(derive_primary_job_category(&data).as_str().to_string());
        }

        let tag_mappings = reconcile(&data, taxonomy);
        let validation = self.validator.validate(&data);
        let ai_confidence = calculate_ai_confidence(&data);
        let (extraction_status, extraction_warnings) = self.derive_status(&data, ai_confidence);

        let mut routed = route(data);
        routed.data.tags = merge_job_tags(&routed);

        info!(
            document = %document.name,
            status = ?extraction_status,
            confidence = ai_confidence,
            validation_errors = validation
                .iter()
                .filter(|r| r.level == ValidationLevel::Error)
                .count(),
            "Extraction complete"
        );

        Ok(DraftJob {
            id: DraftId::new(),
            source_name: document.name.clone(),
            routed,
            tag_mappings,
            validation,
            extraction_status,
            extraction_warnings,
            ai_confidence,
            created_at: chrono::Utc::now().to_rfc3339(),
        })
    }

    /// Status and operator-facing warnings for an extracted payload
    fn derive_status(
        &self,
        data: &ExtractedJobData,
        confidence: u8,
    ) -> (ExtractionStatus, Vec<String>) {
        let mut warnings = Vec::new();

        if !ExtractedJobData::has_text(&data.title) {
            warnings.push("タイトルが抽出されませんでした".to_string());
        }
        if !ExtractedJobData::has_text(&data.area) {
            warnings.push("勤務地が抽出されませんでした".to_string());
        }
        if !ExtractedJobData::has_text(&data.salary) {
            warnings.push("給与が抽出されませんでした".to_string());
        }
        if confidence < self.config.confidence_warning_threshold {
            warnings.push("抽出精度が低いです。確認してください。".to_string());
        }

        let status = if warnings.is_empty() {
            ExtractionStatus::Success
        } else {
            ExtractionStatus::Warning
        };
        (status, warnings)
    }

    async fn call_provider(
        &self,
        prompt: &str,
        document: &Document,
    ) -> Result<String, ExtractorError> {
        let provider = Arc::clone(&self.provider);
        let prompt = prompt.to_string();
        let document = document.clone();

        // The provider trait is synchronous; run it off the async runtime
        tokio::task::spawn_blocking(move || {
            provider
                .generate(&prompt, &document)
                .map_err(|e| ExtractorError::Llm(e.to_string()))
        })
        .await
        .map_err(|e| ExtractorError::Llm(format!("Task join error: {}", e)))?
    }
}
