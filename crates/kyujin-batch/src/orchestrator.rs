//! Multi-document batch extraction
//!
//! Runs up to the configured cap of documents through the extraction
//! pipeline concurrently. Documents are independent: one failure never
//! aborts the batch, it materializes as an error draft carrying the
//! failure reason. The taxonomy snapshot is taken once so every document
//! reconciles against the same vocabulary even if an administrator edits
//! the masters mid-batch.

use crate::config::BatchConfig;
use crate::error::BatchError;
use kyujin_domain::traits::LlmProvider;
use kyujin_domain::{
    route, Document, DraftId, DraftJob, ExtractedJobData, ExtractionStatus, TagMappingSets,
};
use kyujin_extractor::{ExtractionMode, JobExtractor};
use kyujin_masters::MasterTaxonomy;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Drives one batch of documents through extraction into drafts
pub struct BatchOrchestrator<L>
where
    L: LlmProvider,
{
    extractor: Arc<JobExtractor<L>>,
    config: BatchConfig,
}

impl<L> BatchOrchestrator<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create an orchestrator around an extraction pipeline
    pub fn new(extractor: JobExtractor<L>, config: BatchConfig) -> Self {
        Self {
            extractor: Arc::new(extractor),
            config,
        }
    }

    /// Run one batch, returning drafts in input order.
    ///
    /// Every document yields exactly one draft; extraction failures
    /// become error drafts titled after the source file with the failure
    /// reason as a warning.
    pub async fn run(
        &self,
        documents: Vec<Document>,
        mode: ExtractionMode,
        taxonomy: MasterTaxonomy,
    ) -> Result<Vec<DraftJob>, BatchError> {
        if documents.len() > self.config.max_documents {
            return Err(BatchError::TooManyDocuments(documents.len(), self.config.max_documents));
        }

        info!(documents = documents.len(), "Starting batch extraction");

        // Snapshot shared across all workers for this batch
        let taxonomy = Arc::new(taxonomy);
        let mut tasks = JoinSet::new();

        for (index, document) in documents.into_iter().enumerate() {
            let extractor = Arc::clone(&self.extractor);
            let taxonomy = Arc::clone(&taxonomy);

            tasks.spawn(async move {
                let draft = match extractor.extract(&document, mode, &taxonomy).await {
                    Ok(draft) => draft,
                    Err(e) => {
                        warn!(document = %document.name, error = %e, "Extraction failed");
                        error_draft(&document, e.to_string())
                    }
                };
                (index, draft)
            });
        }

        let mut drafts: Vec<(usize, DraftJob)> = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            drafts.push(joined.map_err(|e| BatchError::Task(e.to_string()))?);
        }
        drafts.sort_by_key(|(index, _)| *index);

        let errors = drafts
            .iter()
            .filter(|(_, d)| d.extraction_status == ExtractionStatus::Error)
            .count();
        info!(total = drafts.len(), errors, "Batch extraction complete");

        Ok(drafts.into_iter().map(|(_, draft)| draft).collect())
    }
}

/// Placeholder draft for a document whose extraction failed
fn error_draft(document: &Document, reason: String) -> DraftJob {
    DraftJob {
        id: DraftId::new(),
        source_name: document.name.clone(),
        routed: route(ExtractedJobData::default()),
        tag_mappings: TagMappingSets::default(),
        validation: Vec::new(),
        extraction_status: ExtractionStatus::Error,
        extraction_warnings: vec![reason],
        ai_confidence: 0,
        created_at: chrono::Utc::now().to_rfc3339(),
    }
}
