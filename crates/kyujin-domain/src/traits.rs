//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates.

use crate::draft::{DraftId, DraftJob};
use crate::job::{Document, Job};

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (kyujin-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Run the extraction prompt against one document and return the
    /// model's raw text response
    fn generate(&self, prompt: &str, document: &Document) -> Result<String, Self::Error>;
}

/// Trait for storing drafts awaiting review
///
/// Implemented by the application layer (kyujin-batch)
pub trait DraftStore {
    /// Error type for store operations
    type Error;

    /// Persist a new draft
    fn save_draft(&mut self, draft: DraftJob) -> Result<DraftId, Self::Error>;

    /// Get a draft by id
    fn get_draft(&self, id: DraftId) -> Result<Option<DraftJob>, Self::Error>;

    /// List all pending drafts
    fn list_drafts(&self) -> Result<Vec<DraftJob>, Self::Error>;

    /// Remove a draft (after publish or explicit discard)
    fn delete_draft(&mut self, id: DraftId) -> Result<(), Self::Error>;
}

/// Trait for the live posting store
///
/// Implemented by the application layer (kyujin-batch)
pub trait JobStore {
    /// Error type for store operations
    type Error;

    /// Insert a published posting
    fn insert_job(&mut self, job: Job) -> Result<(), Self::Error>;

    /// List all live postings
    fn list_jobs(&self) -> Result<Vec<Job>, Self::Error>;
}
