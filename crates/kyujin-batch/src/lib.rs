//! Kyujin Batch Orchestration
//!
//! Multi-document extraction batches, advisory duplicate detection, and
//! draft publication.
//!
//! A batch accepts up to ten documents, runs each through the
//! per-document extraction pipeline concurrently, and materializes one
//! draft per document regardless of failures. Publication converts
//! reviewed drafts into live postings, re-validating each payload and
//! reporting per-item failures without aborting the rest.
//!
//! # Examples
//!
//! ```
//! use kyujin_batch::{BatchConfig, BatchOrchestrator};
//! use kyujin_extractor::{ExtractionMode, ExtractorConfig, JobExtractor};
//! use kyujin_llm::MockProvider;
//! use kyujin_masters::MasterTaxonomy;
//! use kyujin_domain::Document;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let provider = MockProvider::new(r#"{"title":"事務スタッフ"}"#);
//! let extractor = JobExtractor::new(provider, ExtractorConfig::default());
//! let orchestrator = BatchOrchestrator::new(extractor, BatchConfig::default());
//!
//! let drafts = orchestrator
//!     .run(
//!         vec![Document::text("posting.pdf", "求人票の本文")],
//!         ExtractionMode::Standard,
//!         MasterTaxonomy::default(),
//!     )
//!     .await
//!     .unwrap();
//! assert_eq!(drafts.len(), 1);
//! # });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod duplicate;
pub mod error;
pub mod orchestrator;
pub mod publish;
pub mod store;

pub use config::BatchConfig;
pub use duplicate::{DuplicateDetector, DuplicateMatch, DuplicateVerdict};
pub use error::BatchError;
pub use orchestrator::BatchOrchestrator;
pub use publish::{publish, DuplicateFlag, PublishOutcome};
pub use store::{MemoryDraftStore, MemoryJobStore, StoreError};
