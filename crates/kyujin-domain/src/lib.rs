//! Kyujin Domain Layer
//!
//! Core data model for the job-posting extraction pipeline. This crate
//! defines the shapes every other layer depends upon and the trait seams
//! for infrastructure (LLM providers, draft/live stores).
//!
//! ## Key Concepts
//!
//! - **ExtractedJobData**: the flat, optional-heavy payload an extraction
//!   model returns for one document
//! - **RoutedJob**: the same data after employment-type routing, with
//!   exactly one variant block (dispatch or fulltime) populated
//! - **DraftJob**: an extracted-but-unpublished posting awaiting review
//! - **Job**: a published, live posting
//! - **WorkArea**: a free-text or structured work location
//!
//! Infrastructure implementations live in other crates; this crate stays
//! pure data and trait definitions.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod area;
pub mod category;
pub mod draft;
pub mod employment;
pub mod job;
pub mod tags;
pub mod traits;
pub mod validation;

// Re-exports for convenience
pub use area::WorkArea;
pub use category::CanonicalJobCategory;
pub use draft::{DraftId, DraftJob, ExtractionStatus, TagMappingSets};
pub use employment::{
    detect_employment_type, route, unroute, DispatchFields, EmploymentType, FulltimeFields,
    VariantFields,
};
pub use job::{Document, ExtractedJobData, Job, RoutedJob};
pub use tags::{MainCategory, TagMappingResult, TagMatch};
pub use traits::{DraftStore, JobStore, LlmProvider};
pub use validation::{has_errors, ValidationLevel, ValidationResult};
