//! Kyujin Extractor
//!
//! The per-document extraction pipeline: prompt construction for the
//! structured-extraction model, strict response parsing, compensation
//! recovery, taxonomy reconciliation, validation, employment-type
//! routing, and draft assembly.
//!
//! The model call itself stays behind the `LlmProvider` trait from
//! `kyujin-domain`; this crate never performs network I/O.
//!
//! # Examples
//!
//! ```
//! use kyujin_extractor::{ExtractionMode, ExtractorConfig, JobExtractor};
//! use kyujin_llm::MockProvider;
//! use kyujin_masters::MasterTaxonomy;
//! use kyujin_domain::Document;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let provider = MockProvider::new(r#"{"title":"事務スタッフ"}"#);
//! let extractor = JobExtractor::new(provider, ExtractorConfig::default());
//!
//! let document = Document::text("posting.pdf", "求人票の本文");
//! let draft = extractor
//!     .extract(&document, ExtractionMode::Standard, &MasterTaxonomy::default())
//!     .await
//!     .unwrap();
//! assert_eq!(draft.display_title(), "事務スタッフ");
//! # });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod extractor;
pub mod parser;
pub mod prompt;
pub mod refine;

pub use config::ExtractorConfig;
pub use error::{ExtractorError, ParseError};
pub use extractor::{calculate_ai_confidence, JobExtractor};
pub use parser::parse_response;
pub use prompt::{build_full_prompt, build_mode_prompt, build_system_instruction, ExtractionMode};
pub use refine::{apply_refinement, check_refinement, resolve_target_fields};
