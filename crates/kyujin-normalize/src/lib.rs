//! Kyujin Normalizers
//!
//! Pure, synchronous canonicalization functions for extracted postings:
//!
//! - **area**: free-text prefecture normalization and display-area text
//! - **category**: canonical job category derivation (alias + keyword scoring)
//! - **compensation**: regex-heuristic backfill of salary-related fields
//! - **summary**: posting-header summary helpers (holiday/benefit/salary labels)
//! - **tags**: automatic appeal-tag generation from routed job data
//!
//! Everything here is side-effect free and safe to run concurrently per
//! document.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod area;
pub mod category;
pub mod compensation;
pub mod summary;
pub mod tags;

pub use area::{
    build_display_area_text, build_display_area_text_with_address,
    build_display_area_text_with_limit, get_display_area_prefectures, normalize_prefecture,
};
pub use category::derive_primary_job_category;
pub use compensation::recover_compensation_fields;
pub use summary::{
    build_header_summary, infer_holiday_notes, infer_holiday_pattern, monthly_salary_label,
    parse_list_field, pick_core_benefits, HeaderSummary, HeaderSummaryInput,
};
pub use tags::{generate_auto_tags, merge_job_tags};
