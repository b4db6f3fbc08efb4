//! Kyujin Master Data
//!
//! The hierarchical master taxonomy of standardized posting labels
//! (tags, benefits, holidays, requirements) and the matcher that
//! reconciles extracted free-text tags against it.
//!
//! The built-in hierarchy mirrors the production master data; a
//! deployment can override the flat lists from a TOML file without
//! recompiling.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod hierarchy;
pub mod matcher;
pub mod taxonomy;

pub use error::MastersError;
pub use hierarchy::{find_category_by_label, flat_labels, sub_categories};
pub use matcher::{match_tag, match_tags, reconcile};
pub use taxonomy::MasterTaxonomy;
