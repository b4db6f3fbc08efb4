//! Master data error types

use thiserror::Error;

/// Errors that can occur loading master data
#[derive(Error, Debug)]
pub enum MastersError {
    /// Failed to read a taxonomy file
    #[error("Failed to read taxonomy file: {0}")]
    Io(#[from] std::io::Error),

    /// Taxonomy file is not valid TOML
    #[error("Failed to parse taxonomy file: {0}")]
    Parse(#[from] toml::de::Error),
}
