//! Error types for batch orchestration

use thiserror::Error;

/// Errors that can occur while running or publishing a batch
#[derive(Error, Debug)]
pub enum BatchError {
    /// The batch exceeds the configured document cap
    #[error("Too many documents: {0} (max: {1})")]
    TooManyDocuments(usize, usize),

    /// A batch worker task panicked or was cancelled
    #[error("Worker task failed: {0}")]
    Task(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
