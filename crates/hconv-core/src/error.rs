//! Fatal, converter-level errors.
//!
//! Per-line problems never show up here: a line that cannot be classified is
//! routed to the raw bucket instead.

use thiserror::Error;

/// Errors that abort a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The aggregated mapping could not be serialized.
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The classifier or one of the collectors panicked or was cancelled.
    #[error("pipeline task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
