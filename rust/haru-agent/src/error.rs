//! Error types for the agent layer.

use haru_nlp::NlpError;
use thiserror::Error;

/// The common error type used by this crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    /// The extraction pipeline failed for the whole input.
    #[error("Extraction failed: {0}")]
    Nlp(#[from] NlpError),

    /// The embedding collaborator failed for one phrase.
    #[error("Embedding failed: {0}")]
    Embedding(String),

    /// The todo store collaborator failed.
    #[error("Todo store failed: {0}")]
    Store(String),
}
