//! Error types for the extraction pipeline.

use thiserror::Error;

/// Errors produced by a [`Tagger`](crate::token::Tagger) implementation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagError {
    /// The tagging backend could not be reached or failed mid-call.
    #[error("Tagging backend failed: {0}")]
    Backend(String),

    /// The backend produced no analysis for the given text.
    #[error("No analysis available for input: {0}")]
    NoAnalysis(String),
}

/// The common error type used by this crate.
///
/// Everything past tokenization is best-effort: unresolvable dates pass
/// through, empty phrases fall back to the verbatim clause, degenerate
/// records are filtered. Only a token-source failure aborts an input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NlpError {
    /// The token source failed; the whole input is abandoned with no
    /// partial result. Retrying is the caller's decision.
    #[error("Token source failed: {0}")]
    Tagger(#[from] TagError),
}
