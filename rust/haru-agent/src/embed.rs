//! The embedding contract.
//!
//! Sentence embedding is an external collaborator (a Korean sentence
//! transformer behind a model server). This crate only depends on its
//! contract: a fixed-length, L2-normalized vector per phrase.

use crate::error::AgentError;
use async_trait::async_trait;

/// Maps an action phrase to a fixed-length, L2-normalized vector.
///
/// Implementations are expected to be deterministic per input text.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a phrase. Failure is propagated per phrase; there is no retry
    /// at this layer.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, AgentError>;
}

/// Cosine similarity of two vectors; 0.0 when either has no magnitude or
/// the dimensions disagree.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|y| y * y).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
