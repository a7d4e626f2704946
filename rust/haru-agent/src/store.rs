//! The todo store contract and an in-memory reference implementation.
//!
//! The production store is an external vector database; this crate depends
//! only on the narrow contract below. [`MemoryTodoStore`] implements the
//! same recommendation rules in memory for tests and single-process use.
//!
//! Recommendations merge two signals:
//! - **co-occurrence**: to-dos recorded on the same day as the query's
//!   nearest neighbours, counted once per neighbour;
//! - **similarity**: neighbours whose embedding is close to the query's.
//!
//! Anything whose combined count clears the minimum frequency is returned,
//! most frequent first.

use crate::embed::cosine_similarity;
use crate::error::AgentError;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One persisted to-do: who, what, when, and its embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredTodo {
    /// The owning user.
    pub user_id: String,
    /// The extracted action phrase.
    pub action_phrase: String,
    /// The phrase's embedding.
    pub embedding: Vec<f32>,
    /// The resolved date (`YYYY-MM-DD`).
    pub date: String,
}

/// One recommended to-do with its combined signal count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The recommended action phrase.
    pub action_phrase: String,
    /// How many frequency/similarity signals backed it.
    pub frequency: u32,
}

/// The store contract consumed by the agent.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Persist one to-do.
    async fn save(&self, todo: StoredTodo) -> Result<(), AgentError>;

    /// Recommend to-dos for `user_id` related to the given phrase and
    /// embedding, most relevant first.
    async fn recommend(
        &self,
        user_id: &str,
        action_phrase: &str,
        embedding: &[f32],
    ) -> Result<Vec<Recommendation>, AgentError>;
}

/// In-memory reference store implementing the recommendation rules.
pub struct MemoryTodoStore {
    items: Mutex<Vec<StoredTodo>>,
    neighbour_limit: usize,
    min_frequency: u32,
    min_similarity: f32,
}

impl Default for MemoryTodoStore {
    fn default() -> Self {
        MemoryTodoStore {
            items: Mutex::new(Vec::new()),
            neighbour_limit: 5,
            min_frequency: 2,
            min_similarity: 0.8,
        }
    }
}

impl MemoryTodoStore {
    /// An empty store with the default thresholds (5 neighbours, count ≥ 2,
    /// similarity ≥ 0.8).
    pub fn new() -> Self {
        MemoryTodoStore::default()
    }

    /// An empty store with explicit thresholds.
    pub fn with_thresholds(min_frequency: u32, min_similarity: f32) -> Self {
        MemoryTodoStore {
            min_frequency,
            min_similarity,
            ..MemoryTodoStore::default()
        }
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn save(&self, todo: StoredTodo) -> Result<(), AgentError> {
        self.items.lock().push(todo);
        Ok(())
    }

    async fn recommend(
        &self,
        user_id: &str,
        action_phrase: &str,
        embedding: &[f32],
    ) -> Result<Vec<Recommendation>, AgentError> {
        let items = self.items.lock();
        let user_items: Vec<&StoredTodo> =
            items.iter().filter(|t| t.user_id == user_id).collect();

        // Nearest neighbours of the query among the user's own history.
        let mut neighbours: Vec<(&StoredTodo, f32)> = user_items
            .iter()
            .map(|t| (*t, cosine_similarity(embedding, &t.embedding)))
            .collect();
        neighbours.sort_by(|a, b| {
            b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal)
        });
        neighbours.truncate(self.neighbour_limit);

        let mut counts: HashMap<&str, u32> = HashMap::new();

        // Co-occurrence: everything done on a neighbour's day counts.
        for (neighbour, _) in &neighbours {
            for item in &user_items {
                if item.date == neighbour.date && item.action_phrase != action_phrase {
                    *counts.entry(item.action_phrase.as_str()).or_default() += 1;
                }
            }
        }

        // Similarity: close neighbours count once more.
        for (neighbour, similarity) in &neighbours {
            if *similarity >= self.min_similarity && neighbour.action_phrase != action_phrase {
                *counts.entry(neighbour.action_phrase.as_str()).or_default() += 1;
            }
        }

        let mut recommendations: Vec<Recommendation> = counts
            .into_iter()
            .filter(|(_, count)| *count >= self.min_frequency)
            .map(|(phrase, frequency)| Recommendation {
                action_phrase: phrase.to_string(),
                frequency,
            })
            .collect();
        recommendations.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| a.action_phrase.cmp(&b.action_phrase))
        });
        Ok(recommendations)
    }
}
