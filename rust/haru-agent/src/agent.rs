//! The agent — wiring extraction to its collaborators.
//!
//! Per utterance: run the extraction pipeline, then for each record embed
//! the phrase, match a category and persist it. Recommendations are
//! attached only after every record of the utterance is saved, so sibling
//! to-dos from one input can recommend each other.

use crate::embed::Embedder;
use crate::error::AgentError;
use crate::matcher::{Category, CategoryMatcher};
use crate::store::{Recommendation, StoredTodo, TodoStore};
use chrono::{Local, NaiveDate};
use haru_nlp::{Pipeline, Tagger, TaskRecord};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// One fully decorated to-do, ready for the API boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedTodo {
    /// The user the utterance belongs to.
    pub user_id: String,
    /// The assigned life category.
    pub category: Category,
    /// The extracted record (phrase, date, time, source clause).
    #[serde(flatten)]
    pub record: TaskRecord,
    /// The phrase's embedding.
    pub embedding: Vec<f32>,
    /// Related to-dos from the user's history.
    pub recommendations: Vec<Recommendation>,
}

/// Extraction pipeline plus its collaborators, composed once and shared.
pub struct TodoAgent<T: Tagger> {
    pipeline: Pipeline<T>,
    embedder: Arc<dyn Embedder>,
    matcher: CategoryMatcher,
    store: Arc<dyn TodoStore>,
}

impl<T: Tagger> TodoAgent<T> {
    /// Compose an agent; embeds the category exemplars up front.
    pub async fn new(
        tagger: T,
        embedder: Arc<dyn Embedder>,
        store: Arc<dyn TodoStore>,
    ) -> Result<Self, AgentError> {
        let matcher = CategoryMatcher::new(embedder.as_ref()).await?;
        Ok(TodoAgent {
            pipeline: Pipeline::new(tagger),
            embedder,
            matcher,
            store,
        })
    }

    /// Process an utterance against the local calendar.
    pub async fn process(
        &self,
        user_id: &str,
        text: &str,
    ) -> Result<Vec<ProcessedTodo>, AgentError> {
        self.process_on(user_id, text, Local::now().date_naive())
            .await
    }

    /// Process an utterance with an injected `today`; deterministic given a
    /// deterministic tagger, embedder and store.
    pub async fn process_on(
        &self,
        user_id: &str,
        text: &str,
        today: NaiveDate,
    ) -> Result<Vec<ProcessedTodo>, AgentError> {
        let records = self.pipeline.process_on(text, today)?;
        debug!(records = records.len(), "extracted records");

        let mut todos = Vec::with_capacity(records.len());
        for record in records {
            let embedding = self.embedder.embed(&record.action_phrase).await?;
            let category = self.matcher.match_embedding(&embedding);
            self.store
                .save(StoredTodo {
                    user_id: user_id.to_string(),
                    action_phrase: record.action_phrase.clone(),
                    embedding: embedding.clone(),
                    date: record.date.clone(),
                })
                .await?;
            todos.push(ProcessedTodo {
                user_id: user_id.to_string(),
                category,
                record,
                embedding,
                recommendations: Vec::new(),
            });
        }

        for todo in &mut todos {
            todo.recommendations = self
                .store
                .recommend(user_id, &todo.record.action_phrase, &todo.embedding)
                .await?;
        }

        Ok(todos)
    }
}
