#![warn(missing_docs)]

//! # haru-agent — composition over the extraction core
//!
//! [`haru_nlp`] turns an utterance into bare task records; this crate
//! decorates them for the product: an embedding per phrase, a life
//! category via exemplar similarity, persistence, and recommendations
//! mined from the user's history.
//!
//! The embedding model and the production vector store are external
//! collaborators; this crate holds their contracts ([`Embedder`],
//! [`TodoStore`]) and an in-memory reference store.

pub mod agent;
pub mod embed;
pub mod error;
pub mod matcher;
pub mod store;

pub use agent::{ProcessedTodo, TodoAgent};
pub use embed::{Embedder, cosine_similarity};
pub use error::AgentError;
pub use matcher::{Category, CategoryMatcher};
pub use store::{MemoryTodoStore, Recommendation, StoredTodo, TodoStore};
