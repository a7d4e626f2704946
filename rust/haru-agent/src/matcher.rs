//! Category matching — assigning each to-do a coarse life category.
//!
//! Every category carries one exemplar phrase; their embeddings are
//! computed once at construction. A to-do gets the category whose exemplar
//! is most cosine-similar to its own embedding, or [`Category::Other`]
//! when nothing clears the threshold.

use crate::embed::{Embedder, cosine_similarity};
use crate::error::AgentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// The coarse life categories a to-do can be filed under. Serialized with
/// the Korean labels the downstream product displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// 운동 — gym, walks, workouts.
    #[serde(rename = "운동")]
    Exercise,
    /// 공부 — studying, reading, lectures.
    #[serde(rename = "공부")]
    Study,
    /// 장보기 — groceries and errands.
    #[serde(rename = "장보기")]
    Shopping,
    /// 업무 — work tasks.
    #[serde(rename = "업무")]
    Work,
    /// 일상 — social plans and daily life.
    #[serde(rename = "일상")]
    Routine,
    /// 기타 — nothing matched confidently.
    #[serde(rename = "기타")]
    Other,
}

impl Category {
    /// The Korean display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Exercise => "운동",
            Category::Study => "공부",
            Category::Shopping => "장보기",
            Category::Work => "업무",
            Category::Routine => "일상",
            Category::Other => "기타",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Exemplar phrases embedded once at matcher construction. `Other` has no
/// exemplar; it is the below-threshold fallback.
const CATEGORY_EXEMPLARS: &[(Category, &str)] = &[
    (Category::Exercise, "헬스장 가기, 운동하기, 산책하기"),
    (Category::Study, "공부하기, 책 읽기, 강의 듣기"),
    (Category::Shopping, "마트 가기, 장보기, 식료품 사기"),
    (Category::Work, "업무하기, 보고서 쓰기, 회의 참여"),
    (Category::Routine, "친구 만나기, 부모님 댁 방문, 약속"),
];

/// Embedding-similarity category matcher with precomputed exemplars.
pub struct CategoryMatcher {
    exemplars: Vec<(Category, Vec<f32>)>,
    threshold: f32,
}

impl CategoryMatcher {
    /// Similarity below this never assigns a category.
    pub const DEFAULT_THRESHOLD: f32 = 0.5;

    /// Build a matcher with the default threshold, embedding every
    /// exemplar through `embedder`.
    pub async fn new(embedder: &dyn Embedder) -> Result<Self, AgentError> {
        Self::with_threshold(embedder, Self::DEFAULT_THRESHOLD).await
    }

    /// Build a matcher with an explicit similarity threshold.
    pub async fn with_threshold(
        embedder: &dyn Embedder,
        threshold: f32,
    ) -> Result<Self, AgentError> {
        let mut exemplars = Vec::with_capacity(CATEGORY_EXEMPLARS.len());
        for (category, phrase) in CATEGORY_EXEMPLARS {
            exemplars.push((*category, embedder.embed(phrase).await?));
        }
        Ok(CategoryMatcher {
            exemplars,
            threshold,
        })
    }

    /// Match a to-do embedding to the closest category, or `Other` when no
    /// exemplar clears the threshold.
    pub fn match_embedding(&self, embedding: &[f32]) -> Category {
        let mut assigned = Category::Other;
        let mut best = -1.0f32;
        for (category, exemplar) in &self.exemplars {
            let similarity = cosine_similarity(embedding, exemplar);
            if similarity > best && similarity >= self.threshold {
                best = similarity;
                assigned = *category;
            }
        }
        debug!(category = %assigned, similarity = best, "matched category");
        assigned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    /// Embeds known phrases from a table; anything else becomes the zero
    /// vector, which is dissimilar to everything.
    struct StubEmbedder(HashMap<&'static str, Vec<f32>>);

    #[async_trait]
    impl Embedder for StubEmbedder {
        async fn embed(&self, text: &str) -> Result<Vec<f32>, AgentError> {
            Ok(self.0.get(text).cloned().unwrap_or_else(|| vec![0.0; 3]))
        }
    }

    fn stub() -> StubEmbedder {
        StubEmbedder(HashMap::from([
            ("헬스장 가기, 운동하기, 산책하기", vec![1.0, 0.0, 0.0]),
            ("공부하기, 책 읽기, 강의 듣기", vec![0.0, 1.0, 0.0]),
            ("마트 가기, 장보기, 식료품 사기", vec![0.0, 0.0, 1.0]),
            ("업무하기, 보고서 쓰기, 회의 참여", vec![0.577, 0.577, 0.577]),
            ("친구 만나기, 부모님 댁 방문, 약속", vec![0.707, 0.707, 0.0]),
        ]))
    }

    #[tokio::test]
    async fn assigns_the_closest_exemplar_category() {
        let matcher = CategoryMatcher::new(&stub()).await.unwrap();
        assert_eq!(matcher.match_embedding(&[0.9, 0.1, 0.0]), Category::Exercise);
        assert_eq!(matcher.match_embedding(&[0.0, 0.95, 0.05]), Category::Study);
    }

    #[tokio::test]
    async fn below_threshold_falls_back_to_other() {
        let matcher = CategoryMatcher::new(&stub()).await.unwrap();
        assert_eq!(matcher.match_embedding(&[0.0, 0.0, 0.0]), Category::Other);
    }

    #[tokio::test]
    async fn threshold_is_configurable() {
        let matcher = CategoryMatcher::with_threshold(&stub(), 0.99).await.unwrap();
        // Close but not near-identical: the strict matcher refuses it.
        assert_eq!(matcher.match_embedding(&[0.9, 0.4, 0.0]), Category::Other);
        assert_eq!(matcher.match_embedding(&[1.0, 0.0, 0.0]), Category::Exercise);
    }

    #[test]
    fn category_serializes_as_its_korean_label() {
        assert_eq!(
            serde_json::to_value(Category::Shopping).unwrap(),
            serde_json::json!("장보기")
        );
        assert_eq!(Category::Other.to_string(), "기타");
    }
}
