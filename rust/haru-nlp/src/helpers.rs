//! Deterministic tagger fixtures for tests.
//!
//! A real morphological analyzer is an external process; tests of this
//! crate and its dependents instead use a [`TableTagger`] loaded with exact
//! analyses for the texts a test will feed it. Asking for a text the table
//! does not know is an error, which doubles as a fixture for the
//! token-source failure path.

use crate::error::TagError;
use crate::tag::Tag;
use crate::token::{Tagger, Token};
use std::collections::HashMap;

/// A tagger backed by a table of canned analyses.
#[derive(Debug, Clone, Default)]
pub struct TableTagger {
    entries: HashMap<String, Vec<Token>>,
}

impl TableTagger {
    /// An empty table; every lookup fails until entries are added.
    pub fn new() -> Self {
        TableTagger::default()
    }

    /// Add an analysis for `text`, given as `(surface, tag code)` pairs.
    pub fn with(mut self, text: &str, morphemes: &[(&str, &str)]) -> Self {
        self.entries.insert(
            text.trim().to_string(),
            morphemes
                .iter()
                .map(|(surface, code)| Token::new(*surface, Tag::from_code(code)))
                .collect(),
        );
        self
    }
}

impl Tagger for TableTagger {
    fn tag(&self, text: &str) -> Result<Vec<Token>, TagError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }
        self.entries
            .get(text)
            .cloned()
            .ok_or_else(|| TagError::NoAnalysis(text.to_string()))
    }
}
