//! The extraction pipeline — raw utterance in, task records out.
//!
//! ```text
//! text → Tagger → split_clauses → per clause:
//!   lexicon overlay → classify/extract → date carry-over → noise filter
//! ```
//!
//! The pipeline owns no mutable state. The date carry-over accumulator
//! lives on the stack of one `process_on` call, so concurrent invocations
//! sharing one `Pipeline` (and its tagger) cannot observe each other.

use crate::error::NlpError;
use crate::extract::extract;
use crate::filter;
use crate::lexicon::Lexicon;
use crate::record::TaskRecord;
use crate::segment::{ClauseSegment, split_clauses};
use crate::temporal;
use crate::token::Tagger;
use chrono::{Local, NaiveDate};
use tracing::debug;

/// The assembled extraction pipeline.
///
/// Holds the token source and the lexicon overlay; both are read-only for
/// the lifetime of the pipeline. A `Pipeline` built over `&T` can be shared
/// freely across invocations.
pub struct Pipeline<T: Tagger> {
    tagger: T,
    lexicon: Lexicon,
}

impl<T: Tagger> Pipeline<T> {
    /// Build a pipeline over a token source, with the built-in domain
    /// lexicon.
    pub fn new(tagger: T) -> Self {
        Pipeline {
            tagger,
            lexicon: Lexicon::default(),
        }
    }

    /// Build a pipeline with an explicit lexicon.
    pub fn with_lexicon(tagger: T, lexicon: Lexicon) -> Self {
        Pipeline { tagger, lexicon }
    }

    /// Extract task records from an utterance, resolving dates against the
    /// local calendar.
    pub fn process(&self, text: &str) -> Result<Vec<TaskRecord>, NlpError> {
        self.process_on(text, Local::now().date_naive())
    }

    /// Extract task records from an utterance, resolving dates against an
    /// injected `today`. Output is deterministic for a fixed `today`.
    ///
    /// Empty or whitespace-only input yields an empty list. A token-source
    /// failure aborts the whole input with no partial result.
    pub fn process_on(&self, text: &str, today: NaiveDate) -> Result<Vec<TaskRecord>, NlpError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tokens = self.tagger.tag(text)?;
        debug!(tokens = tokens.len(), "tagged input");
        let segments = split_clauses(&tokens);

        let mut records = Vec::new();
        // The carry-over accumulator: every clause participates, whether or
        // not its record survives the noise filter.
        let mut last_known_date = temporal::format_date(today);

        for segment in segments {
            let segment = match self.lexicon.reparse(&self.tagger, &segment.text)? {
                Some(tokens) => ClauseSegment {
                    tokens,
                    text: segment.text,
                },
                None => segment,
            };

            let extraction = extract(&segment, today);
            let date = match extraction.date {
                Some(resolved) => {
                    last_known_date = resolved.clone();
                    resolved
                }
                None => last_known_date.clone(),
            };

            if filter::is_noise(&extraction.phrase) {
                debug!(clause = %segment.text, "dropped noise clause");
                continue;
            }

            debug!(phrase = %extraction.phrase, date = %date, "extracted record");
            records.push(TaskRecord {
                action_phrase: extraction.phrase,
                date,
                time: extraction.time,
                source_segment: segment.text,
            });
        }

        Ok(records)
    }
}
