#![warn(missing_docs)]

//! # haru-nlp — spoken-Korean to-do extraction
//!
//! Turns a free-form spoken utterance ("내일 아침 헬스장 가야지 그리고…")
//! into discrete task records, each with a normalized action phrase, a
//! resolved calendar date, an optional time-of-day marker and the clause it
//! came from.
//!
//! ## Pipeline
//!
//! ```text
//! Input text
//!   → Tagger (external morphological analyzer)
//!     → Clause segmentation (boundary tags + lexical markers)
//!       → Lexicon overlay (domain terms survive as single nouns)
//!         → Classification (temporal metadata / verbs / retained nouns)
//!           → Phrase assembly (noun merging + verb nominalization)
//!             → Date carry-over → Noise filter → TaskRecord list
//! ```
//!
//! The core is fully synchronous pure computation. The only external
//! collaborator is the [`Tagger`]; embedding, category matching and
//! recommendation live in sibling crates with their own contracts.
//!
//! The segmentation and reconstruction rules are specific to Korean
//! morphology, and reconstructed phrases aim to be usable, not
//! grammatical.

pub mod error;
pub mod extract;
pub mod filter;
pub mod helpers;
pub mod lexicon;
pub mod pipeline;
pub mod record;
pub mod segment;
pub mod tag;
pub mod temporal;
pub mod token;

pub use error::{NlpError, TagError};
pub use lexicon::Lexicon;
pub use pipeline::Pipeline;
pub use record::TaskRecord;
pub use segment::ClauseSegment;
pub use tag::Tag;
pub use token::{Tagger, Token};
