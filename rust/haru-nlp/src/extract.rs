//! Action extraction — from a tagged clause to a usable action phrase.
//!
//! One pure classification pass sorts every token of a clause into temporal
//! metadata, action-verb candidates and retained/dropped nouns, producing
//! an immutable [`Classification`] record. Noun merging and verb selection
//! then consume that record read-only, so no step depends on another's
//! mutations.
//!
//! The goal is a short, usable noun/verb phrase — not a grammatical
//! sentence. A verb is nominalized with 기 (사 → 사기), nouns marked as
//! objects or subjects always survive, and incidental location nouns
//! (마트에서, 퇴근길에) are dropped.

use crate::segment::ClauseSegment;
use crate::tag::Tag;
use crate::temporal::{self, HOUR_UNIT};
use crate::token::Token;
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::trace;

/// Verb stems that never become the action: existential/negative stems.
/// 약속이 있어 is an appointment, not an act of existing.
const EXISTENTIAL_STEMS: &[&str] = &["있", "없"];

/// Stems of the "become" auxiliary, skipped entirely during verb selection.
const BECOMING_STEMS: &[&str] = &["되", "돼"];

/// The generic "do" roots; used only as a last resort and fused with a
/// preceding action noun where possible.
const DO_ROOT: &str = "하";
const DO_ROOT_CONTRACTED: &str = "해";

/// Terminal/connective endings stripped off a fused verb surface to recover
/// its root. Ordered longest-first; the first suffix that leaves a
/// non-empty root wins.
const VERB_ENDINGS: &[&str] = &[
    "어야겠다",
    "아야겠다",
    "여야겠다",
    "야겠다",
    "어야지",
    "아야지",
    "여야지",
    "습니다",
    "읍시다",
    "야지",
    "어야",
    "아야",
    "여야",
    "어요",
    "아요",
    "에요",
    "세요",
    "는다",
    "ㄴ다",
    "을까",
    "ㄹ까",
    "자",
    "요",
    "다",
    "까",
    "니",
    "지",
    "야",
    "고",
    "서",
    "며",
    "어",
    "아",
];

/// Nouns that name an action outright; with the generic do-verb they fuse
/// into one word (운동 + 하기 → 운동하기) instead of a two-word phrase.
const ACTION_NOUNS: &[&str] = &["운동", "공부", "검색", "작성", "준비", "정리"];

/// The result of classifying one clause's tokens. Produced by a single pure
/// pass; consumed read-only by the later extraction steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Indices of tokens consumed as date/time metadata; they never reach
    /// the phrase.
    pub metadata: HashSet<usize>,
    /// The last relative date keyword seen, if any.
    pub date_keyword: Option<String>,
    /// The last part-of-day noun seen, if any.
    pub part_of_day: Option<String>,
    /// The last hour value seen (`8시` style), if any.
    pub hour: Option<String>,
    /// Indices of action-verb candidates, in input order.
    pub verbs: Vec<usize>,
    /// Indices of nouns marked by an object/subject particle; these always
    /// survive context filtering.
    pub retained: HashSet<usize>,
    /// Indices of nouns dropped as incidental context (adverbial-marked and
    /// not retained).
    pub dropped: HashSet<usize>,
}

impl Classification {
    /// The clause's time-of-day marker. An explicit hour beats a
    /// part-of-day noun (오후 8시 reads as 8시, not 오후).
    pub fn time(&self) -> String {
        self.hour
            .clone()
            .or_else(|| self.part_of_day.clone())
            .unwrap_or_default()
    }
}

/// What the extractor hands back to the orchestrator for one clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The reconstructed action phrase; never empty (falls back to the
    /// clause's verbatim text).
    pub phrase: String,
    /// The resolved date, if the clause carried its own date keyword.
    pub date: Option<String>,
    /// The time-of-day marker, or empty.
    pub time: String,
}

/// Classify every token of a clause in one pass.
pub fn classify(tokens: &[Token]) -> Classification {
    let mut c = Classification::default();

    for (i, token) in tokens.iter().enumerate() {
        if temporal::is_date_keyword(&token.surface) {
            c.date_keyword = Some(token.surface.clone());
            c.metadata.insert(i);
        } else if temporal::is_part_of_day(&token.surface) {
            c.part_of_day = Some(token.surface.clone());
            c.metadata.insert(i);
        } else if token.tag == Tag::Number {
            if tokens.get(i + 1).is_some_and(|t| t.surface == HOUR_UNIT) {
                c.hour = Some(format!("{}{HOUR_UNIT}", token.surface));
                c.metadata.insert(i);
                c.metadata.insert(i + 1);
            } else if has_detached_hour_unit(tokens, i) {
                c.hour = Some(format!("{}{HOUR_UNIT}", token.surface));
                c.metadata.insert(i);
            } else {
                c.hour = Some(token.surface.clone());
                c.metadata.insert(i);
            }
        } else if token.tag.is_verbal() && !EXISTENTIAL_STEMS.contains(&token.surface.as_str()) {
            c.verbs.push(i);
        }
    }

    for (i, token) in tokens.iter().enumerate() {
        if !token.tag.is_nominal() || c.metadata.contains(&i) {
            continue;
        }
        match tokens.get(i + 1).map(|t| t.tag) {
            Some(Tag::ObjectParticle) | Some(Tag::SubjectParticle) => {
                c.retained.insert(i);
            }
            Some(Tag::AdverbialParticle) if !c.retained.contains(&i) => {
                c.dropped.insert(i);
            }
            _ => {}
        }
    }

    trace!(?c, "classified clause");
    c
}

/// An hour-unit token somewhere else in the clause still makes a bare
/// numeral read as an hour. The check is token-level: 시장 in the clause
/// text does not count.
fn has_detached_hour_unit(tokens: &[Token], numeral: usize) -> bool {
    tokens
        .iter()
        .enumerate()
        .any(|(i, t)| i != numeral + 1 && t.surface == HOUR_UNIT)
}

/// Merge runs of consecutive nominal tokens into phrase elements.
///
/// Metadata and dropped tokens inside a run are skipped without breaking
/// it; a run whose every token was excluded contributes nothing.
pub fn merge_nouns(tokens: &[Token], classification: &Classification) -> Vec<String> {
    let mut parts = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if classification.metadata.contains(&i) {
            i += 1;
            continue;
        }
        if tokens[i].tag.is_nominal() {
            let mut combined = String::new();
            let mut j = i;
            while j < tokens.len() && tokens[j].tag.is_nominal() {
                if !classification.metadata.contains(&j) && !classification.dropped.contains(&j) {
                    combined.push_str(&tokens[j].surface);
                }
                j += 1;
            }
            if !combined.is_empty() {
                parts.push(combined);
            }
            i = j;
        } else {
            i += 1;
        }
    }
    parts
}

/// Pick the clause's dominant action verb and return its root.
///
/// Candidates are scanned from the end backward (the final verb usually
/// carries the intention). Becoming-stems are skipped outright; a generic
/// do-root is remembered but only accepted when nothing better exists.
pub fn select_verb_root(tokens: &[Token], classification: &Classification) -> Option<String> {
    let mut generic_do: Option<String> = None;

    for &i in classification.verbs.iter().rev() {
        let surface = tokens[i].surface.as_str();
        if BECOMING_STEMS.contains(&surface) {
            continue;
        }
        let root = strip_ending(surface);
        if root.is_empty() {
            continue;
        }
        let root = if root == DO_ROOT_CONTRACTED {
            DO_ROOT.to_string()
        } else {
            root
        };
        if root == DO_ROOT {
            generic_do.get_or_insert(root);
            continue;
        }
        return Some(root);
    }

    generic_do
}

/// Strip the longest matching terminal/connective ending that leaves a
/// non-empty root. A surface with no listed ending is already a root.
fn strip_ending(surface: &str) -> String {
    for ending in VERB_ENDINGS {
        if let Some(root) = surface.strip_suffix(ending) {
            if !root.is_empty() {
                return root.to_string();
            }
        }
    }
    surface.to_string()
}

/// Join noun elements and the nominalized verb into the final phrase.
fn assemble(mut nouns: Vec<String>, verb_root: Option<&str>) -> String {
    let Some(root) = verb_root else {
        return nouns.join(" ");
    };
    let nominalized = format!("{root}기");

    if root == DO_ROOT
        && nouns
            .last()
            .is_some_and(|noun| ACTION_NOUNS.contains(&noun.as_str()))
    {
        // 운동 + 하기 → 운동하기: the noun already names the action.
        let fused = format!("{}{nominalized}", nouns.pop().unwrap_or_default());
        nouns.push(fused);
        return nouns.join(" ");
    }

    nouns.push(nominalized);
    nouns.join(" ")
}

/// Extract the action phrase, date and time of one clause.
pub fn extract(segment: &ClauseSegment, today: NaiveDate) -> Extraction {
    let classification = classify(&segment.tokens);
    let nouns = merge_nouns(&segment.tokens, &classification);
    let verb_root = select_verb_root(&segment.tokens, &classification);

    let phrase = assemble(nouns, verb_root.as_deref());
    let phrase = if phrase.is_empty() {
        // Nothing survived classification; the verbatim clause is still a
        // better record than nothing at all.
        segment.text.clone()
    } else {
        phrase
    };

    Extraction {
        phrase,
        date: classification
            .date_keyword
            .as_deref()
            .map(|keyword| temporal::resolve(keyword, today)),
        time: classification.time(),
    }
}
