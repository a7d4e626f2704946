//! Lexicon overlay — keeping multi-morpheme domain terms in one piece.
//!
//! General-purpose morphological analysis shreds slang, brand names and
//! compound nouns into fragments (엽떡 → 엽 + 떡), which then scatter across
//! the reconstructed phrase. The overlay re-parses a clause around the
//! first lexicon term it contains: the surrounding fragments go through the
//! token source normally, and every literal occurrence of the term is
//! inserted as a single common-noun token.
//!
//! Only the first term (in declaration order) found in a clause is applied
//! per parse. Overlapping terms in one clause are a known limitation: the
//! later ones are left to the tagger's own analysis.

use crate::error::NlpError;
use crate::tag::Tag;
use crate::token::{Tagger, Token};
use tracing::debug;

/// Domain terms that must survive tagging as single nouns: delivery-app and
/// food slang, compound commute nouns, coffee-order shorthand.
pub const DOMAIN_TERMS: &[&str] = &[
    "엽떡",
    "짜파구리",
    "맞담",
    "인강",
    "쿠팡",
    "배민",
    "요기요",
    "로제",
    "혼술",
    "혼밥",
    "소확행",
    "퇴근길",
    "출근길",
    "점메추",
    "아아",
    "아메",
    "아카",
    "아카페라",
    "카페라떼",
    "카페모카",
    "카모",
    "카모카",
    "헬스장",
    "교촌치킨",
];

/// A closed list of domain terms, loaded once and never mutated at runtime.
#[derive(Debug, Clone)]
pub struct Lexicon {
    terms: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon::new(DOMAIN_TERMS.iter().copied())
    }
}

impl Lexicon {
    /// Build a lexicon from an explicit term list. Scan order follows the
    /// list order.
    pub fn new(terms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Lexicon {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Re-parse a clause's text so that the first matching lexicon term
    /// survives as a single common-noun token.
    ///
    /// Returns `Ok(None)` when no term occurs in the text — absence of a
    /// match is a no-op, never an error. Tagger failures on the surrounding
    /// fragments propagate.
    pub fn reparse(
        &self,
        tagger: impl Tagger,
        text: &str,
    ) -> Result<Option<Vec<Token>>, NlpError> {
        let Some(term) = self.terms.iter().find(|term| text.contains(term.as_str())) else {
            return Ok(None);
        };
        debug!(term = %term, "applying lexicon overlay");

        let mut tokens = Vec::new();
        let mut rest = text;
        while let Some(at) = rest.find(term.as_str()) {
            let before = rest[..at].trim();
            if !before.is_empty() {
                tokens.extend(tagger.tag(before)?);
            }
            tokens.push(Token::new(term.clone(), Tag::CommonNoun));
            rest = &rest[at + term.len()..];
        }
        let rest = rest.trim();
        if !rest.is_empty() {
            tokens.extend(tagger.tag(rest)?);
        }
        Ok(Some(tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TagError;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    struct FragmentTagger(HashMap<&'static str, Vec<Token>>);

    impl Tagger for FragmentTagger {
        fn tag(&self, text: &str) -> Result<Vec<Token>, TagError> {
            self.0
                .get(text)
                .cloned()
                .ok_or_else(|| TagError::NoAnalysis(text.to_string()))
        }
    }

    #[test]
    fn first_matching_term_becomes_a_single_noun() {
        let tagger = FragmentTagger(HashMap::from([
            ("저녁에", vec![
                Token::new("저녁", Tag::CommonNoun),
                Token::new("에", Tag::AdverbialParticle),
            ]),
            ("먹고", vec![
                Token::new("먹", Tag::Verb),
                Token::new("고", Tag::ConnectiveEnding),
            ]),
        ]));
        let lexicon = Lexicon::default();

        let tokens = lexicon.reparse(&tagger, "저녁에엽떡먹고").unwrap().unwrap();
        let surfaces: Vec<&str> = tokens.iter().map(|t| t.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["저녁", "에", "엽떡", "먹", "고"]);
        assert_eq!(tokens[2].tag, Tag::CommonNoun);
    }

    #[test]
    fn every_occurrence_of_the_matched_term_is_preserved() {
        let tagger = FragmentTagger(HashMap::from([(
            "랑",
            vec![Token::new("랑", Tag::ConjunctiveParticle)],
        )]));
        let lexicon = Lexicon::new(["아아"]);

        let tokens = lexicon.reparse(&tagger, "아아랑아아").unwrap().unwrap();
        let surfaces: Vec<&str> = tokens.iter().map(|t| t.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["아아", "랑", "아아"]);
    }

    #[test]
    fn only_the_first_term_in_scan_order_applies() {
        let tagger = FragmentTagger(HashMap::from([(
            "짜파구리",
            vec![
                Token::new("짜파", Tag::CommonNoun),
                Token::new("구리", Tag::CommonNoun),
            ],
        )]));
        let lexicon = Lexicon::new(["엽떡", "짜파구리"]);

        // Both terms occur; only 엽떡 (declared first) is overlaid, the
        // rest of the clause goes back through the tagger.
        let tokens = lexicon.reparse(&tagger, "엽떡짜파구리").unwrap().unwrap();
        let surfaces: Vec<&str> = tokens.iter().map(|t| t.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["엽떡", "짜파", "구리"]);
    }

    #[test]
    fn no_match_is_a_no_op() {
        let tagger = FragmentTagger(HashMap::new());
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.reparse(&tagger, "두부사기").unwrap(), None);
    }

    #[test]
    fn fragment_tagging_failure_propagates() {
        let tagger = FragmentTagger(HashMap::new());
        let lexicon = Lexicon::default();
        let result = lexicon.reparse(&tagger, "아침에엽떡먹고");
        assert!(matches!(
            result,
            Err(NlpError::Tagger(TagError::NoAnalysis(_)))
        ));
    }
}
