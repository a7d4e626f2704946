//! Clause segmentation — splitting a token stream into intentions.
//!
//! Spoken input strings several to-dos together with connective endings
//! (-고), conjunctive adverbs (그리고) and colloquial completion forms
//! (-해야지) instead of punctuation. The segmenter walks the token stream
//! once, left to right, and closes the current clause whenever it sees a
//! boundary tag or a lexical boundary marker. The triggering token stays as
//! the final token of the clause it closes, so the output covers the input
//! with no gaps and no token loss.

use crate::token::Token;
use tracing::debug;

/// Surface forms that close the current clause regardless of their tag.
///
/// These are colloquial completion/connective forms the tagger does not
/// always report with a boundary tag (fused analyses, defective spellings).
/// Either condition — boundary tag or listed surface — closes the clause
/// identically, so no precedence between the two is needed.
pub(crate) const SPLIT_MARKERS: &[&str] = &[
    "그리고",
    "그러고",
    "해야지",
    "해야겠다",
    "해야돼",
    "해야만",
    "하고",
    "이고",
];

/// One self-contained intention: an ordered run of tokens plus the verbatim
/// reconstruction of its source text.
///
/// A segment is immutable once produced and is consumed exactly once by the
/// action extractor. The reconstruction concatenates surfaces directly —
/// the token source consumes inter-word whitespace, so the original spacing
/// is not recoverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseSegment {
    /// The tokens belonging to this clause, in input order.
    pub tokens: Vec<Token>,
    /// The clause's source text, reconstructed from token surfaces.
    pub text: String,
}

impl ClauseSegment {
    /// Build a segment from its tokens, reconstructing the source text.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let text = tokens
            .iter()
            .map(|t| t.surface.as_str())
            .collect::<String>()
            .trim()
            .to_string();
        ClauseSegment { tokens, text }
    }
}

fn is_boundary(token: &Token) -> bool {
    token.tag.is_clause_boundary() || SPLIT_MARKERS.contains(&token.surface.as_str())
}

/// Split a token stream into ordered clause segments.
///
/// Every input token belongs to exactly one segment. An input with no
/// boundary token yields a single segment containing all tokens.
pub fn split_clauses(tokens: &[Token]) -> Vec<ClauseSegment> {
    let mut segments = Vec::new();
    let mut buffer: Vec<Token> = Vec::new();

    for token in tokens {
        buffer.push(token.clone());
        if is_boundary(token) {
            segments.push(ClauseSegment::from_tokens(std::mem::take(&mut buffer)));
        }
    }
    if !buffer.is_empty() {
        segments.push(ClauseSegment::from_tokens(buffer));
    }

    debug!(clauses = segments.len(), "segmented token stream");
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::Tag;
    use pretty_assertions::assert_eq;

    fn nn(s: &str) -> Token {
        Token::new(s, Tag::CommonNoun)
    }

    #[test]
    fn boundary_tag_closes_clause() {
        let tokens = vec![
            nn("엽떡"),
            Token::new("먹", Tag::Verb),
            Token::new("고", Tag::ConnectiveEnding),
            nn("치킨"),
            Token::new("먹", Tag::Verb),
            Token::new("어야지", Tag::FinalEnding),
        ];
        let segments = split_clauses(&tokens);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "엽떡먹고");
        assert_eq!(segments[1].text, "치킨먹어야지");
        // The triggering token stays at the end of the clause it closes.
        assert_eq!(segments[0].tokens.last().map(|t| t.surface.as_str()), Some("고"));
    }

    #[test]
    fn surface_marker_closes_clause_regardless_of_tag() {
        let tokens = vec![nn("가"), Token::new("그리고", Tag::CommonNoun), nn("나")];
        let segments = split_clauses(&tokens);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "가그리고");
        assert_eq!(segments[1].text, "나");
    }

    #[test]
    fn no_boundary_yields_single_segment() {
        let tokens = vec![nn("아침"), nn("운동")];
        let segments = split_clauses(&tokens);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].tokens.len(), 2);
    }

    #[test]
    fn every_token_lands_in_exactly_one_segment() {
        let tokens = vec![
            nn("가"),
            Token::new("그리고", Tag::ConjunctiveAdverb),
            nn("나"),
            Token::new("고", Tag::ConnectiveEnding),
            nn("다"),
        ];
        let segments = split_clauses(&tokens);
        let rejoined: Vec<Token> = segments.into_iter().flat_map(|s| s.tokens).collect();
        assert_eq!(rejoined, tokens);
    }

    #[test]
    fn empty_stream_yields_no_segments() {
        assert!(split_clauses(&[]).is_empty());
    }

    #[test]
    fn trailing_boundary_leaves_no_empty_segment() {
        let tokens = vec![nn("운동"), Token::new("하고", Tag::ConnectiveEnding)];
        let segments = split_clauses(&tokens);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].tokens.len(), 2);
    }
}
