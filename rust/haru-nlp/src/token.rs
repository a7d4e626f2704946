//! Tokens and the token-source contract.
//!
//! The pipeline never reads raw text directly; everything downstream of the
//! entry point operates on the ordered `(surface, tag)` pairs produced by a
//! [`Tagger`]. The tagger is an external collaborator (typically a MeCab
//! analyzer behind a process or service boundary) and is consumed, not
//! reimplemented, here.

use crate::error::TagError;
use crate::tag::Tag;
use std::fmt;

/// One morpheme of analyzed input: its surface form and POS category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The morpheme text as produced by the tagger.
    pub surface: String,
    /// The part-of-speech category assigned by the tagger.
    pub tag: Tag,
}

impl Token {
    /// Create a token from a surface form and tag.
    pub fn new(surface: impl Into<String>, tag: Tag) -> Self {
        Token {
            surface: surface.into(),
            tag,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.surface, self.tag)
    }
}

/// The token-source contract.
///
/// `tag` must return the ordered morpheme sequence for `text`. The
/// implementation is expected to be pure with respect to its input and safe
/// for concurrent read-only use; serializing access to a shared external
/// analyzer process is the caller's concern, not this crate's.
///
/// A failure is fatal for the current input only: the pipeline propagates
/// it without retrying and produces no partial result.
pub trait Tagger {
    /// Analyze `text` into an ordered sequence of tokens.
    fn tag(&self, text: &str) -> Result<Vec<Token>, TagError>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn tag(&self, text: &str) -> Result<Vec<Token>, TagError> {
        (**self).tag(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_displays_as_surface_slash_code() {
        let token = Token::new("두부", Tag::CommonNoun);
        assert_eq!(token.to_string(), "두부/NNG");
    }
}
