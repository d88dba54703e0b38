//! Error types for lexing and parsing PromQL.
//!
//! A [`LexError`] aborts tokenization; it is wrapped into [`ParseError::Lex`]
//! when it surfaces through [`parse`](crate::parse). Every error carries the
//! byte offset in the query text where it was detected.

use thiserror::Error;

/// A character or literal the lexer could not turn into a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("unexpected character {ch:?} at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    /// A quoted string with no closing quote on the same line.
    #[error("unterminated string literal starting at position {pos}")]
    UnterminatedString { pos: usize },

    /// A quoted string containing an escape sequence PromQL does not know.
    #[error("invalid escape sequence in string literal starting at position {pos}")]
    InvalidEscape { pos: usize },

    /// A duration with a bad unit, trailing garbage, or an overflowing value.
    #[error("malformed duration literal {literal:?} at position {pos}")]
    MalformedDuration { literal: String, pos: usize },

    /// A number immediately followed by characters that cannot end it.
    #[error("malformed number literal {literal:?} at position {pos}")]
    MalformedNumber { literal: String, pos: usize },
}

impl LexError {
    /// Byte offset of the offending input.
    pub fn position(&self) -> usize {
        match self {
            LexError::UnexpectedChar { pos, .. }
            | LexError::UnterminatedString { pos }
            | LexError::InvalidEscape { pos }
            | LexError::MalformedDuration { pos, .. }
            | LexError::MalformedNumber { pos, .. } => *pos,
        }
    }
}

/// The query text does not form a valid PromQL expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Tokenization failed before the grammar was applied.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The token at `pos` does not fit the grammar.
    #[error("unexpected {found} at position {pos}, expected {expected}")]
    Unexpected {
        pos: usize,
        expected: String,
        found: String,
    },

    /// Expression nesting went deeper than the configured limit.
    #[error("expression nesting exceeds the maximum depth of {limit} at position {pos}")]
    DepthLimitExceeded { pos: usize, limit: usize },
}

impl ParseError {
    /// Byte offset where parsing stopped.
    pub fn position(&self) -> usize {
        match self {
            ParseError::Lex(err) => err.position(),
            ParseError::Unexpected { pos, .. } | ParseError::DepthLimitExceeded { pos, .. } => *pos,
        }
    }

    pub(crate) fn unexpected(pos: usize, expected: impl Into<String>, found: impl Into<String>) -> Self {
        ParseError::Unexpected {
            pos,
            expected: expected.into(),
            found: found.into(),
        }
    }
}
