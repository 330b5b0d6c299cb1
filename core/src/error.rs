//! Error types for directive scanning, parsing and extraction.
//!
//! Every error is terminal: the lexer stops at the first malformed string
//! literal, the parser at the first unexpected token, and the extractor at the
//! first directive line that fails.

use thiserror::Error;

use crate::token::TokenKind;

/// What went wrong inside a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Input ended before the closing quote.
    UnclosedString,
    /// A backslash was followed by a character with no defined escape.
    UnsupportedEscape,
    /// A raw control character appeared inside the literal.
    ControlCharacter,
}

impl LexErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::UnclosedString => "unclosed string",
            Self::UnsupportedEscape => "unsupported escape character",
            Self::ControlCharacter => "cannot contain control characters in strings",
        }
    }
}

/// Malformed string literal, with the byte offset where scanning stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} at offset {offset}", .kind.message())]
pub struct LexError {
    pub kind: LexErrorKind,
    pub offset: usize,
}

impl LexError {
    pub fn new(kind: LexErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// A token of the wrong kind at a position the grammar constrains.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected next token to be {expected}, got {found} instead")]
pub struct SyntaxError {
    pub expected: TokenKind,
    pub found: TokenKind,
}

/// Failure to parse a single directive line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// The first directive failure found while scanning a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid import directive on line {line}: {source}")]
pub struct ExtractError {
    /// 1-based line number of the offending directive.
    pub line: usize,
    pub source: DirectiveError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_message() {
        let err = LexError::new(LexErrorKind::UnclosedString, 27);
        assert_eq!(err.to_string(), "unclosed string at offset 27");
    }

    #[test]
    fn test_syntax_error_message() {
        let err = SyntaxError {
            expected: TokenKind::From,
            found: TokenKind::Eof,
        };
        assert_eq!(
            err.to_string(),
            "expected next token to be from, got eof instead"
        );
    }

    #[test]
    fn test_extract_error_wraps_directive_error() {
        let err = ExtractError {
            line: 3,
            source: DirectiveError::from(LexError::new(LexErrorKind::UnsupportedEscape, 20)),
        };
        assert_eq!(
            err.to_string(),
            "invalid import directive on line 3: unsupported escape character at offset 20"
        );
    }
}
