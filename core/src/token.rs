//! Token model shared by the lexer and the directive parser.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a lexed token.
///
/// The `Display` impl yields the name used in syntax error messages
/// (e.g. `expected next token to be from, got eof instead`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// `#`
    CommentStart,
    /// The `import` keyword.
    Import,
    /// A run of ASCII letters and underscores that is not a keyword.
    Identifier,
    /// `.`
    Dot,
    /// The `from` keyword.
    From,
    /// `*`
    Wildcard,
    /// A quoted string literal; the token text is the unescaped contents.
    String,
    /// `,`
    Comma,
    /// Any character the grammar does not recognize.
    Illegal,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns the name used for this kind in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CommentStart => "#",
            Self::Import => "import",
            Self::Identifier => "identifier",
            Self::Dot => "dot",
            Self::From => "from",
            Self::Wildcard => "wildcard",
            Self::String => "string",
            Self::Comma => "comma",
            Self::Illegal => "illegal",
            Self::Eof => "eof",
        }
    }

    /// Maps identifier text to a keyword kind, if it is one.
    pub fn keyword(text: &str) -> Option<Self> {
        match text {
            "import" => Some(Self::Import),
            "from" => Some(Self::From),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified slice of directive text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::keyword("import"), Some(TokenKind::Import));
        assert_eq!(TokenKind::keyword("from"), Some(TokenKind::From));
        assert_eq!(TokenKind::keyword("Import"), None);
        assert_eq!(TokenKind::keyword("fromage"), None);
    }

    #[test]
    fn test_kind_display_names() {
        assert_eq!(TokenKind::CommentStart.to_string(), "#");
        assert_eq!(TokenKind::String.to_string(), "string");
        assert_eq!(TokenKind::Eof.to_string(), "eof");
    }
}
