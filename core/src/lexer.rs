//! Tokenizer for a single directive line.
//!
//! The lexer works on byte offsets into a `&str`, so multi-byte characters are
//! always consumed whole. Identifiers are restricted to ASCII letters and `_`;
//! any other character outside a string literal becomes an
//! [`Illegal`](TokenKind::Illegal) token.

use crate::error::{LexError, LexErrorKind};
use crate::token::{Token, TokenKind};

pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Scans the next token.
    ///
    /// Whitespace is skipped and never emitted. Once input is exhausted every
    /// call yields an [`Eof`](TokenKind::Eof) token. A malformed string literal
    /// is reported as a [`LexError`]; the lexer consumes nothing further after
    /// an error, so later calls yield `Eof`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let start = self.pos;
        let Some(ch) = self.bump() else {
            return Ok(Token::eof());
        };

        let kind = match ch {
            '"' | '\'' => return self.read_string(ch),
            '#' => TokenKind::CommentStart,
            '.' => TokenKind::Dot,
            '*' => TokenKind::Wildcard,
            ',' => TokenKind::Comma,
            c if is_identifier_char(c) => {
                self.read_identifier();
                let text = &self.input[start..self.pos];
                let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Identifier);
                return Ok(Token::new(kind, text));
            }
            _ => TokenKind::Illegal,
        };

        Ok(Token::new(kind, &self.input[start..self.pos]))
    }

    /// Tokenizes the whole input, ending with (and including) the `Eof` token.
    pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token()?;
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn read_identifier(&mut self) {
        while self.peek().is_some_and(is_identifier_char) {
            self.bump();
        }
    }

    /// Reads a literal whose opening `quote` has already been consumed.
    fn read_string(&mut self, quote: char) -> Result<Token, LexError> {
        let mut value = String::new();

        loop {
            let offset = self.pos;
            let Some(ch) = self.bump() else {
                return Err(self.fail(LexErrorKind::UnclosedString, offset));
            };

            match ch {
                c if c == quote => return Ok(Token::new(TokenKind::String, value)),
                '\\' => {
                    let escape_offset = self.pos;
                    let decoded = match self.bump() {
                        Some(c @ ('"' | '\'' | '\\')) => c,
                        Some('b') => '\u{8}',
                        Some('f') => '\u{c}',
                        Some('n') => '\n',
                        Some('r') => '\r',
                        Some('t') => '\t',
                        _ => return Err(self.fail(LexErrorKind::UnsupportedEscape, escape_offset)),
                    };
                    value.push(decoded);
                }
                c if c.is_control() => {
                    return Err(self.fail(LexErrorKind::ControlCharacter, offset));
                }
                c => value.push(c),
            }
        }
    }

    fn fail(&mut self, kind: LexErrorKind, offset: usize) -> LexError {
        self.pos = self.input.len();
        LexError::new(kind, offset)
    }
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::tokenize(input)
            .expect("tokenize")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_tokenize_full_directive() {
        use TokenKind::*;
        assert_eq!(
            kinds(r#"# import X, Mutation.* from "x.graphql""#),
            vec![
                CommentStart, Import, Identifier, Comma, Identifier, Dot, Wildcard, From, String,
                Eof
            ]
        );
    }

    #[test]
    fn test_keywords_and_identifiers_keep_source_text() {
        let tokens = Lexer::tokenize("import from imports _private").expect("tokenize");
        assert_eq!(tokens[0], Token::new(TokenKind::Import, "import"));
        assert_eq!(tokens[1], Token::new(TokenKind::From, "from"));
        assert_eq!(tokens[2], Token::new(TokenKind::Identifier, "imports"));
        assert_eq!(tokens[3], Token::new(TokenKind::Identifier, "_private"));
    }

    #[test]
    fn test_digits_are_not_identifier_characters() {
        let tokens = Lexer::tokenize("Type2").expect("tokenize");
        assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "Type"));
        assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "2"));
        assert!(tokens[2].is(TokenKind::Eof));
    }

    #[test]
    fn test_multibyte_character_ends_identifier() {
        let tokens = Lexer::tokenize("Typé").expect("tokenize");
        assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "Typ"));
        assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "é"));
        assert!(tokens[2].is(TokenKind::Eof));
    }

    #[test]
    fn test_string_with_either_quote() {
        let tokens = Lexer::tokenize(r#""a.graphql" 'b.graphql'"#).expect("tokenize");
        assert_eq!(tokens[0], Token::new(TokenKind::String, "a.graphql"));
        assert_eq!(tokens[1], Token::new(TokenKind::String, "b.graphql"));
    }

    #[test]
    fn test_string_escapes_are_decoded() {
        let tokens = Lexer::tokenize(r#""dir\\\"q\"\n\t\b\f\r""#).expect("tokenize");
        assert_eq!(tokens[0].text, "dir\\\"q\"\n\t\u{8}\u{c}\r");

        let tokens = Lexer::tokenize(r"'it\'s'").expect("tokenize");
        assert_eq!(tokens[0].text, "it's");
    }

    #[test]
    fn test_string_passes_multibyte_characters_through() {
        let tokens = Lexer::tokenize("\"schémas/日本.graphql\"").expect("tokenize");
        assert_eq!(tokens[0].text, "schémas/日本.graphql");
    }

    #[test]
    fn test_unclosed_string() {
        let err = Lexer::tokenize(r#"from "f.graphql"#).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnclosedString);
        assert_eq!(err.offset, 15);
    }

    #[test]
    fn test_unsupported_escape() {
        let err = Lexer::tokenize(r#""a\qb""#).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnsupportedEscape);
        assert_eq!(err.offset, 3);
    }

    #[test]
    fn test_trailing_backslash_is_unsupported_escape() {
        let err = Lexer::tokenize("\"abc\\").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnsupportedEscape);
    }

    #[test]
    fn test_control_character_in_string() {
        let err = Lexer::tokenize("\"a\u{1}b\"").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::ControlCharacter);
        assert_eq!(err.offset, 2);
    }

    #[test]
    fn test_lexer_stops_after_error() {
        let mut lexer = Lexer::new("\"bad\\x\" X");
        assert!(lexer.next_token().is_err());
        assert!(lexer.next_token().expect("eof").is(TokenKind::Eof));
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert_eq!(kinds("  \t "), vec![TokenKind::Eof]);
    }
}
