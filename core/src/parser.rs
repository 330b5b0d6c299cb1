//! Recursive-descent parser for a single `# import` directive line.
//!
//! Grammar:
//!
//! ```text
//! directive   := '#' 'import' import-list 'from' string
//! import-list := import-item*
//! import-item := '*' | identifier ( '.' identifier | '.' '*' )?
//! ```
//!
//! The import list is permissive: every token up to `from` (or end of input)
//! is consumed, and each identifier or `*` starts a new item. Commas and any
//! other tokens in between are skipped without error.

use crate::directive::{ImportEntry, ParseResult};
use crate::error::{DirectiveError, LexError, SyntaxError};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Parses one directive line with a current token plus one token of
/// lookahead.
///
/// A lexing failure in the lookahead slot is held back until that token would
/// become current, so trailing garbage after the file name never fails the
/// parse.
///
/// # Examples
///
/// ```
/// use graphql_import_core::DirectiveParser;
///
/// let result = DirectiveParser::new(r#"# import User, Query.* from "users.graphql""#)
///     .parse()
///     .unwrap();
/// assert_eq!(result.from, "users.graphql");
/// assert_eq!(result.imports.len(), 2);
/// ```
pub struct DirectiveParser<'a> {
    lexer: Lexer<'a>,
    cur: Token,
    peek: Result<Token, LexError>,
}

impl<'a> DirectiveParser<'a> {
    pub fn new(line: &'a str) -> Self {
        let mut lexer = Lexer::new(line);
        let peek = lexer.next_token();
        Self {
            lexer,
            cur: Token::eof(),
            peek,
        }
    }

    /// Parses the line, stopping at the first lexical or syntax error.
    pub fn parse(mut self) -> Result<ParseResult, DirectiveError> {
        self.advance()?;

        self.expect(TokenKind::CommentStart)?;
        self.advance()?;

        self.expect(TokenKind::Import)?;
        self.advance()?;

        let imports = self.parse_imports()?;

        self.expect(TokenKind::From)?;
        self.advance()?;

        let from = self.parse_file_name()?;
        Ok(ParseResult::new(imports, from))
    }

    fn parse_imports(&mut self) -> Result<Vec<ImportEntry>, DirectiveError> {
        let mut imports = Vec::new();

        while !self.cur.is(TokenKind::From) && !self.cur.is(TokenKind::Eof) {
            match self.cur.kind {
                TokenKind::Wildcard => imports.push(ImportEntry::wildcard()),
                TokenKind::Identifier => {
                    let mut entry = ImportEntry::named(self.cur.text.as_str());
                    if self.peek_is(TokenKind::Dot) {
                        self.advance()?;
                        if self.peek_is(TokenKind::Identifier) {
                            self.advance()?;
                            entry = entry.with_nested(ImportEntry::named(self.cur.text.as_str()));
                        } else if self.peek_is(TokenKind::Wildcard) {
                            self.advance()?;
                            entry = entry.with_nested(ImportEntry::wildcard());
                        }
                    }
                    imports.push(entry);
                }
                _ => {}
            }
            self.advance()?;
        }

        Ok(imports)
    }

    fn parse_file_name(&mut self) -> Result<String, DirectiveError> {
        self.expect(TokenKind::String)?;
        Ok(std::mem::take(&mut self.cur.text))
    }

    fn advance(&mut self) -> Result<(), DirectiveError> {
        let next = self.lexer.next_token();
        self.cur = std::mem::replace(&mut self.peek, next)?;
        Ok(())
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.as_ref().is_ok_and(|token| token.is(kind))
    }

    fn expect(&self, kind: TokenKind) -> Result<(), DirectiveError> {
        if self.cur.is(kind) {
            Ok(())
        } else {
            Err(SyntaxError {
                expected: kind,
                found: self.cur.kind,
            }
            .into())
        }
    }
}

/// Parses a single directive line.
pub fn parse_directive(line: &str) -> Result<ParseResult, DirectiveError> {
    DirectiveParser::new(line).parse()
}
