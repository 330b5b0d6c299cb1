//! Parsing of GraphQL `# import` directives.
//!
//! A directive is a comment line inside a schema file that names symbols to
//! pull in from another schema file:
//!
//! ```text
//! # import User, Query.*, * from "users.graphql"
//! ```
//!
//! This crate covers the text side of that contract:
//!
//! - [`Lexer`] — classifies one line into [`Token`]s, decoding quoted strings.
//! - [`DirectiveParser`] — builds a [`ParseResult`] (the ordered
//!   [`ImportEntry`] selectors plus the `from` target) from one line.
//! - [`extract_imports`] — finds and parses every directive in a document.
//!
//! Resolving `from` targets against the file system and parsing the schema
//! grammar itself is left to the loader crate.
//!
//! # Example
//!
//! ```
//! use graphql_import_core::*;
//!
//! let doc = "\
//! ## import Post, Mutation.* from \"posts.graphql\"
//! type Query { posts: [Post] }
//! ";
//!
//! let results = extract_imports(doc).unwrap();
//! assert_eq!(results[0].from, "posts.graphql");
//! assert_eq!(results[0].imports[0], ImportEntry::named("Post"));
//! assert!(results[0].imports[1].nested().unwrap().is_wildcard());
//!
//! let err = parse_directive("# import Post").unwrap_err();
//! assert_eq!(err.to_string(), "expected next token to be from, got eof instead");
//! ```

mod directive;
mod error;
mod extract;
mod lexer;
mod parser;
mod token;

pub use directive::{ImportEntry, ParseResult};
pub use error::{DirectiveError, ExtractError, LexError, LexErrorKind, SyntaxError};
pub use extract::{DIRECTIVE_MARKER, extract_imports};
pub use lexer::Lexer;
pub use parser::{DirectiveParser, parse_directive};
pub use token::{Token, TokenKind};
