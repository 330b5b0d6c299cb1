//! Recursive loading of GraphQL schema files linked by `# import` directives.
//!
//! Starting from a root file, the loader reads each file, parses its schema
//! grammar, extracts its directives with `graphql-import-core`, and follows
//! every `from` target relative to the importing file's directory. A visited
//! set keyed by normalized absolute path makes every file load at most once
//! and lets cyclic imports terminate.
//!
//! # Quick start
//!
//! ```no_run
//! use graphql_import_loader::{OutputFormat, SchemaLoader, format_loaded};
//!
//! let loaded = SchemaLoader::new().load("schema/root.graphql").unwrap();
//! println!("loaded {} file(s)", loaded.len());
//! println!("{}", format_loaded(&loaded, OutputFormat::Sdl, true).unwrap());
//! ```
//!
//! Custom grammars or in-memory sources plug in through [`SchemaParser`] and
//! [`SourceReader`]:
//!
//! ```
//! use graphql_import_loader::{GraphqlParser, MemoryReader, SchemaLoader};
//!
//! let reader = MemoryReader::new()
//!     .with_file("/s/a.graphql", "# import B from \"b.graphql\"\ntype A { b: B }")
//!     .with_file("/s/b.graphql", "# import A from \"a.graphql\"\ntype B { a: A }");
//! let loader = SchemaLoader::with_parts(GraphqlParser, reader);
//!
//! let loaded = loader.load("/s/a.graphql").unwrap();
//! assert_eq!(loaded.len(), 2);
//! assert_eq!(loader.reader().read_count("/s/a.graphql"), 1);
//! ```
//!
//! # Feature flags
//!
//! - **`clap`**: derives `clap::ValueEnum` for [`OutputFormat`].

mod config;
mod error;
mod loader;
mod output;
mod source;

pub use config::{ImportConfig, OutputConfig};
pub use error::{BoxError, LoadError, Result};
pub use loader::{LoadState, LoadedSchema, LoadedSchemas, SchemaLoader, normalize_path};
pub use output::{FileReport, LoadReport, OutputFormat, format_directives, format_loaded};
pub use source::{FsReader, GraphqlParser, GraphqlSchema, MemoryReader, SchemaParser, SourceReader};
