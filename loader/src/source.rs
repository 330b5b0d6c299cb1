//! Collaborators the loader delegates to: reading file text and parsing the
//! schema grammar.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use graphql_parser::schema::Document;

use crate::error::BoxError;

/// Reads the full text of a schema file.
pub trait SourceReader {
    fn read_file(&self, path: &Path) -> io::Result<String>;
}

/// Reads from the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl SourceReader for FsReader {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Serves schema text from memory and counts how often each path is read.
///
/// # Examples
///
/// ```
/// use graphql_import_loader::{MemoryReader, SourceReader};
/// use std::path::Path;
///
/// let reader = MemoryReader::new().with_file("/s/a.graphql", "type A { id: ID }");
/// assert!(reader.read_file(Path::new("/s/a.graphql")).is_ok());
/// assert!(reader.read_file(Path::new("/s/b.graphql")).is_err());
/// assert_eq!(reader.read_count("/s/a.graphql"), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryReader {
    files: HashMap<PathBuf, String>,
    reads: RefCell<HashMap<PathBuf, usize>>,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }

    /// Number of read attempts for `path`, including failed ones.
    pub fn read_count(&self, path: impl AsRef<Path>) -> usize {
        self.reads
            .borrow()
            .get(path.as_ref())
            .copied()
            .unwrap_or_default()
    }

    /// Total read attempts across all paths.
    pub fn total_reads(&self) -> usize {
        self.reads.borrow().values().sum()
    }
}

impl SourceReader for MemoryReader {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        *self.reads.borrow_mut().entry(path.to_path_buf()).or_default() += 1;
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }
}

/// Parses the schema grammar of one file.
///
/// The loader treats the result as opaque; it only stores it.
pub trait SchemaParser {
    type Schema;

    fn parse_structure(&self, path: &Path, text: &str) -> Result<Self::Schema, BoxError>;
}

/// GraphQL SDL parsed into an owned document.
pub type GraphqlSchema = Document<'static, String>;

/// Parses GraphQL SDL with the `graphql-parser` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphqlParser;

impl SchemaParser for GraphqlParser {
    type Schema = GraphqlSchema;

    fn parse_structure(&self, _path: &Path, text: &str) -> Result<GraphqlSchema, BoxError> {
        let document = graphql_parser::schema::parse_schema::<String>(text)?;
        Ok(document.into_static())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_parser_accepts_sdl_with_directive_comments() {
        let sdl = "# import User from \"user.graphql\"\ntype Query { me: User }\n";
        let schema = GraphqlParser
            .parse_structure(Path::new("q.graphql"), sdl)
            .unwrap();
        assert_eq!(schema.definitions.len(), 1);
    }

    #[test]
    fn test_graphql_parser_rejects_invalid_sdl() {
        let result = GraphqlParser.parse_structure(Path::new("bad.graphql"), "type Query {");
        assert!(result.is_err());
    }

    #[test]
    fn test_memory_reader_counts_failed_reads() {
        let reader = MemoryReader::new();
        let err = reader.read_file(Path::new("/missing.graphql")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(reader.read_count("/missing.graphql"), 1);
        assert_eq!(reader.total_reads(), 1);
    }
}
