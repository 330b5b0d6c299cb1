//! Error types for schema loading.
//!
//! Loading stops at the first failure anywhere in the import graph; the root
//! caller receives exactly one [`LoadError`] describing it.

use std::path::PathBuf;

use graphql_import_core::ExtractError;
use thiserror::Error;

/// Boxed error returned by a [`SchemaParser`](crate::SchemaParser).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while loading schemas.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A schema file could not be read.
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The structural schema parser rejected a file.
    #[error("schema parsing failed for '{}': {source}", .path.display())]
    SchemaParse { path: PathBuf, source: BoxError },

    /// A `# import` directive in a file is malformed.
    #[error("{}: {source}", .path.display())]
    Directive { path: PathBuf, source: ExtractError },

    /// Configuration is present but unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The file that triggered the error, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Io { path, .. }
            | Self::SchemaParse { path, .. }
            | Self::Directive { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}

/// Convenience alias for results with [`LoadError`].
pub type Result<T> = std::result::Result<T, LoadError>;
