//! Project configuration for schema loading.
//!
//! Lists the root schema files to load and how the result is printed.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! schemas:
//!   - api/schema.graphql
//!   - admin/schema.graphql
//! output:
//!   format: sdl
//!   include_imports: false
//! ```

use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, Result};
use crate::output::OutputFormat;

/// How loaded schemas are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// For SDL output, print every loaded file rather than only the root.
    #[serde(default)]
    pub include_imports: bool,
}

/// Top-level configuration, typically `.graphql-import.yml`.
///
/// # Examples
///
/// ```
/// # use graphql_import_loader::{ImportConfig, OutputFormat};
/// let yaml = r#"
/// version: "1.0"
/// schemas: [schema.graphql]
/// "#;
/// let config: ImportConfig = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.schemas.len(), 1);
/// assert_eq!(config.output.format, OutputFormat::Sdl);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Configuration format version (e.g., `"1.0"`).
    pub version: String,
    /// Root schema files, relative to the configuration file.
    pub schemas: Vec<PathBuf>,
    #[serde(default)]
    pub output: OutputConfig,
}

impl ImportConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read, or
    /// [`LoadError::Yaml`] if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| LoadError::io(path, e))?;
        let config = serde_yaml::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|e| LoadError::io(path, e))?;
        serde_yaml::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Resolves `schemas` against the directory containing `config_path`.
    ///
    /// Absolute entries are kept as they are.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Config`] if no schemas are listed.
    pub fn resolve_schemas(&self, config_path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        if self.schemas.is_empty() {
            return Err(LoadError::Config(
                "at least one schema must be listed under `schemas`".to_string(),
            ));
        }
        let base = config_path.as_ref().parent().unwrap_or(Path::new(""));
        Ok(self.schemas.iter().map(|schema| base.join(schema)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_yaml() -> &'static str {
        r#"
version: "1.0"
schemas:
  - api/schema.graphql
  - /abs/admin.graphql
output:
  format: json
  include_imports: true
"#
    }

    #[test]
    fn test_deserialize_complete() {
        let config: ImportConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(
            config.schemas,
            vec![
                PathBuf::from("api/schema.graphql"),
                PathBuf::from("/abs/admin.graphql")
            ]
        );
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.include_imports);
    }

    #[test]
    fn test_output_defaults() {
        let config: ImportConfig =
            serde_yaml::from_str("version: \"1.0\"\nschemas: [a.graphql]\n").unwrap();
        assert_eq!(config.output, OutputConfig::default());
        assert_eq!(config.output.format, OutputFormat::Sdl);
        assert!(!config.output.include_imports);
    }

    #[test]
    fn test_resolve_schemas_relative_to_config() {
        let config: ImportConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        let resolved = config.resolve_schemas("/project/.graphql-import.yml").unwrap();
        assert_eq!(
            resolved,
            vec![
                PathBuf::from("/project/api/schema.graphql"),
                PathBuf::from("/abs/admin.graphql")
            ]
        );
    }

    #[test]
    fn test_resolve_schemas_requires_entries() {
        let config: ImportConfig =
            serde_yaml::from_str("version: \"1.0\"\nschemas: []\n").unwrap();
        let err = config.resolve_schemas("cfg.yml").unwrap_err();
        assert!(matches!(err, LoadError::Config(_)));
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");

        let original: ImportConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        original.save(&path).unwrap();

        let loaded = ImportConfig::load(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ImportConfig::load("/nonexistent/config.yml").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
