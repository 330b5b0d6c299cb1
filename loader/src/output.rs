//! Rendering of loaded schema graphs.

use std::path::PathBuf;

use graphql_import_core::ParseResult;
use graphql_parser::schema::{Definition, TypeDefinition, TypeExtension};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::loader::LoadedSchemas;
use crate::source::GraphqlSchema;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// GraphQL schema definition language.
    #[default]
    Sdl,
    /// [`LoadReport`] as JSON.
    Json,
    /// [`LoadReport`] as YAML.
    Yaml,
}

/// Summary of one loaded file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    /// Names of the types, extensions and directives the file defines.
    pub definitions: Vec<String>,
    /// The file's import directives, selectors included.
    pub imports: Vec<ParseResult>,
}

/// Serializable summary of a load, in load order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    pub root: Option<PathBuf>,
    pub files: Vec<FileReport>,
}

impl LoadReport {
    pub fn new(loaded: &LoadedSchemas<GraphqlSchema>) -> Self {
        let files = loaded
            .iter()
            .map(|file| FileReport {
                path: file.path.clone(),
                definitions: file
                    .schema
                    .definitions
                    .iter()
                    .filter_map(definition_name)
                    .map(str::to_string)
                    .collect(),
                imports: file.imports.clone(),
            })
            .collect();

        Self {
            root: loaded.root().map(PathBuf::from),
            files,
        }
    }
}

/// Renders a loaded graph.
///
/// SDL prints the root schema, or with `include_imports` every file in load
/// order under a `# file:` header. JSON and YAML print a [`LoadReport`].
pub fn format_loaded(
    loaded: &LoadedSchemas<GraphqlSchema>,
    format: OutputFormat,
    include_imports: bool,
) -> Result<String> {
    match format {
        OutputFormat::Sdl if include_imports => Ok(loaded
            .iter()
            .map(|file| format!("# file: {}\n{}", file.path.display(), file.schema))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Sdl => Ok(loaded
            .root_schema()
            .map(ToString::to_string)
            .unwrap_or_default()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&LoadReport::new(loaded))?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&LoadReport::new(loaded))?),
    }
}

/// Renders directives extracted from a single document.
///
/// SDL output echoes each directive in its canonical form, one per line.
pub fn format_directives(directives: &[ParseResult], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Sdl => Ok(directives
            .iter()
            .map(|directive| format!("{directive}\n"))
            .collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(directives)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(directives)?),
    }
}

fn definition_name<'d>(definition: &'d Definition<'static, String>) -> Option<&'d str> {
    let name = match definition {
        Definition::SchemaDefinition(_) => return None,
        Definition::TypeDefinition(ty) => match ty {
            TypeDefinition::Scalar(t) => &t.name,
            TypeDefinition::Object(t) => &t.name,
            TypeDefinition::Interface(t) => &t.name,
            TypeDefinition::Union(t) => &t.name,
            TypeDefinition::Enum(t) => &t.name,
            TypeDefinition::InputObject(t) => &t.name,
        },
        Definition::TypeExtension(ext) => match ext {
            TypeExtension::Scalar(t) => &t.name,
            TypeExtension::Object(t) => &t.name,
            TypeExtension::Interface(t) => &t.name,
            TypeExtension::Union(t) => &t.name,
            TypeExtension::Enum(t) => &t.name,
            TypeExtension::InputObject(t) => &t.name,
        },
        Definition::DirectiveDefinition(d) => &d.name,
    };
    Some(name.as_str())
}
