//! Recursive schema loading driven by `# import` directives.
//!
//! [`SchemaLoader`] reads a root file, hands its text to a [`SchemaParser`],
//! extracts its directives and follows every `from` target relative to the
//! importing file's directory. Each distinct (normalized, absolute) path is
//! read and parsed at most once per [`LoadedSchemas`] set, which also makes
//! import cycles terminate.
//!
//! ```no_run
//! use graphql_import_loader::SchemaLoader;
//!
//! let loaded = SchemaLoader::new().load("schema/root.graphql").unwrap();
//! println!("{}", loaded.root_schema().unwrap());
//! for file in loaded.iter() {
//!     println!("{} ({} directives)", file.path.display(), file.imports.len());
//! }
//! ```

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use graphql_import_core::{ParseResult, extract_imports};
use tracing::{debug, info};

use crate::error::{LoadError, Result};
use crate::source::{FsReader, GraphqlParser, SchemaParser, SourceReader};

/// Progress of a file within one load operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Parsed and registered; its imports are still being followed.
    Loading,
    /// Parsed and every import resolved.
    Loaded,
}

/// A single loaded schema file.
#[derive(Debug)]
pub struct LoadedSchema<S> {
    /// Normalized absolute path the file was loaded from.
    pub path: PathBuf,
    /// Structural parse of the file.
    pub schema: S,
    /// Directives found in the file, in document order.
    pub imports: Vec<ParseResult>,
    pub state: LoadState,
}

/// Visited set for one load operation, keyed by normalized absolute path.
///
/// Doubles as the result of [`SchemaLoader::load`]. A set must not be shared
/// between concurrent root loads; give each its own.
#[derive(Debug)]
pub struct LoadedSchemas<S> {
    root: Option<PathBuf>,
    order: Vec<PathBuf>,
    entries: HashMap<PathBuf, LoadedSchema<S>>,
}

impl<S> LoadedSchemas<S> {
    pub fn new() -> Self {
        Self {
            root: None,
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Path of the first file loaded into this set.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn root_schema(&self) -> Option<&S> {
        self.root
            .as_ref()
            .and_then(|root| self.entries.get(root))
            .map(|entry| &entry.schema)
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&LoadedSchema<S>> {
        self.entries.get(path.as_ref())
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.entries.contains_key(path.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates loaded files in the order they were first visited.
    pub fn iter(&self) -> impl Iterator<Item = &LoadedSchema<S>> {
        self.order.iter().filter_map(|path| self.entries.get(path))
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.order.iter().map(PathBuf::as_path)
    }

    /// Consumes the set, keeping only path → schema.
    pub fn into_schemas(self) -> HashMap<PathBuf, S> {
        self.entries
            .into_iter()
            .map(|(path, entry)| (path, entry.schema))
            .collect()
    }

    fn insert(&mut self, path: PathBuf, schema: S) {
        if self.root.is_none() {
            self.root = Some(path.clone());
        }
        self.order.push(path.clone());
        self.entries.insert(
            path.clone(),
            LoadedSchema {
                path,
                schema,
                imports: Vec::new(),
                state: LoadState::Loading,
            },
        );
    }

    fn finish(&mut self, path: &Path, imports: Vec<ParseResult>) {
        if let Some(entry) = self.entries.get_mut(path) {
            entry.imports = imports;
            entry.state = LoadState::Loaded;
        }
    }
}

impl<S> Default for LoadedSchemas<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads a schema file and, transitively, every file it imports.
///
/// Generic over the structural parser and the source reader so that
/// alternative grammars or in-memory sources can be plugged in.
#[derive(Debug, Clone, Default)]
pub struct SchemaLoader<P = GraphqlParser, R = FsReader> {
    parser: P,
    reader: R,
}

impl SchemaLoader {
    /// A loader that parses GraphQL SDL read from the file system.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: SchemaParser, R: SourceReader> SchemaLoader<P, R> {
    pub fn with_parts(parser: P, reader: R) -> Self {
        Self { parser, reader }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Loads `root` and everything reachable through its imports into a fresh
    /// set.
    ///
    /// # Errors
    ///
    /// Returns the first failure encountered anywhere in the import graph:
    /// [`LoadError::Io`] for unreadable files, [`LoadError::SchemaParse`] for
    /// files the structural parser rejects, and [`LoadError::Directive`] for
    /// malformed directives.
    pub fn load(&self, root: impl AsRef<Path>) -> Result<LoadedSchemas<P::Schema>> {
        let mut visited = LoadedSchemas::new();
        self.load_into(root, &mut visited)?;
        info!(
            root = %visited.root().unwrap_or(Path::new("")).display(),
            files = visited.len(),
            "Loaded schema graph"
        );
        Ok(visited)
    }

    /// Loads `path` into an existing set, skipping anything already in it.
    ///
    /// `path` is made absolute against the current directory and normalized
    /// first.
    pub fn load_into(
        &self,
        path: impl AsRef<Path>,
        visited: &mut LoadedSchemas<P::Schema>,
    ) -> Result<()> {
        let path = path.as_ref();
        let absolute = std::path::absolute(path).map_err(|e| LoadError::io(path, e))?;
        self.load_file(normalize_path(&absolute), visited)
    }

    fn load_file(&self, path: PathBuf, visited: &mut LoadedSchemas<P::Schema>) -> Result<()> {
        if let Some(entry) = visited.get(&path) {
            match entry.state {
                LoadState::Loading => debug!(path = %path.display(), "Import cycle, file is already loading"),
                LoadState::Loaded => debug!(path = %path.display(), "Skipping already loaded file"),
            }
            return Ok(());
        }

        debug!(path = %path.display(), "Loading schema file");
        let text = self
            .reader
            .read_file(&path)
            .map_err(|e| LoadError::io(&path, e))?;

        let schema = self
            .parser
            .parse_structure(&path, &text)
            .map_err(|source| LoadError::SchemaParse {
                path: path.clone(),
                source,
            })?;
        visited.insert(path.clone(), schema);

        let imports = extract_imports(&text).map_err(|source| LoadError::Directive {
            path: path.clone(),
            source,
        })?;

        let dir = path.parent().unwrap_or(Path::new(""));
        for import in &imports {
            let target = normalize_path(&resolve_import(dir, &import.from));
            debug!(from = %path.display(), target = %target.display(), "Following import");
            self.load_file(target, visited)?;
        }

        visited.finish(&path, imports);
        Ok(())
    }
}

/// Joins `from` onto `dir`, keeping the result under `dir` even when `from`
/// is absolute. Root and prefix components of `from` are dropped.
fn resolve_import(dir: &Path, from: &str) -> PathBuf {
    let mut target = dir.to_path_buf();
    for component in Path::new(from).components() {
        match component {
            Component::RootDir | Component::Prefix(_) => {}
            other => target.push(other.as_os_str()),
        }
    }
    target
}

/// Lexically removes `.` components and folds `..` into its parent.
///
/// The file system is not consulted, so symlinks are not resolved. A `..`
/// that would climb above the root is dropped.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
