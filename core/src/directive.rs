//! Parsed form of `# import` directives.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One selector listed in a directive.
///
/// Four shapes are representable: `Name`, `Name.Nested`, `Name.*` and a bare
/// `*`. A bare wildcard has an empty name and never carries a nested part; the
/// constructors are the only way to build an entry, so that holds for every
/// value in circulation.
///
/// # Examples
///
/// ```
/// use graphql_import_core::ImportEntry;
///
/// let entry = ImportEntry::named("Mutation").with_nested(ImportEntry::wildcard());
/// assert_eq!(entry.name(), "Mutation");
/// assert!(entry.nested().is_some_and(ImportEntry::is_wildcard));
/// assert_eq!(entry.to_string(), "Mutation.*");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportEntry {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nested: Option<Box<ImportEntry>>,
    #[serde(default)]
    is_wildcard: bool,
}

impl ImportEntry {
    /// A plain named selector such as `User`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nested: None,
            is_wildcard: false,
        }
    }

    /// A bare `*` selector.
    pub fn wildcard() -> Self {
        Self {
            name: String::new(),
            nested: None,
            is_wildcard: true,
        }
    }

    /// Attaches a one-level nested selector. Ignored on a bare wildcard.
    pub fn with_nested(mut self, nested: ImportEntry) -> Self {
        if !self.is_wildcard {
            self.nested = Some(Box::new(nested));
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nested(&self) -> Option<&ImportEntry> {
        self.nested.as_deref()
    }

    pub fn is_wildcard(&self) -> bool {
        self.is_wildcard
    }
}

impl fmt::Display for ImportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wildcard {
            return f.write_str("*");
        }
        f.write_str(&self.name)?;
        if let Some(nested) = &self.nested {
            write!(f, ".{nested}")?;
        }
        Ok(())
    }
}

/// A parsed directive line: the selectors in source order plus the import
/// target exactly as written (unescaped, not yet resolved against any
/// directory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub imports: Vec<ImportEntry>,
    pub from: String,
}

impl ParseResult {
    pub fn new(imports: Vec<ImportEntry>, from: impl Into<String>) -> Self {
        Self {
            imports,
            from: from.into(),
        }
    }

    /// Returns `true` if any selector is a bare `*`.
    pub fn imports_everything(&self) -> bool {
        self.imports.iter().any(ImportEntry::is_wildcard)
    }

    /// Top-level selector names, skipping bare wildcards.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.imports
            .iter()
            .filter(|entry| !entry.is_wildcard())
            .map(ImportEntry::name)
    }
}

impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("# import ")?;
        for (i, entry) in self.imports.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str(" from \"")?;
        write_escaped(f, &self.from)?;
        f.write_str("\"")
    }
}

/// Writes `value` using only the escapes a directive string literal accepts.
fn write_escaped(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    for ch in value.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{8}' => f.write_str("\\b")?,
            '\u{c}' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c => write!(f, "{c}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_rejects_nested() {
        let entry = ImportEntry::wildcard().with_nested(ImportEntry::named("X"));
        assert!(entry.is_wildcard());
        assert!(entry.name().is_empty());
        assert!(entry.nested().is_none());
    }

    #[test]
    fn test_entry_display() {
        assert_eq!(ImportEntry::named("User").to_string(), "User");
        assert_eq!(
            ImportEntry::named("Query")
                .with_nested(ImportEntry::named("users"))
                .to_string(),
            "Query.users"
        );
        assert_eq!(ImportEntry::wildcard().to_string(), "*");
    }

    #[test]
    fn test_parse_result_display_and_names() {
        let result = ParseResult::new(
            vec![
                ImportEntry::named("X"),
                ImportEntry::wildcard(),
                ImportEntry::named("Mutation").with_nested(ImportEntry::wildcard()),
            ],
            "x.graphql",
        );
        assert_eq!(
            result.to_string(),
            r#"# import X, *, Mutation.* from "x.graphql""#
        );
        assert!(result.imports_everything());
        assert_eq!(result.names().collect::<Vec<_>>(), vec!["X", "Mutation"]);
    }

    #[test]
    fn test_display_escapes_reparse_to_same_path() {
        let text = r#"# import A from "dir\\a\"q\b\f\n\r\t.graphql""#;
        let result = crate::parse_directive(text).unwrap();
        assert_eq!(result.from, "dir\\a\"q\u{8}\u{c}\n\r\t.graphql");
        assert_eq!(result.to_string(), text);
        assert_eq!(crate::parse_directive(&result.to_string()).unwrap(), result);
    }

    #[test]
    fn test_serialized_shape() {
        let result = ParseResult::new(
            vec![ImportEntry::named("Query").with_nested(ImportEntry::wildcard())],
            "q.graphql",
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "imports": [{
                    "name": "Query",
                    "nested": { "name": "", "is_wildcard": true },
                    "is_wildcard": false
                }],
                "from": "q.graphql"
            })
        );
    }
}
