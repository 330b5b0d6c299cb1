//! Line-oriented extraction of directives from a whole schema document.

use crate::directive::ParseResult;
use crate::error::ExtractError;
use crate::parser::DirectiveParser;

/// Literal prefix that marks a directive line.
pub const DIRECTIVE_MARKER: &str = "# import";

/// Parses every directive line in `document`, in document order.
///
/// Only lines that start with [`DIRECTIVE_MARKER`] (case-sensitive, no leading
/// whitespace) are parsed; everything else is ignored. `\n`, `\r\n` and lone
/// `\r` line endings are all recognized. The first failing line aborts the
/// scan.
///
/// # Examples
///
/// ```
/// use graphql_import_core::extract_imports;
///
/// let schema = "\
/// ## import User from \"user.graphql\"
/// ## a plain comment
/// type Query { me: User }
/// ";
/// let results = extract_imports(schema).unwrap();
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].from, "user.graphql");
/// ```
pub fn extract_imports(document: &str) -> Result<Vec<ParseResult>, ExtractError> {
    let mut results = Vec::new();

    for (idx, line) in lines(document).enumerate() {
        if !line.starts_with(DIRECTIVE_MARKER) {
            continue;
        }
        let result = DirectiveParser::new(line)
            .parse()
            .map_err(|source| ExtractError {
                line: idx + 1,
                source,
            })?;
        results.push(result);
    }

    Ok(results)
}

fn lines(document: &str) -> impl Iterator<Item = &str> {
    document.split('\n').flat_map(|line| {
        let line = line.strip_suffix('\r').unwrap_or(line);
        line.split('\r')
    })
}
