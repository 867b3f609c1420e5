//! Argfile expander — `@file` tokens become their lines, inline.

use std::fs;
use std::path::PathBuf;

use crate::error::WrapperError;

/// Expand `@argfile` indirection tokens, exactly one level deep.
///
/// A token starting with `@` is replaced by the lines of the named file,
/// in file order, at the same position; all other tokens pass through
/// unchanged. A line wrapped in single quotes is stripped of exactly one
/// pair but not otherwise unescaped. Lines produced by the expansion are
/// never re-expanded.
pub fn expand(args: &[String]) -> Result<Vec<String>, WrapperError> {
    let mut expanded = Vec::with_capacity(args.len());

    for arg in args {
        let Some(path) = arg.strip_prefix('@') else {
            expanded.push(arg.clone());
            continue;
        };

        let content = fs::read_to_string(path).map_err(|e| WrapperError::Argfile {
            path: PathBuf::from(path),
            source: e,
        })?;
        for line in content.lines() {
            if line.is_empty() {
                return Err(WrapperError::EmptyArgfileLine);
            }
            expanded.push(unquote(line).to_string());
        }
    }

    Ok(expanded)
}

/// Strip one pair of surrounding single quotes, if both are present.
fn unquote(line: &str) -> &str {
    line.strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .unwrap_or(line)
}
