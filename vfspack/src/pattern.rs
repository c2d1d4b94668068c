//! Wildcard segment compilation.
//!
//! A segment is one `\`-delimited component of a virtual-filesystem path.
//! `*` matches any run of characters within the segment, `?` exactly one;
//! neither crosses the separator. The recursive `**` segment never reaches
//! this module: traversal consumes it as "zero or more directory levels".

use regex::Regex;

use crate::error::Result;

/// True if `path` contains any wildcard character.
pub fn contains_wildcard(path: &str) -> bool {
    path.contains('*') || path.contains('?')
}

/// Compile a single path segment into an anchored matcher.
///
/// Compilation is pure: the same segment always yields an equivalent
/// matcher. An empty segment matches only the empty name.
pub fn compile_segment(segment: &str) -> Result<Regex> {
    let mut expr = String::with_capacity(segment.len() + 8);
    expr.push('^');
    for c in segment.chars() {
        match c {
            '*' => expr.push_str(r"[^\\]*"),
            '?' => expr.push_str(r"[^\\]"),
            _ => expr.push_str(&regex::escape(&c.to_string())),
        }
    }
    expr.push('$');
    Ok(Regex::new(&expr)?)
}
