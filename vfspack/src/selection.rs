//! Selection-list parsing.
//!
//! The list is newline-delimited text: blank lines and lines wrapped in a
//! pair of `##` markers are comments; every other line is a VFS path whose
//! final segment may be a literal name, a wildcard pattern, or `**`
//! ("everything below here, recursively").

use std::path::Path;

use crate::error::Result;
use crate::vfs::SEPARATOR;

/// The selection list shipped with the crate, collecting the usual
/// forensic outputs of a memory-analysis engine.
pub const DEFAULT_RULES: &str = include_str!("../data/files_to_collect.txt");

/// One line of configuration: a directory (possibly wildcarded) and a name
/// pattern to match within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRule {
    pub parent_path: String,
    pub name_pattern: String,
}

/// Parse a selection list, preserving line order.
///
/// A line ending in `\**` normalizes to the whole line as parent with `*`
/// as the name pattern: traversal expands the trailing `**` to every
/// directory level and `*` then matches everything within each.
pub fn parse_rules(text: &str) -> Vec<SelectionRule> {
    let mut rules = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || (line.starts_with("##") && line.ends_with("##")) {
            continue;
        }

        match line.rfind(SEPARATOR) {
            None => rules.push(SelectionRule {
                parent_path: String::new(),
                name_pattern: line.to_string(),
            }),
            Some(idx) => {
                let name = &line[idx + 1..];
                if name == "**" {
                    rules.push(SelectionRule {
                        parent_path: line.to_string(),
                        name_pattern: String::from("*"),
                    });
                } else {
                    rules.push(SelectionRule {
                        parent_path: line[..=idx].to_string(),
                        name_pattern: name.to_string(),
                    });
                }
            }
        }
    }
    rules
}

/// Load and parse a selection list from a file. Unreadable input is fatal:
/// no traversal may start without a rule set.
pub fn load_rules_file(path: &Path) -> Result<Vec<SelectionRule>> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_rules(&text))
}

/// The parsed [`DEFAULT_RULES`].
pub fn default_rules() -> Vec<SelectionRule> {
    parse_rules(DEFAULT_RULES)
}
