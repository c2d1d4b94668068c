//! Wildcard path expansion and name resolution.
//!
//! A selection rule's parent path may contain wildcard segments, including
//! the recursive `**`. Expansion resolves it into concrete directories
//! using only the listing primitive; the tree is never materialized
//! locally. The worklist keeps stack depth independent of how deep the
//! virtual filesystem goes.

use std::collections::VecDeque;

use crate::error::Result;
use crate::pattern::{compile_segment, contains_wildcard};
use crate::vfs::{normalize_dir, VfsEntry, VfsProvider, SEPARATOR};

/// A concrete path produced by traversal, plus its listing metadata.
#[derive(Debug, Clone)]
pub struct MatchedPath {
    pub full_path: String,
    pub entry: VfsEntry,
}

/// Expand a parent path with wildcard segments into every concrete
/// directory it denotes. Returned paths carry a trailing separator.
///
/// The literal prefix of the path costs no listing calls; traversal starts
/// there. A `**` segment accepts the current directory as-is and stays
/// active one level down in every child directory, which terminates
/// because the tree is finite (a cyclic VFS is a documented risk, not
/// handled here).
pub fn expand_parent_path(provider: &dyn VfsProvider, parent_path: &str) -> Result<Vec<String>> {
    let trimmed = parent_path.trim_start_matches(SEPARATOR);
    let segments: Vec<&str> = trimmed
        .split(SEPARATOR)
        .filter(|s| !s.is_empty())
        .collect();

    let mut prefix = String::from("\\");
    let mut rest: &[&str] = &segments;
    for (i, segment) in segments.iter().enumerate() {
        if contains_wildcard(segment) {
            rest = &segments[i..];
            break;
        }
        prefix.push_str(segment);
        prefix.push(SEPARATOR);
        rest = &segments[i + 1..];
    }

    let mut matched = Vec::new();
    let mut worklist: VecDeque<(String, usize)> = VecDeque::new();
    worklist.push_back((prefix, 0));

    while let Some((current, index)) = worklist.pop_front() {
        if index == rest.len() {
            matched.push(current);
            continue;
        }

        let segment = rest[index];
        let listing = provider.list_directory(&current);

        if segment == "**" {
            // Zero levels: the current directory continues with the
            // remaining segments. The same `**` also applies in every
            // child directory.
            worklist.push_back((current.clone(), index + 1));
            for entry in &listing {
                if entry.is_directory {
                    worklist.push_back((child_dir(&current, &entry.name), index));
                }
            }
        } else if contains_wildcard(segment) {
            let matcher = compile_segment(segment)?;
            for entry in &listing {
                if entry.is_directory && matcher.is_match(&entry.name) {
                    worklist.push_back((child_dir(&current, &entry.name), index + 1));
                }
            }
        } else {
            for entry in &listing {
                if entry.is_directory && entry.name == segment {
                    worklist.push_back((child_dir(&current, &entry.name), index + 1));
                }
            }
        }
    }

    Ok(matched)
}

/// Resolve a name pattern within one concrete directory.
///
/// An exact name absent from the listing is recoverable: logged, skipped,
/// the run continues. Wildcard patterns match files and directories alike.
pub fn resolve_names(
    provider: &dyn VfsProvider,
    directory: &str,
    name_pattern: &str,
) -> Result<Vec<MatchedPath>> {
    let directory = normalize_dir(directory);
    let listing = provider.list_directory(&directory);

    if !contains_wildcard(name_pattern) {
        return Ok(match listing.iter().find(|e| e.name == name_pattern) {
            Some(entry) => vec![MatchedPath {
                full_path: format!("{directory}{}", entry.name),
                entry: entry.clone(),
            }],
            None => {
                eprintln!("File not found: {directory}{name_pattern}");
                Vec::new()
            }
        });
    }

    let matcher = compile_segment(name_pattern)?;
    Ok(listing
        .into_iter()
        .filter(|entry| matcher.is_match(&entry.name))
        .map(|entry| MatchedPath {
            full_path: format!("{directory}{}", entry.name),
            entry,
        })
        .collect())
}

fn child_dir(current: &str, name: &str) -> String {
    format!("{current}{name}{SEPARATOR}")
}
