//! The driving loop: selection rules in, finished archive out.

use std::io::{Seek, Write};

use crate::archive::{ArchiveBuilder, ArchiveSummary};
use crate::error::Result;
use crate::pattern::contains_wildcard;
use crate::selection::SelectionRule;
use crate::traverse::{expand_parent_path, resolve_names};
use crate::vfs::{normalize_dir, VfsProvider};

/// Package every entry matched by `rules` into a zip archive written to
/// `sink`.
///
/// Rules are processed in order; a wildcarded parent path is expanded to
/// concrete directories first, then the name pattern is resolved within
/// each. The pipeline is single-threaded and synchronous: one matched
/// entry is fully written before the next is considered. Recoverable
/// conditions (missing names, failed engine calls, rediscovered entries)
/// are logged and counted; only a sink failure aborts the run.
pub fn package<W: Write + Seek>(
    provider: &dyn VfsProvider,
    rules: &[SelectionRule],
    sink: W,
) -> Result<ArchiveSummary> {
    let mut builder = ArchiveBuilder::new(sink);

    for rule in rules {
        let directories = if contains_wildcard(&rule.parent_path) {
            expand_parent_path(provider, &rule.parent_path)?
        } else {
            vec![normalize_dir(&rule.parent_path)]
        };

        for directory in directories {
            for matched in resolve_names(provider, &directory, &rule.name_pattern)? {
                builder.add_entry(provider, &matched)?;
            }
        }
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::selection::parse_rules;
    use crate::vfs::MemoryVfs;

    #[test]
    fn test_empty_rule_set_yields_empty_archive() {
        let vfs = MemoryVfs::new();
        let summary = package(&vfs, &[], Cursor::new(Vec::new())).unwrap();
        assert_eq!(summary.entries_written, 0);
    }

    #[test]
    fn test_rules_against_missing_tree_are_recoverable() {
        let vfs = MemoryVfs::new();
        let rules = parse_rules("\\gone\\file.txt\n\\also\\*\\gone\\**");
        let summary = package(&vfs, &rules, Cursor::new(Vec::new())).unwrap();
        assert_eq!(summary.entries_written, 0);
        assert_eq!(summary.duplicates_skipped, 0);
    }
}
