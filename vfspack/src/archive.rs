//! Deduplicating zip assembly.

use std::collections::HashSet;
use std::io::{Seek, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;
use crate::stream::VfsReader;
use crate::traverse::MatchedPath;
use crate::vfs::{VfsProvider, SEPARATOR};

/// Counters for one packaging run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub entries_written: u64,
    pub duplicates_skipped: u64,
    pub truncated_files: u64,
}

/// Writes matched entries into a zip archive, each exactly once.
///
/// The set of already-written paths is owned by the builder for one run:
/// overlapping wildcard rules commonly rediscover the same entry, and the
/// second discovery is skipped with a warning rather than failing the run.
/// File content streams through [`VfsReader`] in chunk-sized increments;
/// no entry is ever buffered whole.
pub struct ArchiveBuilder<W: Write + Seek> {
    writer: ZipWriter<W>,
    seen: HashSet<String>,
    summary: ArchiveSummary,
}

impl<W: Write + Seek> ArchiveBuilder<W> {
    pub fn new(sink: W) -> ArchiveBuilder<W> {
        ArchiveBuilder {
            writer: ZipWriter::new(sink),
            seen: HashSet::new(),
            summary: ArchiveSummary::default(),
        }
    }

    /// Append one matched entry. Directories become zero-length entries
    /// with a trailing `/`; files are copied to completion. Only sink
    /// failures are fatal.
    pub fn add_entry(&mut self, provider: &dyn VfsProvider, matched: &MatchedPath) -> Result<()> {
        let mut zip_path = zip_entry_path(&matched.full_path);
        if matched.entry.is_directory {
            zip_path.push('/');
        }

        if self.seen.contains(&zip_path) {
            eprintln!("Duplicate entry skipped: {zip_path}");
            self.summary.duplicates_skipped += 1;
            return Ok(());
        }

        if matched.entry.is_directory {
            self.writer
                .add_directory(zip_path.clone(), SimpleFileOptions::default())?;
        } else {
            let options =
                SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
            self.writer.start_file(zip_path.clone(), options)?;

            let mut reader = VfsReader::new(provider, &matched.full_path, matched.entry.size);
            std::io::copy(&mut reader, &mut self.writer)?;
            if reader.truncated() {
                eprintln!("Short read, entry truncated: {zip_path}");
                self.summary.truncated_files += 1;
            }
        }

        self.seen.insert(zip_path);
        self.summary.entries_written += 1;
        Ok(())
    }

    pub fn summary(&self) -> &ArchiveSummary {
        &self.summary
    }

    /// Finalize the archive and release the sink.
    pub fn finish(mut self) -> Result<ArchiveSummary> {
        self.writer.finish()?;
        Ok(self.summary)
    }
}

/// Normalize a VFS path to the archive convention: `/` separators, no
/// leading separator.
pub fn zip_entry_path(path: &str) -> String {
    let converted = path.replace(SEPARATOR, "/");
    match converted.strip_prefix('/') {
        Some(rest) => rest.to_string(),
        None => converted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::vfs::{MemoryVfs, VfsEntry};
    use zip::ZipArchive;

    fn matched_file(path: &str, name: &str, size: u64) -> MatchedPath {
        MatchedPath {
            full_path: path.to_string(),
            entry: VfsEntry {
                name: name.to_string(),
                is_directory: false,
                size,
            },
        }
    }

    #[test]
    fn test_zip_entry_path() {
        assert_eq!(zip_entry_path("\\Windows\\a.log"), "Windows/a.log");
        assert_eq!(zip_entry_path("Windows\\a.log"), "Windows/a.log");
        assert_eq!(zip_entry_path("\\"), "");
    }

    #[test]
    fn test_file_content_round_trips() {
        let mut vfs = MemoryVfs::new();
        vfs.add_file("\\a\\file.txt", b"contents here");

        let mut builder = ArchiveBuilder::new(Cursor::new(Vec::new()));
        builder
            .add_entry(&vfs, &matched_file("\\a\\file.txt", "file.txt", 13))
            .unwrap();
        let cursor = builder.writer.finish().unwrap();

        let mut archive = ZipArchive::new(cursor).unwrap();
        assert_eq!(archive.len(), 1);
        let mut entry = archive.by_name("a/file.txt").unwrap();
        let mut out = String::new();
        std::io::Read::read_to_string(&mut entry, &mut out).unwrap();
        assert_eq!(out, "contents here");
    }

    #[test]
    fn test_duplicate_is_skipped_once_warned_once() {
        let mut vfs = MemoryVfs::new();
        vfs.add_file("\\a\\file.txt", b"x");

        let mut builder = ArchiveBuilder::new(Cursor::new(Vec::new()));
        let matched = matched_file("\\a\\file.txt", "file.txt", 1);
        builder.add_entry(&vfs, &matched).unwrap();
        builder.add_entry(&vfs, &matched).unwrap();

        assert_eq!(builder.summary().entries_written, 1);
        assert_eq!(builder.summary().duplicates_skipped, 1);

        let summary = builder.finish().unwrap();
        assert_eq!(summary.entries_written, 1);
    }

    #[test]
    fn test_directory_entry_has_trailing_slash_and_no_content() {
        let vfs = MemoryVfs::new();
        let matched = MatchedPath {
            full_path: String::from("\\Users\\bob\\Documents"),
            entry: VfsEntry {
                name: String::from("Documents"),
                is_directory: true,
                size: 0,
            },
        };

        let mut builder = ArchiveBuilder::new(Cursor::new(Vec::new()));
        builder.add_entry(&vfs, &matched).unwrap();
        let cursor = builder.writer.finish().unwrap();

        let mut archive = ZipArchive::new(cursor).unwrap();
        let entry = archive.by_name("Users/bob/Documents/").unwrap();
        assert!(entry.is_dir());
        assert_eq!(entry.size(), 0);
    }

    #[test]
    fn test_file_and_directory_with_same_stem_are_distinct() {
        let mut vfs = MemoryVfs::new();
        vfs.add_file("\\a\\Logs", b"not a dir");

        let mut builder = ArchiveBuilder::new(Cursor::new(Vec::new()));
        builder
            .add_entry(&vfs, &matched_file("\\a\\Logs", "Logs", 9))
            .unwrap();
        builder
            .add_entry(
                &vfs,
                &MatchedPath {
                    full_path: String::from("\\a\\Logs"),
                    entry: VfsEntry {
                        name: String::from("Logs"),
                        is_directory: true,
                        size: 0,
                    },
                },
            )
            .unwrap();

        assert_eq!(builder.summary().entries_written, 2);
        assert_eq!(builder.summary().duplicates_skipped, 0);
    }

    #[test]
    fn test_truncated_read_is_counted_not_fatal() {
        struct OneChunkVfs;
        impl VfsProvider for OneChunkVfs {
            fn list_directory(&self, _path: &str) -> Vec<VfsEntry> {
                Vec::new()
            }
            fn read_range(&self, _p: &str, offset: u64, _l: usize) -> Option<Vec<u8>> {
                if offset == 0 {
                    Some(vec![1u8; 10])
                } else {
                    None
                }
            }
        }

        let mut builder = ArchiveBuilder::new(Cursor::new(Vec::new()));
        builder
            .add_entry(&OneChunkVfs, &matched_file("\\f.bin", "f.bin", 5000))
            .unwrap();

        assert_eq!(builder.summary().truncated_files, 1);
        let summary = builder.finish().unwrap();
        assert_eq!(summary.entries_written, 1);
    }
}
