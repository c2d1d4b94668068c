//! The virtual filesystem seam.
//!
//! Everything in this crate reaches the analysis engine through
//! [`VfsProvider`], a two-method capability trait mirroring the engine's
//! own listing and ranged-read calls. Any binding (native engine, local
//! directory, in-memory fixture) is one more implementation of it.

use std::collections::HashMap;

/// Path separator used by the virtual filesystem.
pub const SEPARATOR: char = '\\';

/// One child of a listed directory, as reported by the engine.
///
/// Transient: listings are re-fetched on every call and entries are never
/// cached beyond the processing of the current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VfsEntry {
    pub name: String,
    pub is_directory: bool,
    pub size: u64,
}

/// Listing and ranged-read access to the virtual filesystem.
pub trait VfsProvider {
    /// List the children of `path`. An engine-level failure is reported as
    /// an empty listing (logged by the implementation), never an error.
    fn list_directory(&self, path: &str) -> Vec<VfsEntry>;

    /// Read up to `length` bytes of `path` starting at `offset`. The
    /// returned slice may be shorter than requested; `None` or an empty
    /// slice signals end-of-data. Failures are treated as empty reads.
    fn read_range(&self, path: &str, offset: u64, length: usize) -> Option<Vec<u8>>;
}

/// Normalize a directory path to the `\`-wrapped form used throughout
/// traversal: leading and trailing separator, `""` meaning the root.
pub fn normalize_dir(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 2);
    if !path.starts_with(SEPARATOR) {
        out.push(SEPARATOR);
    }
    out.push_str(path);
    if !out.ends_with(SEPARATOR) {
        out.push(SEPARATOR);
    }
    out
}

/// An in-memory [`VfsProvider`] holding a fixed tree.
///
/// Used by this crate's tests as the stand-in for the engine; listings are
/// reported in insertion order.
#[derive(Debug, Default)]
pub struct MemoryVfs {
    dirs: HashMap<String, Vec<VfsEntry>>,
    files: HashMap<String, Vec<u8>>,
}

impl MemoryVfs {
    pub fn new() -> MemoryVfs {
        let mut dirs = HashMap::new();
        dirs.insert(String::from("\\"), Vec::new());
        MemoryVfs {
            dirs,
            files: HashMap::new(),
        }
    }

    /// Add a file at `path` (for example `\Windows\a.log`), creating every
    /// missing ancestor directory.
    pub fn add_file(&mut self, path: &str, contents: &[u8]) {
        let (parent, name) = split_parent(path);
        self.ensure_directory(&parent);
        self.insert_entry(
            &parent,
            VfsEntry {
                name: name.to_string(),
                is_directory: false,
                size: contents.len() as u64,
            },
        );
        self.files.insert(path.to_string(), contents.to_vec());
    }

    /// Add an (possibly empty) directory at `path`, creating ancestors.
    pub fn add_directory(&mut self, path: &str) {
        self.ensure_directory(&normalize_dir(path));
    }

    fn ensure_directory(&mut self, dir: &str) {
        if self.dirs.contains_key(dir) {
            return;
        }
        let trimmed = dir.trim_matches(SEPARATOR);
        if !trimmed.is_empty() {
            let (parent, name) = split_parent(dir.trim_end_matches(SEPARATOR));
            self.ensure_directory(&parent);
            self.insert_entry(
                &parent,
                VfsEntry {
                    name: name.to_string(),
                    is_directory: true,
                    size: 0,
                },
            );
        }
        self.dirs.entry(dir.to_string()).or_default();
    }

    fn insert_entry(&mut self, dir: &str, entry: VfsEntry) {
        let listing = self.dirs.entry(dir.to_string()).or_default();
        if !listing.iter().any(|e| e.name == entry.name) {
            listing.push(entry);
        }
    }
}

/// Split `\a\b\name` into (`\a\b\`, `name`).
fn split_parent(path: &str) -> (String, &str) {
    match path.rfind(SEPARATOR) {
        Some(idx) => (path[..=idx].to_string(), &path[idx + 1..]),
        None => (String::from("\\"), path),
    }
}

impl VfsProvider for MemoryVfs {
    fn list_directory(&self, path: &str) -> Vec<VfsEntry> {
        self.dirs
            .get(&normalize_dir(path))
            .cloned()
            .unwrap_or_default()
    }

    fn read_range(&self, path: &str, offset: u64, length: usize) -> Option<Vec<u8>> {
        let contents = self.files.get(path)?;
        let start = offset as usize;
        if start >= contents.len() {
            return Some(Vec::new());
        }
        let end = std::cmp::min(start + length, contents.len());
        Some(contents[start..end].to_vec())
    }
}
