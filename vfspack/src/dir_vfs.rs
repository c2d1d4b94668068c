//! A [`VfsProvider`] backed by a local directory tree.
//!
//! `\`-separated VFS paths map onto host paths below a fixed root. This is
//! the provider the shipped binary runs against; a native engine binding
//! would be another implementation of the same trait.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::vfs::{VfsEntry, VfsProvider, SEPARATOR};

pub struct DirVfs {
    root: PathBuf,
}

impl DirVfs {
    pub fn new<P: AsRef<Path>>(root: P) -> DirVfs {
        DirVfs {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Map a VFS path onto the host filesystem. Paths that try to climb
    /// out of the root are rejected.
    fn host_path(&self, vfs_path: &str) -> Option<PathBuf> {
        let mut path = self.root.clone();
        for segment in vfs_path.split(SEPARATOR) {
            match segment {
                "" | "." => {}
                ".." => return None,
                name => path.push(name),
            }
        }
        Some(path)
    }
}

impl VfsProvider for DirVfs {
    fn list_directory(&self, path: &str) -> Vec<VfsEntry> {
        let Some(host) = self.host_path(path) else {
            eprintln!("Error listing files for path: {path}");
            return Vec::new();
        };

        let entries = match std::fs::read_dir(&host) {
            Ok(entries) => entries,
            Err(err) => {
                eprintln!("Error listing files for path: {path}: {err}");
                return Vec::new();
            }
        };

        let mut listing = Vec::new();
        for entry in entries.flatten() {
            let Ok(metadata) = entry.metadata() else {
                continue;
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_directory = metadata.is_dir();
            listing.push(VfsEntry {
                name,
                is_directory,
                size: if is_directory { 0 } else { metadata.len() },
            });
        }
        // read_dir order is platform-dependent; keep runs reproducible.
        listing.sort_by(|a, b| a.name.cmp(&b.name));
        listing
    }

    fn read_range(&self, path: &str, offset: u64, length: usize) -> Option<Vec<u8>> {
        let host = self.host_path(path)?;
        let mut file = match File::open(&host) {
            Ok(file) => file,
            Err(err) => {
                crate::debug_eprintln!("Error reading file {path}: {err}");
                return None;
            }
        };
        if file.seek(SeekFrom::Start(offset)).is_err() {
            return None;
        }

        let mut buffer = Vec::with_capacity(length);
        match file.take(length as u64).read_to_end(&mut buffer) {
            Ok(_) => Some(buffer),
            Err(err) => {
                crate::debug_eprintln!("Error reading file {path}: {err}");
                None
            }
        }
    }
}
