//! Glob-driven selection and zip packaging of a virtual filesystem.
//!
//! The virtual filesystem is an opaque collaborator: it is observable only
//! through two primitives, "list a directory" and "read a byte range of a
//! file", exposed here as the [`vfs::VfsProvider`] trait. On top of that
//! seam this crate provides:
//!
//! - [`selection`] - parsing of the newline-delimited list of paths and
//!   patterns to collect,
//! - [`pattern`] - compilation of a single wildcard path segment into a
//!   name matcher,
//! - [`traverse`] - expansion of wildcarded parent paths (including the
//!   recursive `**` segment) into concrete directories, and resolution of
//!   name patterns within them,
//! - [`stream`] - a forward-only `std::io::Read` adapter over the chunked
//!   range-read primitive,
//! - [`archive`] - deduplicating zip assembly of the matched entries,
//! - [`packager`] - the driving loop tying the above together,
//! - [`progress`] - a cooperative wait for the engine's readiness file.
//!
//! ## Packaging a tree
//!
//! ```rust
//! use std::io::Cursor;
//! use vfspack::packager;
//! use vfspack::selection::parse_rules;
//! use vfspack::vfs::MemoryVfs;
//!
//! fn main() -> Result<(), vfspack::error::Error> {
//!     let mut vfs = MemoryVfs::new();
//!     vfs.add_file("\\Windows\\System32\\drivers\\etc\\hosts", b"127.0.0.1");
//!
//!     let rules = parse_rules("\\Windows\\**");
//!     let summary = packager::package(&vfs, &rules, Cursor::new(Vec::new()))?;
//!     assert_eq!(summary.entries_written, 4);
//!     Ok(())
//! }
//! ```
//!
//! Paths inside the virtual filesystem use `\` as separator (mirroring the
//! engine's own naming); archive entry paths always use `/`.

pub mod archive;
pub mod dir_vfs;
pub mod error;
pub mod packager;
pub mod pattern;
pub mod progress;
pub mod selection;
pub mod stream;
pub mod traverse;
pub mod utils;
pub mod vfs;
