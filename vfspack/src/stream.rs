//! Forward-only streaming over the ranged-read primitive.

use std::io::Read;

use crate::vfs::VfsProvider;

/// Bytes requested per range-read call.
pub const CHUNK_SIZE: usize = 1024;

/// Presents one VFS file of known size as a sequential byte source.
///
/// Single-use: one reader per file, no cross-file state. A failed or empty
/// range read while bytes are still expected ends the stream early (the
/// engine's own fallible-read semantics); [`VfsReader::truncated`] reports
/// whether that happened so callers can surface a warning.
pub struct VfsReader<'a> {
    provider: &'a dyn VfsProvider,
    path: String,
    size: u64,
    delivered: u64,
    next_offset: u64,
    buffer: Vec<u8>,
    buffer_pos: usize,
    finished: bool,
}

impl<'a> VfsReader<'a> {
    pub fn new(provider: &'a dyn VfsProvider, path: &str, size: u64) -> VfsReader<'a> {
        VfsReader {
            provider,
            path: path.to_string(),
            size,
            delivered: 0,
            next_offset: 0,
            buffer: Vec::new(),
            buffer_pos: 0,
            finished: false,
        }
    }

    /// True once the stream ended before `size` bytes were delivered.
    pub fn truncated(&self) -> bool {
        self.finished && self.delivered < self.size
    }

    fn load_next_chunk(&mut self) {
        let remaining = self.size - self.delivered;
        let to_read = std::cmp::min(remaining, CHUNK_SIZE as u64) as usize;

        let chunk = self.provider.read_range(&self.path, self.next_offset, to_read);
        match chunk {
            Some(bytes) if !bytes.is_empty() => {
                self.next_offset += bytes.len() as u64;
                self.buffer = bytes;
                self.buffer_pos = 0;
            }
            _ => {
                // Treated as end-of-data, not an error.
                crate::debug_eprintln!(
                    "read of {} at offset {} returned no data",
                    self.path,
                    self.next_offset
                );
                self.finished = true;
            }
        }
    }
}

impl Read for VfsReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if self.delivered >= self.size || self.finished {
            self.finished = true;
            return Ok(0);
        }

        if self.buffer_pos >= self.buffer.len() {
            self.load_next_chunk();
            if self.finished {
                return Ok(0);
            }
        }

        let available = &self.buffer[self.buffer_pos..];
        let n = std::cmp::min(available.len(), buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.buffer_pos += n;
        self.delivered += n as u64;
        Ok(n)
    }
}
