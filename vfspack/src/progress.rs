//! Cooperative wait for the engine's forensic pass.
//!
//! The engine reports completion through a well-known file inside the
//! virtual filesystem itself. Packaging must not start before it reads
//! 100: listings taken mid-pass would be incomplete. The wait polls at a
//! fixed interval and honors an optional deadline instead of killing the
//! process on error.

use std::io::Read;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::stream::VfsReader;
use crate::vfs::VfsProvider;

pub const PROGRESS_DIR: &str = "\\forensic\\";
pub const PROGRESS_FILE: &str = "progress_percent.txt";

/// Block until the progress file reports 100 percent.
///
/// Progress transitions are printed as they happen. A missing progress
/// file is fatal: without it there is no way to know the pass finished.
/// With `deadline` set, the wait gives up once that much time has passed.
pub fn wait_until_ready(
    provider: &dyn VfsProvider,
    poll_interval: Duration,
    deadline: Option<Duration>,
) -> Result<()> {
    let started = Instant::now();
    let mut last_reported = String::new();

    loop {
        let progress = read_progress(provider)?;
        if progress == "100" {
            println!("Forensic processing complete: {progress}%");
            return Ok(());
        }

        if progress != last_reported {
            println!("Waiting for forensic processing to complete: {progress}%");
            last_reported = progress;
        }

        if let Some(limit) = deadline {
            if started.elapsed() >= limit {
                return Err(Error::DeadlineExceeded);
            }
        }
        std::thread::sleep(poll_interval);
    }
}

fn read_progress(provider: &dyn VfsProvider) -> Result<String> {
    let listing = provider.list_directory(PROGRESS_DIR);
    let entry = listing
        .iter()
        .find(|e| !e.is_directory && e.name == PROGRESS_FILE)
        .ok_or_else(|| Error::ProgressUnavailable(format!("{PROGRESS_DIR}{PROGRESS_FILE}")))?;

    let path = format!("{PROGRESS_DIR}{PROGRESS_FILE}");
    let mut reader = VfsReader::new(provider, &path, entry.size);
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::MemoryVfs;

    #[test]
    fn test_completed_pass_returns_immediately() {
        let mut vfs = MemoryVfs::new();
        vfs.add_file("\\forensic\\progress_percent.txt", b"100");

        wait_until_ready(&vfs, Duration::from_millis(1), None).unwrap();
    }

    #[test]
    fn test_missing_progress_file_is_fatal() {
        let vfs = MemoryVfs::new();
        let err = wait_until_ready(&vfs, Duration::from_millis(1), None).unwrap_err();
        assert!(matches!(err, Error::ProgressUnavailable(_)));
    }

    #[test]
    fn test_deadline_bounds_an_unfinished_pass() {
        let mut vfs = MemoryVfs::new();
        vfs.add_file("\\forensic\\progress_percent.txt", b"42\n");

        let err = wait_until_ready(&vfs, Duration::from_millis(1), Some(Duration::ZERO))
            .unwrap_err();
        assert!(matches!(err, Error::DeadlineExceeded));
    }
}
