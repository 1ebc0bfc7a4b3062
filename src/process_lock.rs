//! Single-instance guard
//!
//! Takes a non-blocking exclusive advisory lock on a file. A second run finds the lock held and
//! backs off instead of waiting. The lock is released when the guard drops (or the process dies).

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::errors::ScreenerResult;
use crate::logger::{self, LogTag};

/// Held for the lifetime of a run
#[derive(Debug)]
pub struct ProcessLock {
    path: PathBuf,
    // keeps the descriptor (and so the flock) alive
    _file: File,
}

impl ProcessLock {
    /// `Ok(None)` when another process holds the lock
    pub fn try_acquire(path: &Path) -> ScreenerResult<Option<ProcessLock>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let Some(mut file) = platform::lock(path)? else {
            logger::debug(
                LogTag::Lock,
                &format!("Lock {} is held by another process", path.display()),
            );
            return Ok(None);
        };

        write_pid(&mut file);
        logger::debug(LogTag::Lock, &format!("Acquired {}", path.display()));

        Ok(Some(ProcessLock {
            path: path.to_path_buf(),
            _file: file,
        }))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Best effort; the PID is only there for humans
fn write_pid(file: &mut File) {
    use std::io::{Seek, SeekFrom, Write};

    let result = file
        .set_len(0)
        .and_then(|_| file.seek(SeekFrom::Start(0)))
        .and_then(|_| writeln!(file, "{}", std::process::id()))
        .and_then(|_| file.flush());
    if let Err(e) = result {
        logger::debug(LogTag::Lock, &format!("Could not write PID: {}", e));
    }
}

#[cfg(unix)]
mod platform {
    use std::fs::{File, OpenOptions};
    use std::io;
    use std::os::unix::io::AsRawFd;
    use std::path::Path;

    use crate::errors::{ScreenerError, ScreenerResult};

    pub fn lock(path: &Path) -> ScreenerResult<Option<File>> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        let rc = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) };
        if rc == 0 {
            return Ok(Some(file));
        }

        let err = io::Error::last_os_error();
        if err.kind() == io::ErrorKind::WouldBlock {
            return Ok(None);
        }
        Err(ScreenerError::Lock(format!(
            "flock on {} failed: {}",
            path.display(),
            err
        )))
    }
}

#[cfg(not(unix))]
mod platform {
    use std::fs::{File, OpenOptions};
    use std::io;
    use std::path::Path;

    use crate::errors::{ScreenerError, ScreenerResult};

    /// Exclusive create; the file's existence is the lock
    pub fn lock(path: &Path) -> ScreenerResult<Option<File>> {
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => Ok(Some(file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(None),
            Err(e) => Err(ScreenerError::Lock(format!(
                "create {} failed: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(not(unix))]
impl Drop for ProcessLock {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
