//! File wrappers
//!
//! [`File`] binds a validated path; [`ReadHandle`] owns an open read stream.
//! Open/create operations check their preconditions in order and report the
//! code of whichever fails first.

use crate::path::FsPath;
use basalt_core::domain::error::BasaltError;
use basalt_core::domain::outcome::Outcome;
use basalt_core::domain::payload::DropSafe;
use std::fs;
use std::io::Read;
use tracing::debug;

/// Open read stream over a regular file
#[derive(Debug)]
pub struct ReadHandle {
    stream: fs::File,
}

impl DropSafe for ReadHandle {}

impl ReadHandle {
    /// Read the remaining stream into one string
    pub fn dump(&mut self) -> Outcome<String> {
        let mut buffer = String::new();
        match self.stream.read_to_string(&mut buffer) {
            Ok(_) => Outcome::Ok(buffer),
            Err(error) => {
                debug!(?error, "file dump failed");
                Outcome::Err(BasaltError::Failure)
            }
        }
    }
}

/// Path-bound file handle
#[derive(Debug)]
pub struct File {
    path: FsPath,
}

impl DropSafe for File {}

impl File {
    /// The bound path
    pub fn path(&self) -> &FsPath {
        &self.path
    }

    /// Open a read stream over the bound file
    pub fn read(&self) -> Outcome<ReadHandle> {
        if !self.path.exists() {
            return Outcome::Err(BasaltError::NoSuchPath);
        }
        if !self.path.is_file() {
            return Outcome::Err(BasaltError::NoSuchFile);
        }

        match fs::File::open(self.path.get()) {
            Ok(stream) => Outcome::Ok(ReadHandle { stream }),
            Err(error) => {
                debug!(path = %self.path.get().display(), ?error, "open for read failed");
                Outcome::Err(BasaltError::FailedToOpen)
            }
        }
    }
}

/// Bind an existing regular file
pub fn open_file(path: impl Into<FsPath>) -> Outcome<File> {
    let path = path.into();

    if !path.exists() {
        return Outcome::Err(BasaltError::NoSuchPath);
    }
    if !path.is_file() {
        return Outcome::Err(BasaltError::NoSuchFile);
    }

    Outcome::Ok(File { path })
}

/// Bind a not-yet-existing file under an existing parent
///
/// Validates only; nothing is created until the first write through the
/// handle.
pub fn make_file(path: impl Into<FsPath>) -> Outcome<File> {
    let path = path.into();

    if path.exists() {
        return Outcome::Err(BasaltError::FileAlreadyExists);
    }
    if !path.parent().is_dir() {
        return Outcome::Err(BasaltError::NoSuchParentDirectory);
    }

    Outcome::Ok(File { path })
}
