//! Directory wrappers
//!
//! [`Dir`] binds a validated directory path. Unlike the file pair,
//! [`make_dir`] creates the directory immediately — an empty directory is a
//! complete artifact, there is no later write to defer to.

use crate::path::FsPath;
use basalt_core::domain::error::BasaltError;
use basalt_core::domain::outcome::Outcome;
use basalt_core::domain::payload::DropSafe;
use std::fs;
use tracing::debug;

/// Path-bound directory handle
#[derive(Debug)]
pub struct Dir {
    path: FsPath,
}

impl DropSafe for Dir {}

impl Dir {
    /// The bound path
    pub fn path(&self) -> &FsPath {
        &self.path
    }

    /// Paths of the directory's direct entries
    pub fn entries(&self) -> Outcome<Vec<FsPath>> {
        let reader = match fs::read_dir(self.path.get()) {
            Ok(reader) => reader,
            Err(error) => {
                debug!(path = %self.path.get().display(), ?error, "read_dir failed");
                return Outcome::Err(BasaltError::FailedToOpen);
            }
        };

        let mut entries = Vec::new();
        for entry in reader {
            match entry {
                Ok(entry) => entries.push(FsPath::new(entry.path())),
                Err(error) => {
                    debug!(?error, "directory entry unreadable");
                    return Outcome::Err(BasaltError::Failure);
                }
            }
        }

        Outcome::Ok(entries)
    }
}

/// Bind an existing directory
pub fn open_dir(path: impl Into<FsPath>) -> Outcome<Dir> {
    let path = path.into();

    if !path.exists() {
        return Outcome::Err(BasaltError::NoSuchPath);
    }
    if !path.is_dir() {
        return Outcome::Err(BasaltError::NoSuchDirectory);
    }

    Outcome::Ok(Dir { path })
}

/// Create and bind a new directory under an existing parent
pub fn make_dir(path: impl Into<FsPath>) -> Outcome<Dir> {
    let path = path.into();

    if path.exists() {
        return Outcome::Err(BasaltError::DirectoryAlreadyExists);
    }
    if !path.parent().is_dir() {
        return Outcome::Err(BasaltError::NoSuchParentDirectory);
    }

    if let Err(error) = fs::create_dir(path.get()) {
        debug!(path = %path.get().display(), ?error, "create_dir failed");
        return Outcome::Err(BasaltError::Failure);
    }

    Outcome::Ok(Dir { path })
}
