//! Path probe wrapper
//!
//! Thin value wrapper over an owned path with the tree probes the rest of
//! the crate branches on. Probes answer what is on disk right now; they make
//! no attempt to pin the answer against concurrent filesystem changes.

use basalt_core::domain::payload::DropSafe;
use std::path::{Path, PathBuf};

/// Owned path with probe helpers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsPath {
    inner: PathBuf,
}

impl DropSafe for FsPath {}

impl FsPath {
    /// Wrap a path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { inner: path.into() }
    }

    /// Borrow the underlying path
    pub fn get(&self) -> &Path {
        &self.inner
    }

    /// Check whether anything exists at this path
    pub fn exists(&self) -> bool {
        self.inner.exists()
    }

    /// Check whether this path is a regular file
    pub fn is_file(&self) -> bool {
        self.inner.is_file()
    }

    /// Check whether this path is a directory
    pub fn is_dir(&self) -> bool {
        self.inner.is_dir()
    }

    /// Parent path; empty when there is none to name
    pub fn parent(&self) -> FsPath {
        match self.inner.parent() {
            Some(parent) => FsPath::new(parent),
            None => FsPath::new(PathBuf::new()),
        }
    }
}

impl From<&str> for FsPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for FsPath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for FsPath {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<PathBuf> for FsPath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}
