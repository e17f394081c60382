//! # Basalt Fsys
//!
//! Filesystem wrappers returning the Basalt carriers. [`FsPath`] probes the
//! tree; [`open_file`]/[`make_file`] and [`open_dir`]/[`make_dir`] validate
//! their preconditions up front and report through the filesystem range of
//! the error taxonomy instead of raw io errors.

pub mod dir;
pub mod file;
pub mod path;

// Re-export the wrapper surface
pub use dir::{make_dir, open_dir, Dir};
pub use file::{make_file, open_file, File, ReadHandle};
pub use path::FsPath;
