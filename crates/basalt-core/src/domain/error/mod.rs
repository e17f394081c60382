//! Error Module
//!
//! Defines the closed error taxonomy shared by every Basalt crate. Codes are
//! stable `u32` values organized by domain range, each mapped to descriptive
//! metadata and rendered as a bracket-tagged diagnostic string.

mod codes;

// Re-export taxonomy types at module level
pub use codes::{BasaltError, Domain, ErrorInfo, Kind};

/// Basalt Result type for convenience
///
/// Standard Result type wrapper using BasaltError as the error variant; the
/// `?`-friendly bridge for internal plumbing. Boundary operations return
/// [`Outcome`](crate::domain::outcome::Outcome) instead.
pub type BasaltResult<T> = Result<T, BasaltError>;
