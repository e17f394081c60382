//! # Basalt Core
//!
//! Shared foundation layer for the Basalt workspace.
//! Defines the error taxonomy, the value-or-error carriers, and the payload
//! safety contracts every other crate builds on.
//!
//! ## Module Organization
//!
//! - `domain::error`: closed error taxonomy (codes, categories, rendering)
//! - `domain::outcome`: value-or-error container for fallible operations
//! - `domain::status`: payload-free ok/err carrier
//! - `domain::payload`: type-level safety contracts for container payloads
//! - `infrastructure::console`: low-level console sink

pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use domain::error::{BasaltError, BasaltResult, Domain, ErrorInfo, Kind};
pub use domain::outcome::Outcome;
pub use domain::payload::DropSafe;
pub use domain::status::Status;

/// Library version
pub const BASALT_CORE_VERSION: &str = "0.1.0";
