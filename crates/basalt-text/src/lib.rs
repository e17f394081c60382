//! # Basalt Text
//!
//! Byte classification and numeric-text reading over the Basalt carriers.

pub mod chars;
pub mod number;

// Re-export the reading surface
pub use chars::{is_digit, is_numerical};
pub use number::{read_f32, read_f64};
