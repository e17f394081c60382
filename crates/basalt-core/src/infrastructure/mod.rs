//! Infrastructure Layer
//!
//! Process-facing plumbing beneath the domain layer. The domain layer never
//! depends on anything here.

pub mod console;
