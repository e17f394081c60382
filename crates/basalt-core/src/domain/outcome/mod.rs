//! Outcome Module
//!
//! The value-or-error container every fallible Basalt operation returns.
//! One `Outcome` carries either the operation's payload or a code from the
//! error taxonomy, never both, fixed at construction. The container is a
//! native sum type: state bookkeeping, payload teardown, and move semantics
//! all come from the compiler, and a moved-from outcome is consumed — any
//! further use of the source binding is a compile error.
//!
//! # Borrowed payloads
//!
//! `Outcome<&T>` is the non-owning instantiation: it stores a borrow of an
//! externally owned value, extraction hands the borrow back, and dropping
//! the container never touches the referent.
//!
//! # Copying
//!
//! `Clone` and `Copy` are offered only for `Copy` payloads, whose
//! duplication is a plain byte copy. A payload that is merely `Clone`
//! leaves the container without a copy operation:
//!
//! ```compile_fail
//! use basalt_core::domain::outcome::Outcome;
//!
//! let a: Outcome<String> = Outcome::Ok("owned".to_string());
//! let b = a.clone(); // rejected: String is not `Copy`
//! ```

use crate::domain::error::{BasaltError, BasaltResult};
use crate::domain::payload::DropSafe;

/// Contract message for payload access in the error state
const BAD_VALUE_ACCESS: &str = "Outcome payload accessed in the error state";
/// Contract message for code access in the success state
const BAD_CODE_ACCESS: &str = "Outcome error code accessed in the success state";

/// Value-or-error carrier for one fallible operation
///
/// Constructed once at the return point of the producing operation and
/// consumed by the immediate caller: branch on [`is_ok`](Outcome::is_ok) /
/// [`is_err`](Outcome::is_err), then extract. Not intended for long-term
/// storage — extract long-lived state and hold it on its own.
#[must_use]
#[derive(Debug)]
pub enum Outcome<T: DropSafe> {
    /// Operation succeeded with a payload
    Ok(T),
    /// Operation failed with a taxonomy code
    Err(BasaltError),
}

impl<T: DropSafe> Outcome<T> {
    /// Check whether the success payload is present
    pub const fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Check whether an error code is held (exact complement of `is_ok`)
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// The held error code
    ///
    /// # Panics
    ///
    /// Panics in the success state; check [`is_err`](Outcome::is_err) first.
    pub fn code(&self) -> BasaltError {
        match self {
            Outcome::Ok(_) => panic!("{}", BAD_CODE_ACCESS),
            Outcome::Err(err) => *err,
        }
    }

    /// Rendered taxonomy message for the held code
    ///
    /// # Panics
    ///
    /// Panics in the success state; check [`is_err`](Outcome::is_err) first.
    pub fn message(&self) -> String {
        self.code().to_string()
    }

    /// Borrow the payload
    ///
    /// # Panics
    ///
    /// Panics in the error state; check [`is_ok`](Outcome::is_ok) first.
    pub fn value(&self) -> &T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => panic!("{}", BAD_VALUE_ACCESS),
        }
    }

    /// Mutably borrow the payload
    ///
    /// # Panics
    ///
    /// Panics in the error state; check [`is_ok`](Outcome::is_ok) first.
    pub fn value_mut(&mut self) -> &mut T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => panic!("{}", BAD_VALUE_ACCESS),
        }
    }

    /// Move the payload out, consuming the outcome
    ///
    /// # Panics
    ///
    /// Panics in the error state; check [`is_ok`](Outcome::is_ok) first.
    pub fn into_value(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => panic!("{}", BAD_VALUE_ACCESS),
        }
    }

    /// Convert into the `?`-friendly standard result
    pub fn into_result(self) -> BasaltResult<T> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(err) => Err(err),
        }
    }

    /// Build an outcome from a standard result over taxonomy errors
    pub fn from_result(result: BasaltResult<T>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(err) => Outcome::Err(err),
        }
    }
}

impl<T: DropSafe> From<BasaltError> for Outcome<T> {
    fn from(err: BasaltError) -> Self {
        Outcome::Err(err)
    }
}

impl<T: DropSafe + Copy> Clone for Outcome<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: DropSafe + Copy> Copy for Outcome<T> {}
