//! Status Module
//!
//! Payload-free carrier for operations that either succeed with no data or
//! fail with a taxonomy code. Same registry as
//! [`Outcome`](crate::domain::outcome::Outcome), none of the payload
//! storage.

use crate::domain::error::BasaltError;
use serde::{Deserialize, Serialize};

/// Ok/err carrier with no payload
///
/// Holds one code; `Success` means ok, anything else means failure.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    err: BasaltError,
}

impl Status {
    /// Successful status
    pub const fn ok() -> Self {
        Self {
            err: BasaltError::Success,
        }
    }

    /// Failed status carrying `err`
    pub const fn err(err: BasaltError) -> Self {
        Self { err }
    }

    /// Check whether the operation succeeded
    pub const fn is_ok(&self) -> bool {
        matches!(self.err, BasaltError::Success)
    }

    /// Exact complement of `is_ok`
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// The held code (`Success` when ok)
    pub const fn code(&self) -> BasaltError {
        self.err
    }

    /// Rendered taxonomy message for the held code
    pub fn message(&self) -> String {
        self.err.to_string()
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::ok()
    }
}

impl From<BasaltError> for Status {
    fn from(err: BasaltError) -> Self {
        Self { err }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ok() {
        let status = Status::default();
        assert!(status.is_ok());
        assert!(!status.is_err());
        assert_eq!(status.code(), BasaltError::Success);
        assert_eq!(status.message(), "Ok");
    }

    #[test]
    fn failed_status_reports_its_code() {
        let status = Status::err(BasaltError::FailedToOpen);
        assert!(status.is_err());
        assert_eq!(status.code(), BasaltError::FailedToOpen);
        assert_eq!(status.message(), "[fsys][access] Failed to open file");
    }

    #[test]
    fn success_code_means_ok() {
        assert!(Status::err(BasaltError::Success).is_ok());
        assert!(Status::from(BasaltError::Success).is_ok());
    }

    #[test]
    fn converts_from_error_code() {
        let status: Status = BasaltError::DuplicateRoot.into();
        assert!(status.is_err());
        assert_eq!(status.code(), BasaltError::DuplicateRoot);
    }
}
