//! # Error Taxonomy & Codes
//!
//! Closed registry of every failure condition in the Basalt workspace.
//! Codes are stable `u32` values organized by domain range; the registry is
//! append-only (new codes take fresh values inside their range, existing
//! values never move). Each code maps to exactly one [`ErrorInfo`] record
//! through an exhaustive match, so a code without metadata cannot compile.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subsystem an error originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Domain {
    /// No particular subsystem
    None,
    /// Filesystem wrappers
    Fsys,
    /// Structured-data parsing
    Sdata,
}

impl Domain {
    /// Short label used in rendered diagnostics; empty for `None`
    pub const fn tag(self) -> &'static str {
        match self {
            Domain::None => "",
            Domain::Fsys => "fsys",
            Domain::Sdata => "sdata",
        }
    }
}

/// Nature of a failure, independent of subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    /// No particular nature
    None,
    /// A resource could not be reached or bound
    Access,
    /// A value could not be converted to the requested type
    Cast,
    /// Text could not be read as the expected token
    Parse,
    /// Input violated the grammar
    Syntax,
}

impl Kind {
    /// Short label used in rendered diagnostics; empty for `None`
    pub const fn tag(self) -> &'static str {
        match self {
            Kind::None => "",
            Kind::Access => "access",
            Kind::Cast => "cast",
            Kind::Parse => "parse",
            Kind::Syntax => "syntax",
        }
    }
}

/// Per-code descriptive metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorInfo {
    /// Human-readable message (never empty)
    pub message: &'static str,
    /// Subsystem of origin
    pub domain: Domain,
    /// Nature of the failure
    pub kind: Kind,
}

/// Basalt error codes
///
/// `#[repr(u32)]` keeps the discriminants explicit; their values are part of
/// the crate's stability contract. Codes are organized by domain range:
/// generic failures in 1000-1999, filesystem in 2000-2999, structured data
/// in 3000-3999. `Success` is always 0.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasaltError {
    /// Successful operation
    Success = 0,

    // === Generic Errors (1000-1999) ===
    /// Operation is not implemented yet
    Unimplemented = 1000,
    /// Failure with no finer classification
    Failure = 1001,
    /// Index past the end of a collection
    IndexOutOfRange = 1002,
    /// Lookup key is not present
    NoSuchKey = 1003,
    /// Text does not denote a number
    InvalidNumber = 1004,

    // === Filesystem Errors (2000-2999) ===
    /// Nothing exists at the path
    NoSuchPath = 2000,
    /// Path exists but is not a regular file
    NoSuchFile = 2001,
    /// Path exists but is not a directory
    NoSuchDirectory = 2002,
    /// Parent directory of the target path does not exist
    NoSuchParentDirectory = 2003,
    /// Target file already exists
    FileAlreadyExists = 2004,
    /// Target directory already exists
    DirectoryAlreadyExists = 2005,
    /// Underlying open call failed
    FailedToOpen = 2006,

    // === Structured-Data Errors (3000-3999) ===
    /// Value cannot be cast to the requested type
    BadCast = 3000,
    /// Token stream contains an unrecognized token
    BadToken = 3001,
    /// Expected a value at this position
    ExpectedValue = 3002,
    /// Expected a key at this position
    ExpectedKey = 3003,
    /// Expected a separator at this position
    ExpectedSeparator = 3004,
    /// Key appears more than once in the same scope
    DuplicateKey = 3005,
    /// Document has more than one root
    DuplicateRoot = 3006,
}

impl BasaltError {
    /// Number of codes in the registry
    pub const COUNT: usize = 20;

    /// Every code, in declaration order
    ///
    /// Lets tests and tooling iterate the registry exhaustively.
    pub const ALL: [BasaltError; Self::COUNT] = [
        BasaltError::Success,
        BasaltError::Unimplemented,
        BasaltError::Failure,
        BasaltError::IndexOutOfRange,
        BasaltError::NoSuchKey,
        BasaltError::InvalidNumber,
        BasaltError::NoSuchPath,
        BasaltError::NoSuchFile,
        BasaltError::NoSuchDirectory,
        BasaltError::NoSuchParentDirectory,
        BasaltError::FileAlreadyExists,
        BasaltError::DirectoryAlreadyExists,
        BasaltError::FailedToOpen,
        BasaltError::BadCast,
        BasaltError::BadToken,
        BasaltError::ExpectedValue,
        BasaltError::ExpectedKey,
        BasaltError::ExpectedSeparator,
        BasaltError::DuplicateKey,
        BasaltError::DuplicateRoot,
    ];

    /// Raw stable code value
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Convert a raw code back to an enum variant (unknown codes collapse to `Failure`)
    pub const fn from_code(code: u32) -> Self {
        match code {
            0 => BasaltError::Success,
            1000 => BasaltError::Unimplemented,
            1001 => BasaltError::Failure,
            1002 => BasaltError::IndexOutOfRange,
            1003 => BasaltError::NoSuchKey,
            1004 => BasaltError::InvalidNumber,
            2000 => BasaltError::NoSuchPath,
            2001 => BasaltError::NoSuchFile,
            2002 => BasaltError::NoSuchDirectory,
            2003 => BasaltError::NoSuchParentDirectory,
            2004 => BasaltError::FileAlreadyExists,
            2005 => BasaltError::DirectoryAlreadyExists,
            2006 => BasaltError::FailedToOpen,
            3000 => BasaltError::BadCast,
            3001 => BasaltError::BadToken,
            3002 => BasaltError::ExpectedValue,
            3003 => BasaltError::ExpectedKey,
            3004 => BasaltError::ExpectedSeparator,
            3005 => BasaltError::DuplicateKey,
            3006 => BasaltError::DuplicateRoot,
            _ => BasaltError::Failure,
        }
    }

    /// Descriptive metadata for this code
    ///
    /// Total over the registry: the match is exhaustive, so an unmapped code
    /// is unrepresentable.
    pub const fn info(self) -> ErrorInfo {
        const fn entry(message: &'static str, domain: Domain, kind: Kind) -> ErrorInfo {
            ErrorInfo {
                message,
                domain,
                kind,
            }
        }

        match self {
            BasaltError::Success => entry("Ok", Domain::None, Kind::None),

            BasaltError::Unimplemented => entry("Unimplemented", Domain::None, Kind::None),
            BasaltError::Failure => entry("Failure", Domain::None, Kind::None),
            BasaltError::IndexOutOfRange => entry("Index out of range", Domain::None, Kind::None),
            BasaltError::NoSuchKey => entry("No such key", Domain::None, Kind::None),
            BasaltError::InvalidNumber => entry("Invalid number", Domain::None, Kind::Parse),

            BasaltError::NoSuchPath => {
                entry("No such file or directory", Domain::Fsys, Kind::Access)
            }
            BasaltError::NoSuchFile => entry("No such file", Domain::Fsys, Kind::Access),
            BasaltError::NoSuchDirectory => entry("No such directory", Domain::Fsys, Kind::Access),
            BasaltError::NoSuchParentDirectory => {
                entry("No such parent directory", Domain::Fsys, Kind::Access)
            }
            BasaltError::FileAlreadyExists => {
                entry("File already exists", Domain::Fsys, Kind::Access)
            }
            BasaltError::DirectoryAlreadyExists => {
                entry("Directory already exists", Domain::Fsys, Kind::Access)
            }
            BasaltError::FailedToOpen => entry("Failed to open file", Domain::Fsys, Kind::Access),

            BasaltError::BadCast => entry("Bad value cast", Domain::Sdata, Kind::Cast),
            BasaltError::BadToken => entry("Bad token", Domain::Sdata, Kind::Parse),
            BasaltError::ExpectedValue => entry("Expected a value", Domain::Sdata, Kind::Syntax),
            BasaltError::ExpectedKey => entry("Expected a key", Domain::Sdata, Kind::Syntax),
            BasaltError::ExpectedSeparator => {
                entry("Expected a separator", Domain::Sdata, Kind::Syntax)
            }
            BasaltError::DuplicateKey => entry("Duplicate key", Domain::Sdata, Kind::Syntax),
            BasaltError::DuplicateRoot => entry("Duplicate root", Domain::Sdata, Kind::Syntax),
        }
    }

    /// Human-readable message
    pub const fn message(self) -> &'static str {
        self.info().message
    }

    /// Subsystem of origin
    pub const fn domain(self) -> Domain {
        self.info().domain
    }

    /// Nature of the failure
    pub const fn kind(self) -> Kind {
        self.info().kind
    }

    /// Check whether this code originates from `domain`
    pub fn is_of_domain(self, domain: Domain) -> bool {
        self.domain() == domain
    }

    /// Check whether this code fails in the manner of `kind`
    pub fn is_of_kind(self, kind: Kind) -> bool {
        self.kind() == kind
    }

    /// Check domain and kind at once
    pub fn is_of(self, domain: Domain, kind: Kind) -> bool {
        self.is_of_domain(domain) && self.is_of_kind(kind)
    }
}

impl fmt::Display for BasaltError {
    /// Renders `"[domain][kind] message"`, dropping the bracket segment of a
    /// `None` category and the separating space when no tags remain.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.info();
        let domain_tag = info.domain.tag();
        let kind_tag = info.kind.tag();

        if !domain_tag.is_empty() {
            write!(f, "[{}]", domain_tag)?;
        }
        if !kind_tag.is_empty() {
            write!(f, "[{}]", kind_tag)?;
        }

        if domain_tag.is_empty() && kind_tag.is_empty() {
            f.write_str(info.message)
        } else {
            write!(f, " {}", info.message)
        }
    }
}

impl std::error::Error for BasaltError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_non_empty() {
        for code in BasaltError::ALL {
            assert!(!code.message().is_empty(), "{:?} has no message", code);
        }
    }

    #[test]
    fn registry_is_complete() {
        let mut values: Vec<u32> = BasaltError::ALL.iter().map(|code| code.code()).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), BasaltError::COUNT);
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(BasaltError::Success.code(), 0);
        assert_eq!(BasaltError::Unimplemented.code(), 1000);
        assert_eq!(BasaltError::InvalidNumber.code(), 1004);
        assert_eq!(BasaltError::NoSuchPath.code(), 2000);
        assert_eq!(BasaltError::FailedToOpen.code(), 2006);
        assert_eq!(BasaltError::BadCast.code(), 3000);
        assert_eq!(BasaltError::DuplicateRoot.code(), 3006);
    }

    #[test]
    fn code_round_trip() {
        for code in BasaltError::ALL {
            assert_eq!(BasaltError::from_code(code.code()), code);
        }
        assert_eq!(BasaltError::from_code(999_999), BasaltError::Failure);
    }

    #[test]
    fn no_such_path_scenario() {
        let info = BasaltError::NoSuchPath.info();
        assert_eq!(info.domain, Domain::Fsys);
        assert_eq!(info.kind, Kind::Access);
        assert_eq!(info.message, "No such file or directory");
        assert_eq!(
            BasaltError::NoSuchPath.to_string(),
            "[fsys][access] No such file or directory"
        );
    }

    #[test]
    fn bare_render_without_tags() {
        assert_eq!(BasaltError::Failure.to_string(), "Failure");
        assert_eq!(BasaltError::Success.to_string(), "Ok");
    }

    #[test]
    fn kind_tag_renders_without_domain() {
        assert_eq!(BasaltError::InvalidNumber.to_string(), "[parse] Invalid number");
    }

    #[test]
    fn category_predicates() {
        assert!(BasaltError::NoSuchFile.is_of_domain(Domain::Fsys));
        assert!(BasaltError::DuplicateKey.is_of(Domain::Sdata, Kind::Syntax));
        assert!(!BasaltError::Failure.is_of_kind(Kind::Access));
        assert!(!BasaltError::BadCast.is_of(Domain::Sdata, Kind::Syntax));
    }

    #[test]
    fn filesystem_codes_are_access_failures() {
        for code in BasaltError::ALL {
            if code.is_of_domain(Domain::Fsys) {
                assert!(code.is_of_kind(Kind::Access), "{:?} is not access", code);
            }
        }
    }
}
