//! Console Sink
//!
//! Low-level write helper for the process's standard output streams.
//! Reports through [`Status`] instead of an io error so callers branch and
//! render diagnostics the same way they do everywhere else.

use crate::domain::error::BasaltError;
use crate::domain::status::Status;
use std::io::Write;

/// Console output stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    /// Standard output
    Out,
    /// Standard error
    Err,
}

/// Write `buf` to the chosen sink, flushing before returning
///
/// Short writes and io failures collapse to [`BasaltError::Failure`]; the
/// helper neither retries nor reports finer-grained causes.
pub fn write(sink: Sink, buf: &[u8]) -> Status {
    let result = match sink {
        Sink::Out => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(buf).and_then(|()| lock.flush())
        }
        Sink::Err => {
            let stderr = std::io::stderr();
            let mut lock = stderr.lock();
            lock.write_all(buf).and_then(|()| lock.flush())
        }
    };

    match result {
        Ok(()) => Status::ok(),
        Err(_) => Status::err(BasaltError::Failure),
    }
}

/// Write `text` followed by a newline to the chosen sink
pub fn write_line(sink: Sink, text: &str) -> Status {
    let status = write(sink, text.as_bytes());
    if status.is_err() {
        return status;
    }
    write(sink, b"\n")
}
