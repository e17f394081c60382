//! Numeric-text reading
//!
//! Two-tier strategy: digit-only text takes a bare accumulator loop; text
//! bearing a sign, exponent, or decimal marker takes the full parser. Both
//! tiers report failure as [`BasaltError::InvalidNumber`] through the core
//! container.

use crate::chars::{is_digit, is_numerical};
use basalt_core::domain::error::BasaltError;
use basalt_core::domain::outcome::Outcome;
use basalt_core::domain::payload::DropSafe;
use std::str::FromStr;

const DECIMAL_BASE: u64 = 10;

/// Longest digit run the accumulator holds without overflowing; anything
/// longer goes through the full parser.
const FAST_DIGIT_LIMIT: usize = 19;

/// Read an `f32` from numeric text
pub fn read_f32(text: &str) -> Outcome<f32> {
    read(text)
}

/// Read an `f64` from numeric text
pub fn read_f64(text: &str) -> Outcome<f64> {
    read(text)
}

/// Numeric widths the reader produces
trait ReadNumber: FromStr + Copy + DropSafe {
    fn from_accumulator(value: u64) -> Self;
}

impl ReadNumber for f32 {
    fn from_accumulator(value: u64) -> Self {
        value as f32
    }
}

impl ReadNumber for f64 {
    fn from_accumulator(value: u64) -> Self {
        value as f64
    }
}

fn read<T: ReadNumber>(text: &str) -> Outcome<T> {
    if text.is_empty() {
        return Outcome::Err(BasaltError::InvalidNumber);
    }

    let bytes = text.as_bytes();

    if bytes.len() <= FAST_DIGIT_LIMIT && bytes.iter().all(|&byte| is_digit(byte)) {
        return Outcome::Ok(read_fast(bytes));
    }

    if bytes.iter().all(|&byte| is_numerical(byte)) {
        return read_full(text);
    }

    Outcome::Err(BasaltError::InvalidNumber)
}

/// Digit-only tier: bare accumulator, no parser machinery
fn read_fast<T: ReadNumber>(bytes: &[u8]) -> T {
    let mut value: u64 = 0;
    for &byte in bytes {
        value = value * DECIMAL_BASE + u64::from(byte - b'0');
    }
    T::from_accumulator(value)
}

/// Full tier: complete grammar, whole-input match required
fn read_full<T: ReadNumber>(text: &str) -> Outcome<T> {
    match text.parse::<T>() {
        Ok(value) => Outcome::Ok(value),
        Err(_) => Outcome::Err(BasaltError::InvalidNumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_strings_read_exactly() {
        assert_eq!(read_f64("0").into_value(), 0.0);
        assert_eq!(read_f64("42").into_value(), 42.0);
        assert_eq!(read_f64("123456789").into_value(), 123_456_789.0);
    }

    #[test]
    fn fast_tier_matches_full_parser() {
        for text in ["7", "900", "123456", "18446744073709551615"] {
            assert_eq!(
                read_f64(text).into_value(),
                text.parse::<f64>().unwrap(),
                "tiers disagree on {text:?}"
            );
        }
    }

    #[test]
    fn marked_strings_take_the_full_parser() {
        assert_eq!(read_f64("3.14").into_value(), 3.14);
        assert_eq!(read_f64("-2.5").into_value(), -2.5);
        assert_eq!(read_f64("1e3").into_value(), 1000.0);
        assert_eq!(read_f64("+6.022E23").into_value(), 6.022e23);
    }

    #[test]
    fn long_digit_runs_skip_the_accumulator() {
        // 23 digits would overflow the fast tier
        let outcome = read_f64("99999999999999999999999");
        assert!(outcome.is_ok());
        assert_eq!(outcome.into_value(), 1e23);
    }

    #[test]
    fn f32_width_reads() {
        assert_eq!(read_f32("128").into_value(), 128.0_f32);
        assert_eq!(read_f32("0.5").into_value(), 0.5_f32);
    }

    #[test]
    fn garbage_reports_invalid_number() {
        for text in ["", "12x4", "--", "+", "1.2.3.4e", "NaN"] {
            let outcome = read_f64(text);
            assert!(outcome.is_err(), "{text:?} was accepted");
            assert_eq!(outcome.code(), BasaltError::InvalidNumber);
        }
    }

    #[test]
    fn invalid_number_renders_its_kind_tag() {
        assert_eq!(read_f64("oops").message(), "[parse] Invalid number");
    }
}
