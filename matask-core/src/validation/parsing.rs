//! Parsing rules for console input
//!
//! Pure functions turning a line of user input into typed values. They
//! never read or write anything themselves; the interactive reader calls
//! them once per attempt and retries on error.

use alloc::vec::Vec;

use crate::{Element, MatrixError};

/// Parse a single element token
pub fn parse_element<E: Element>(token: &str) -> Result<E, MatrixError> {
    E::parse_token(token)
}

/// Parse a whitespace separated line of elements
///
/// The whole line fails on the first bad token, so no partial result is
/// ever returned. An empty line yields an empty sequence.
pub fn parse_line<E: Element>(line: &str) -> Result<Vec<E>, MatrixError> {
    line.split_whitespace().map(parse_element).collect()
}

/// Parse a positive row count or matrix size
///
/// Non-integer input is a [`MatrixError::ParseFailure`], a value that
/// does not fit `usize` is a [`MatrixError::NumericOverflow`] and zero or a
/// negative value is a [`MatrixError::NonPositiveSize`].
pub fn parse_size(input: &str) -> Result<usize, MatrixError> {
    let token = input.trim();
    let value = token
        .parse::<i64>()
        .map_err(|error| crate::element::classify_int_error(token, &error))?;

    if value <= 0 {
        return Err(MatrixError::NonPositiveSize { value });
    }

    usize::try_from(value).map_err(|_| MatrixError::NumericOverflow {
        token: token.into(),
    })
}

/// Check that a sequence has exactly the required length
pub fn check_length<T>(items: &[T], expected: usize) -> Result<(), MatrixError> {
    if items.len() != expected {
        return Err(MatrixError::LengthMismatch {
            actual: items.len(),
            expected,
        });
    }
    Ok(())
}
