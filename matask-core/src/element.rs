//! Matrix element type constraints
//!
//! This module defines the capability set a type needs to be read from
//! the console, stored in a [`Matrix`](crate::Matrix) and ordered by the
//! matrix tasks.

use core::cmp::Ordering;
use core::fmt::{Debug, Display};
use core::num::{IntErrorKind, ParseIntError};
use core::str::FromStr;

use crate::MatrixError;

/// Trait for types that can be stored as matrix elements
///
/// All element types must be:
/// - Copy: moved around freely by swaps and sorts
/// - PartialOrd: compared by the tasks
/// - Display: rendered back to the console
/// - Default: the zero used to fill new matrices
/// - FromStr: parsed from whitespace separated tokens
pub trait Element: Copy + PartialOrd + Display + Debug + Default + FromStr {
    /// The additive identity
    fn zero() -> Self {
        Self::default()
    }

    /// Whether the value is strictly less than zero
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }

    /// Total order over all values of the type
    ///
    /// Integers use their natural order. Floats use IEEE 754 `totalOrder`,
    /// which places NaN after every other value.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Parse one token, classifying the failure
    ///
    /// Range errors become [`MatrixError::NumericOverflow`], everything
    /// else becomes [`MatrixError::ParseFailure`].
    fn parse_token(token: &str) -> Result<Self, MatrixError>;
}

/// Map an integer parse error onto the matrix error taxonomy
pub(crate) fn classify_int_error(token: &str, error: &ParseIntError) -> MatrixError {
    match error.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => MatrixError::NumericOverflow {
            token: token.into(),
        },
        _ => MatrixError::parse_failure(token, error),
    }
}

macro_rules! impl_integer_element {
    ($($ty:ty),*) => {
        $(
            impl Element for $ty {
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                fn parse_token(token: &str) -> Result<Self, MatrixError> {
                    token
                        .parse::<$ty>()
                        .map_err(|error| classify_int_error(token, &error))
                }
            }
        )*
    };
}

macro_rules! impl_float_element {
    ($($ty:ty),*) => {
        $(
            impl Element for $ty {
                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$ty>::total_cmp(self, other)
                }

                // Out-of-range floats parse to infinity, so there is no
                // overflow case here.
                fn parse_token(token: &str) -> Result<Self, MatrixError> {
                    token
                        .parse::<$ty>()
                        .map_err(|error| MatrixError::parse_failure(token, error))
                }
            }
        )*
    };
}

impl_integer_element!(i32, i64);
impl_float_element!(f32, f64);
