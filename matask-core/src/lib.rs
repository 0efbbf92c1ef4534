#![no_std]

//! matask core - dense matrix and input parsing rules
//!
//! This crate provides the [`Matrix`] container, the [`Element`]
//! capability trait and the pure parsing rules used by the interactive
//! `matask` console. It performs no I/O.

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod element;
pub mod error;
pub mod matrix;
pub mod validation;

pub use element::Element;
pub use error::{MatrixError, Result};
pub use matrix::{Diagonal, DiagonalKind, Matrix};
pub use validation::{check_length, parse_element, parse_line, parse_size};
