//! Input validation rules
//!
//! Pure functions with no I/O; the interactive reader in the `matask`
//! crate applies them to each line it reads.

pub mod parsing;

pub use parsing::{check_length, parse_element, parse_line, parse_size};
