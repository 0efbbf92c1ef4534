//! ANSI styling of the diagnostic stream

use std::fmt::Display;
use std::io::{self, Write};

const PROMPT: &str = "\x1b[36;1m";
const MESSAGE: &str = "\x1b[35;1m";
const ERROR: &str = "\x1b[31;1m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Writes prompts, messages and errors, optionally colored
#[derive(Debug, Clone, Copy)]
pub struct Style {
    color: bool,
}

impl Style {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Write a prompt, leaving the cursor on the same line
    pub fn prompt(&self, out: &mut impl Write, text: impl Display) -> io::Result<()> {
        if self.color {
            write!(out, "{PROMPT}{text}:{RESET} ")?;
        } else {
            write!(out, "{text}: ")?;
        }
        out.flush()
    }

    /// Write an informational message line
    pub fn message(&self, out: &mut impl Write, text: impl Display) -> io::Result<()> {
        if self.color {
            writeln!(out, "{MESSAGE}{text}{RESET}")
        } else {
            writeln!(out, "{text}")
        }
    }

    /// Write an error line
    pub fn error(&self, out: &mut impl Write, text: impl Display) -> io::Result<()> {
        if self.color {
            writeln!(out, "{ERROR}Error!{RESET} {BOLD}{text}{RESET}")
        } else {
            writeln!(out, "Error! {text}")
        }
    }
}
