//! Interactive, validating readers
//!
//! [`Request`] turns lines of console input into typed values. Every
//! validation failure is reported on the diagnostic stream and the input
//! is asked for again, so the readers only return once they have a valid
//! value. End of input and broken streams are the only errors that reach
//! the caller.

use std::fmt::Display;
use std::io::{self, BufRead, ErrorKind, Stderr, StdinLock, Write};
use std::str::FromStr;

use log::{debug, warn};
use matask_core::{check_length, parse_line, parse_size, Element, Matrix, MatrixError};
use thiserror::Error;

use crate::config::SessionConfig;
use crate::style::Style;

/// Rows reserved up front; larger matrices grow as rows arrive.
const PREALLOCATED_ROWS: usize = 256;

/// Conditions that stop a reader instead of triggering a retry
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("input closed")]
    Closed,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Line-oriented reader bound to an input and a diagnostic output
pub struct Request<R, W> {
    input: R,
    diagnostics: W,
    style: Style,
    config: SessionConfig,
    had_errors: bool,
}

impl Request<StdinLock<'static>, Stderr> {
    /// Reader over the process' stdin, reporting on stderr
    pub fn stdio(config: &SessionConfig) -> Self {
        Request::new(io::stdin().lock(), io::stderr(), config)
    }
}

impl<R: BufRead, W: Write> Request<R, W> {
    pub fn new(input: R, diagnostics: W, config: &SessionConfig) -> Self {
        Self {
            input,
            diagnostics,
            style: Style::new(config.color),
            config: config.clone(),
            had_errors: false,
        }
    }

    /// Write an informational message to the diagnostic stream
    pub fn message(&mut self, text: impl Display) -> Result<(), RequestError> {
        self.style.message(&mut self.diagnostics, text)?;
        Ok(())
    }

    /// Report a recoverable error on the diagnostic stream
    pub fn report(&mut self, error: impl Display) -> Result<(), RequestError> {
        debug!("rejected input: {error}");
        self.had_errors = true;
        self.style.error(&mut self.diagnostics, error)?;
        Ok(())
    }

    /// Read one raw line, including its terminator
    fn read_line(&mut self) -> Result<String, RequestError> {
        loop {
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return Err(RequestError::Closed),
                Ok(_) => return Ok(line),
                Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                Err(error) if error.kind() == ErrorKind::InvalidData => {
                    warn!("discarding unreadable input line: {error}");
                    self.report(format_args!("failed to read the input, {error}"))?;
                }
                Err(error) => return Err(error.into()),
            }
        }
    }

    /// Prompt for a line and parse it with `parse` until it succeeds
    ///
    /// `parse` receives the line with surrounding whitespace trimmed.
    pub fn scalar_with<T, F>(&mut self, prompt: &str, mut parse: F) -> Result<T, RequestError>
    where
        F: FnMut(&str) -> Result<T, MatrixError>,
    {
        loop {
            self.style.prompt(&mut self.diagnostics, prompt)?;
            let line = self.read_line()?;

            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(error) => self.report(&error)?,
            }
        }
    }

    /// Prompt for a line and parse it with `T`'s `FromStr` until it succeeds
    pub fn scalar<T>(&mut self, prompt: &str) -> Result<T, RequestError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.scalar_with(prompt, |input| {
            input
                .parse()
                .map_err(|error| MatrixError::parse_failure(input, error))
        })
    }

    /// Read a whitespace separated line of elements
    ///
    /// A line with any bad token is dropped entirely and read again.
    pub fn sequence<E: Element>(&mut self) -> Result<Vec<E>, RequestError> {
        loop {
            let line = self.read_line()?;

            match parse_line(&line) {
                Ok(items) => return Ok(items),
                Err(error) => self.report(&error)?,
            }
        }
    }

    /// Read a line of exactly `size` elements
    pub fn fixed_sequence<E: Element>(&mut self, size: usize) -> Result<Vec<E>, RequestError> {
        loop {
            let items = self.sequence()?;

            match check_length(&items, size) {
                Ok(()) => return Ok(items),
                Err(error) => self.report(&error)?,
            }
        }
    }

    /// Read a matrix: a positive row count, then one line per row
    ///
    /// The first row fixes the column count for the rest.
    pub fn matrix<E: Element>(&mut self) -> Result<Matrix<E>, RequestError> {
        self.had_errors = false;
        let rows = self.scalar_with("Input matrix rows count", parse_size)?;
        self.message(format_args!("Enter {rows} rows, values separated by spaces"))?;

        let mut matrix = Matrix::with_capacity(rows.min(PREALLOCATED_ROWS));
        while matrix.rows() < rows {
            let row = if matrix.rows() == 0 {
                self.sequence()?
            } else {
                self.fixed_sequence(matrix.cols())?
            };

            if let Err(error) = matrix.push_row(row) {
                self.report(&error)?;
            }
        }

        self.echo(&matrix)?;
        Ok(matrix)
    }

    /// Read a square matrix: a positive size, then `size` lines of `size` elements
    pub fn square_matrix<E: Element>(&mut self) -> Result<Matrix<E>, RequestError> {
        self.had_errors = false;
        let size = self.scalar_with("Input matrix size", parse_size)?;
        self.message(format_args!("Enter {size} rows of {size} values"))?;

        let mut matrix = Matrix::with_capacity(size.min(PREALLOCATED_ROWS));
        while matrix.rows() < size {
            let row = self.fixed_sequence(size)?;

            if let Err(error) = matrix.push_row(row) {
                self.report(&error)?;
            }
        }

        self.echo(&matrix)?;
        Ok(matrix)
    }

    fn echo<E: Element>(&mut self, matrix: &Matrix<E>) -> Result<(), RequestError> {
        if self.config.should_echo(self.had_errors) {
            self.message(format_args!("Typed matrix:\n{matrix}"))?;
        }
        Ok(())
    }
}
