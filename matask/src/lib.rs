//! matask - interactive matrix tasks on the console
//!
//! The crate reads matrices line by line from a console-like input,
//! validates every line and re-prompts on bad input, then runs one of four
//! fixed tasks over the [`matask_core::Matrix`] API:
//!
//! 1. count negative elements,
//! 2. swap the first row with the main diagonal,
//! 3. sort the side diagonal,
//! 4. sort whole columns by their largest (or smallest) element.
//!
//! ## Architecture
//!
//! - **matask-core**: matrix container, element capabilities and parsing
//!   rules (no I/O)
//! - **matask**: the retrying [`Request`] readers, menu commands, tasks and
//!   the session loop
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use matask::{session, Request, SessionConfig};
//!
//! fn example() -> Result<(), matask::RequestError> {
//!     let config = SessionConfig::default();
//!     let mut request = Request::stdio(&config);
//!     session::run(&mut request, &mut std::io::stdout(), &config)
//! }
//! ```

// Re-export core abstractions
pub use matask_core::{DiagonalKind, Element, Matrix, MatrixError};

pub mod command;
pub mod config;
pub mod request;
pub mod session;
pub mod style;
pub mod tasks;

pub use command::{Command, CommandError, Task};
pub use config::{ColumnKey, EchoPolicy, ElementKind, SessionConfig};
pub use request::{Request, RequestError};
