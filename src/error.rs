//! Error types for the key-escaping pipeline.
//!
//! Errors fall into two groups:
//!
//! - **Input errors**: the document could not be read, or it was empty.
//!   These are fatal; the binary exits with code `1` and touches no output file.
//! - **Output errors**: the report or the rewritten document could not be
//!   written. These are logged and the run still completes with code `0`.
//!
//! ## Examples
//!
//! ```rust
//! use keyescape::{read_document, Error};
//!
//! let result = read_document("definitely/not/here.json");
//! assert!(matches!(result, Err(Error::InputUnreadable { .. })));
//!
//! if let Err(err) = result {
//!     assert!(err.is_fatal());
//!     eprintln!("{}", err);
//! }
//! ```

use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Represents all possible errors that can occur while escaping a document.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The input file could not be opened or read.
    #[error("unable to read JSON from file '{path}': {reason}")]
    InputUnreadable { path: String, reason: String },

    /// The input file was read but contained nothing.
    #[error("unable to read JSON from file '{path}': file is empty")]
    EmptyInput { path: String },

    /// An output file (report or rewritten document) could not be written.
    #[error("unable to write '{path}': {reason}")]
    OutputUnwritable { path: String, reason: String },

    /// The replacement map could not be rendered in the requested format.
    #[error("report error: {0}")]
    Report(String),

    /// IO error outside of the named input/output files (stdin, stdout)
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates an input error for a file that could not be opened or read.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyescape::Error;
    ///
    /// let err = Error::input_unreadable("data.json", "No such file or directory");
    /// assert!(err.to_string().contains("data.json"));
    /// ```
    pub fn input_unreadable<P: AsRef<Path>, R: fmt::Display>(path: P, reason: R) -> Self {
        Error::InputUnreadable {
            path: path.as_ref().display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an input error for a file with no content.
    pub fn empty_input<P: AsRef<Path>>(path: P) -> Self {
        Error::EmptyInput {
            path: path.as_ref().display().to_string(),
        }
    }

    /// Creates an output error for a file that could not be written.
    pub fn output_unwritable<P: AsRef<Path>, R: fmt::Display>(path: P, reason: R) -> Self {
        Error::OutputUnwritable {
            path: path.as_ref().display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an I/O error for console reads and writes.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for errors that must abort the run with a nonzero exit code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyescape::Error;
    ///
    /// assert!(Error::empty_input("a.json").is_fatal());
    /// assert!(!Error::output_unwritable("a.json", "read-only").is_fatal());
    /// ```
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::InputUnreadable { .. } | Error::EmptyInput { .. } | Error::Io(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Report(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
