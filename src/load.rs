//! Document loading.
//!
//! The whole file is read into memory as raw bytes. No encoding is assumed,
//! so documents that are not valid UTF-8 are processed byte for byte.

use crate::{Error, Result};
use std::fmt;
use std::fs;
use std::path::Path;

/// Raw content of an input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document(Vec<u8>);

impl Document {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Lossy: invalid UTF-8 shows as U+FFFD.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// Reads the entire file at `path`.
///
/// # Errors
///
/// Returns [`Error::InputUnreadable`] if the file cannot be opened or read,
/// and [`Error::EmptyInput`] if it has no content.
///
/// # Examples
///
/// ```rust
/// use keyescape::{read_document, Error};
///
/// assert!(matches!(
///     read_document("no/such/file.json"),
///     Err(Error::InputUnreadable { .. })
/// ));
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::input_unreadable(path, e))?;
    if bytes.is_empty() {
        return Err(Error::empty_input(path));
    }
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded document");
    Ok(Document(bytes))
}
