//! End-to-end run: load, extract, encode, substitute, write.
//!
//! [`escape_document`] is the in-memory core and performs no I/O.
//! [`run`] wraps it with the file handling of a command-line invocation.
//! Input failures abort the run. Output failures are logged and recorded in
//! the returned [`RunOutcome`], and the run still counts as finished.

use crate::extract::{collect_strings, Extraction};
use crate::load::{read_document, Document};
use crate::map::ReplacementMap;
use crate::options::RunOptions;
use crate::report::{write_document, write_report};
use crate::substitute::{substitute, Substitution};
use crate::{Error, Result};

/// Result of escaping one document in memory.
#[derive(Debug, Clone)]
pub struct Escaped {
    pub extraction: Extraction,
    pub map: ReplacementMap,
    pub substitution: Substitution,
}

impl Escaped {
    /// The rewritten document.
    #[must_use]
    pub fn document(&self) -> &[u8] {
        &self.substitution.document
    }
}

/// Extracts the keys of `input`, encodes them, and substitutes them back.
///
/// # Examples
///
/// ```rust
/// use keyescape::escape_document;
///
/// let escaped = escape_document(br#"{"a":"hello"}"#);
/// assert_eq!(escaped.document(), br#"{"\u0061":"hello"}"#);
/// assert_eq!(escaped.map.get("a"), Some("\\u0061"));
/// assert!(!escaped.map.contains_key("hello"));
/// ```
#[must_use]
pub fn escape_document(input: &[u8]) -> Escaped {
    let extraction = collect_strings(input);
    let map = extraction.replacement_map();
    let substitution = substitute(input, &map);
    Escaped {
        extraction,
        map,
        substitution,
    }
}

/// What a finished run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub original: Document,
    pub escaped: Escaped,
    /// Set when the replacement-map report could not be written.
    pub report_error: Option<Error>,
    /// Set when the rewritten document could not be written.
    pub document_error: Option<Error>,
}

impl RunOutcome {
    /// Returns `true` if both output files were written.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.report_error.is_none() && self.document_error.is_none()
    }
}

/// Runs the whole pipeline for `options`.
///
/// The report is written before the document, each to its own file.
///
/// # Errors
///
/// Returns [`Error::InputUnreadable`] or [`Error::EmptyInput`] when the input
/// cannot be loaded; no output file is touched in that case.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn run(options: &RunOptions) -> Result<RunOutcome> {
    let original = read_document(&options.input)?;
    let escaped = escape_document(original.as_bytes());

    tracing::info!(
        tokens = escaped.extraction.token_count(),
        keys = escaped.map.len(),
        replacements = escaped.substitution.replacements,
        "escaped document keys"
    );

    let report_error =
        write_report(&escaped.map, &options.map_path, options.report_format).err();
    if let Some(err) = &report_error {
        tracing::debug!(error = %err, "failed to write replacement map");
    }

    let document_error = write_document(&options.input, escaped.document()).err();
    if let Some(err) = &document_error {
        tracing::debug!(error = %err, "failed to write modified document");
    }

    Ok(RunOutcome {
        original,
        escaped,
        report_error,
        document_error,
    })
}
