//! Output writing: the replacement-map report and the rewritten document.
//!
//! The text report has one line per map entry, in map order:
//!
//! ```text
//! name -> \x6e\x61\x6d\x65
//! id -> \x69\x64
//! ```
//!
//! Escape units are shortened from `\u00XY` to `\xXY` in the report only.
//! The rewritten document keeps the full `\u00XY` form.

use crate::encode::collapse;
use crate::map::ReplacementMap;
use crate::options::ReportFormat;
use crate::{Error, Result};
use serde::Serialize;
use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const ARROW: &[u8] = b" -> ";

/// One entry of a JSON report.
#[derive(Debug, Serialize)]
struct ReportEntry<'a> {
    original: Cow<'a, str>,
    escaped: String,
}

/// Renders the report for `map` without touching the filesystem.
///
/// # Examples
///
/// ```rust
/// use keyescape::{render_report, ReplacementMap, ReportFormat};
///
/// let map = ReplacementMap::from_keys(["a"]);
/// let text = render_report(&map, ReportFormat::Text).unwrap();
/// assert_eq!(text, b"a -> \\x61\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::Report`] if JSON encoding fails.
pub fn render_report(map: &ReplacementMap, format: ReportFormat) -> Result<Vec<u8>> {
    match format {
        ReportFormat::Text => {
            let mut out = Vec::with_capacity(map.len() * 32);
            for (original, escaped) in map.iter() {
                out.extend_from_slice(original);
                out.extend_from_slice(ARROW);
                out.extend_from_slice(collapse(escaped).as_bytes());
                out.push(b'\n');
            }
            Ok(out)
        }
        ReportFormat::Json => {
            let entries: Vec<ReportEntry<'_>> = map
                .iter()
                .map(|(original, escaped)| ReportEntry {
                    original: String::from_utf8_lossy(original),
                    escaped: collapse(escaped),
                })
                .collect();
            let mut out = serde_json::to_vec_pretty(&entries)?;
            out.push(b'\n');
            Ok(out)
        }
    }
}

/// Writes the replacement-map report to `path`, truncating any existing file.
///
/// # Errors
///
/// Returns [`Error::OutputUnwritable`] if the file cannot be created or written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_report<P: AsRef<Path>>(
    map: &ReplacementMap,
    path: P,
    format: ReportFormat,
) -> Result<()> {
    let rendered = render_report(map, format)?;
    write_output(path.as_ref(), &rendered)?;
    tracing::debug!(path = %path.as_ref().display(), entries = map.len(), %format, "wrote report");
    Ok(())
}

/// Overwrites `path` with the rewritten document.
///
/// # Errors
///
/// Returns [`Error::OutputUnwritable`] if the file cannot be created or written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_document<P: AsRef<Path>>(path: P, document: &[u8]) -> Result<()> {
    write_output(path.as_ref(), document)
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| Error::output_unwritable(path, e))?;
    file.write_all(bytes)
        .map_err(|e| Error::output_unwritable(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_report_lines_follow_map_order() {
        let map = ReplacementMap::from_keys(["id", "a"]);
        let text = render_report(&map, ReportFormat::Text).unwrap();
        assert_eq!(
            String::from_utf8(text).unwrap(),
            "id -> \\x69\\x64\na -> \\x61\n"
        );
    }

    #[test]
    fn test_text_report_keeps_raw_key_bytes() {
        let map = ReplacementMap::from_keys([&b"\xff"[..]]);
        let text = render_report(&map, ReportFormat::Text).unwrap();
        assert_eq!(text, b"\xff -> \\xff\n");
    }

    #[test]
    fn test_empty_key_report_line() {
        let map = ReplacementMap::from_keys([""]);
        let text = render_report(&map, ReportFormat::Text).unwrap();
        assert_eq!(text, b" -> \n");
    }

    #[test]
    fn test_json_report() {
        let map = ReplacementMap::from_keys(["a"]);
        let json = render_report(&map, ReportFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([{ "original": "a", "escaped": "\\x61" }])
        );
    }

    #[test]
    fn test_write_report_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("replacement_map.txt");
        std::fs::write(&path, "stale content that is longer than the report\n").unwrap();

        write_report(&ReplacementMap::from_keys(["a"]), &path, ReportFormat::Text).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a -> \\x61\n");
    }

    #[test]
    fn test_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = write_document(&path, b"{}").unwrap_err();
        assert!(matches!(err, Error::OutputUnwritable { .. }));
        assert!(!err.is_fatal());
    }
}
