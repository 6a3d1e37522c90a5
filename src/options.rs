//! Configuration for a pipeline run.
//!
//! This module provides:
//!
//! - [`RunOptions`]: input path, report path, report format
//! - [`ReportFormat`]: how the replacement map is written (plain lines or JSON)
//!
//! ## Examples
//!
//! ```rust
//! use keyescape::{ReportFormat, RunOptions};
//!
//! let options = RunOptions::new("config.json")
//!     .with_map_path("out/keys.txt")
//!     .with_report_format(ReportFormat::Json);
//!
//! assert_eq!(options.map_path.to_str(), Some("out/keys.txt"));
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// File name the replacement map is written to when no other path is given.
pub const DEFAULT_MAP_FILE: &str = "replacement_map.txt";

/// Output format of the replacement-map report.
///
/// - **Text**: one `original -> \xNN...` line per key (default)
/// - **Json**: a pretty-printed JSON array of `{original, escaped}` entries
///
/// # Examples
///
/// ```rust
/// use keyescape::ReportFormat;
///
/// assert_eq!(ReportFormat::Text.as_str(), "text");
/// assert_eq!("json".parse::<ReportFormat>(), Ok(ReportFormat::Json));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    /// Returns the lowercase name of this format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{other}' (expected text or json)")),
        }
    }
}

/// Options for a single pipeline run.
///
/// The input file is both read and overwritten; the report goes to
/// [`DEFAULT_MAP_FILE`] in the working directory unless redirected.
///
/// # Examples
///
/// ```rust
/// use keyescape::{ReportFormat, RunOptions, DEFAULT_MAP_FILE};
///
/// let options = RunOptions::new("data.json");
/// assert_eq!(options.map_path.to_str(), Some(DEFAULT_MAP_FILE));
/// assert_eq!(options.report_format, ReportFormat::Text);
/// ```
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub input: PathBuf,
    pub map_path: PathBuf,
    pub report_format: ReportFormat,
}

impl RunOptions {
    /// Creates default options for the given input file.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(input: P) -> Self {
        RunOptions {
            input: input.into(),
            map_path: PathBuf::from(DEFAULT_MAP_FILE),
            report_format: ReportFormat::default(),
        }
    }

    /// Sets where the replacement-map report is written.
    #[must_use]
    pub fn with_map_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.map_path = path.into();
        self
    }

    /// Sets the report format.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyescape::{ReportFormat, RunOptions};
    ///
    /// let options = RunOptions::new("a.json").with_report_format(ReportFormat::Json);
    /// assert_eq!(options.report_format, ReportFormat::Json);
    /// ```
    #[must_use]
    pub fn with_report_format(mut self, format: ReportFormat) -> Self {
        self.report_format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_format_parse() {
        assert_eq!("TEXT".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert_eq!("txt".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert_eq!("Json".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert!("yaml".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_builder_chain() {
        let options = RunOptions::new("in.json")
            .with_map_path("map.json")
            .with_report_format(ReportFormat::Json);

        assert_eq!(options.input, PathBuf::from("in.json"));
        assert_eq!(options.map_path, PathBuf::from("map.json"));
        assert_eq!(options.report_format, ReportFormat::Json);
    }
}
