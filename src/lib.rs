//! # keyescape
//!
//! Rewrites the quoted keys of a JSON document as `\uXXXX` escape sequences
//! and records which key became which escape.
//!
//! ## What it does
//!
//! Given
//!
//! ```json
//! {"user":"alice","role":"admin"}
//! ```
//!
//! the keys `user` and `role` are replaced in place, values are left alone:
//!
//! ```json
//! {"\u0075\u0073\u0065\u0072":"alice","\u0072\u006f\u006c\u0065":"admin"}
//! ```
//!
//! A JSON parser reads both documents as the same object. A replacement map
//! (`user -> \x75\x73\x65\x72`, ...) is written next to it.
//!
//! ## Stages
//!
//! - **Load** ([`read_document`]): read the whole file as bytes
//! - **Extract** ([`collect_strings`]): find quoted tokens, alternating key/value roles
//! - **Encode** ([`encode()`]): one `\u00XY` unit per byte
//! - **Substitute** ([`substitute()`]): rewrite keys that fill a quoted region exactly
//! - **Write** ([`write_report`], [`write_document`]): report and rewritten document
//!
//! [`run`] performs all of them for a [`RunOptions`].
//!
//! ## Quick Start
//!
//! ```rust
//! use keyescape::{escape_document, render_report, ReportFormat};
//!
//! let escaped = escape_document(br#"{"a":"hello"}"#);
//! assert_eq!(escaped.document(), br#"{"\u0061":"hello"}"#);
//!
//! let report = render_report(&escaped.map, ReportFormat::Text).unwrap();
//! assert_eq!(report, b"a -> \\x61\n");
//! ```
//!
//! ## Not a JSON parser
//!
//! The scanner only looks at `"` bytes. It does not validate syntax, does
//! not understand nesting, and does not honor `\"` inside strings. See
//! [`format`] for the exact rules and their known gaps.

pub mod encode;
pub mod error;
pub mod extract;
pub mod format;
pub mod load;
pub mod map;
pub mod options;
pub mod pipeline;
pub mod report;
pub mod substitute;

pub use encode::encode;
pub use error::{Error, Result};
pub use extract::{collect_strings, Extraction, QuotedToken, Role, Scanner};
pub use load::{read_document, Document};
pub use map::ReplacementMap;
pub use options::{ReportFormat, RunOptions, DEFAULT_MAP_FILE};
pub use pipeline::{escape_document, run, Escaped, RunOutcome};
pub use report::{render_report, write_document, write_report};
pub use substitute::{substitute, Substitution};
