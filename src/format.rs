//! Input, output and escape formats
//!
//! This module documents the formats read and written by this crate.
//!
//! # Input
//!
//! Any file; JSON is the intended content, but nothing is validated. The file
//! is read as bytes and scanned for `"` characters only.
//!
//! ## Quoted tokens
//!
//! A quoted token is the byte run strictly between a `"` and the next `"`.
//! Tokens are numbered in order of appearance; odd-numbered tokens (1st,
//! 3rd, ...) are **keys** and even-numbered ones are **values**. Nothing
//! else in the document affects numbering:
//!
//! | Document | Keys | Values |
//! |----------|------|--------|
//! | `{"a":"hello"}` | `a` | `hello` |
//! | `{"a":1,"b":"x"}` | `a`, `x` | `b` |
//! | `["p","q","r"]` | `p`, `r` | `q` |
//!
//! A backslash does not escape a quote. `{"s":"a\"b"}` yields the tokens
//! `s` (key), `a\` (value) and nothing more: the final `"` opens a token that
//! never closes and is dropped.
//!
//! # Escape sequence
//!
//! Each byte `b` becomes `\u` followed by four lowercase hex digits of `b`:
//!
//! | Input | Escape |
//! |-------|--------|
//! | `a` | `\u0061` |
//! | `id` | `\u0069\u0064` |
//! | `é` (bytes `c3 a9`) | `\u00c3\u00a9` |
//! | (empty) | (empty) |
//!
//! # Rewritten document
//!
//! A key occurrence is rewritten only when it fills a quoted region exactly:
//! the byte before it is `"` (or it starts the document) and the byte after
//! it is `"` (or it ends the document). After each hit, with or without a
//! rewrite, the search resumes `6 * len(key)` bytes further on.
//!
//! ```text
//! {"name":"my name","id":7}
//! {"\u006e\u0061\u006d\u0065":"my name","\u0069\u0064":7}
//! ```
//!
//! # Replacement map report
//!
//! Text format, one line per key in order of first appearance, each unit
//! shortened from `\u00XY` to `\xXY`:
//!
//! ```text
//! name -> \x6e\x61\x6d\x65
//! id -> \x69\x64
//! ```
//!
//! JSON format, same order:
//!
//! ```json
//! [
//!   { "original": "name", "escaped": "\\x6e\\x61\\x6d\\x65" },
//!   { "original": "id", "escaped": "\\x69\\x64" }
//! ]
//! ```
//!
//! # Limitations
//!
//! - **Escaped quotes**: `\"` inside a string still toggles the scanner
//! - **Stride**: a rejected hit can hide a valid occurrence right behind it
//! - **Multi-byte characters**: escaped per byte, not per code point
//! - **Not idempotent**: a second run sees escape text where the keys were
//!   and escapes it again

// This module contains only documentation; no implementation code
