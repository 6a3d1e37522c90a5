//! Boundary-checked key substitution.
//!
//! For each `(key, escape)` entry of a [`ReplacementMap`], every literal
//! occurrence of the key that sits directly between two quotes (or touches
//! the start/end of the document) is replaced by the escape sequence.
//!
//! The search for the next occurrence always resumes `escape.len()` bytes past
//! the previous hit, whether or not that hit was replaced. A rejected hit can
//! therefore hide a valid occurrence that starts within that stride:
//!
//! ```rust
//! use keyescape::{substitute, ReplacementMap};
//!
//! let map = ReplacementMap::from_keys(["a"]);
//!
//! let out = substitute(br#"{"a":"hello"}"#, &map);
//! assert_eq!(out.document, br#"{"\u0061":"hello"}"#);
//!
//! // `xa` is rejected at offset 1; the next search starts at 7, past `"a"`.
//! let out = substitute(br#"xa"a""#, &map);
//! assert_eq!(out.document, br#"xa"a""#);
//! assert_eq!(out.replacements, 0);
//! ```

use crate::map::ReplacementMap;
use memchr::memmem;

const QUOTE: u8 = b'"';

/// The rewritten document and how many occurrences were replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub document: Vec<u8>,
    pub replacements: usize,
}

/// Applies every entry of `map` to a copy of `document`, in map order.
///
/// Later entries see the output of earlier ones.
#[must_use]
pub fn substitute(document: &[u8], map: &ReplacementMap) -> Substitution {
    let mut output = document.to_vec();
    let mut replacements = 0;
    for (key, escape) in map.iter() {
        let count = substitute_key(&mut output, key, escape.as_bytes());
        if count > 0 {
            tracing::trace!(
                key = %String::from_utf8_lossy(key),
                count,
                "replaced quoted key"
            );
        }
        replacements += count;
    }
    Substitution {
        document: output,
        replacements,
    }
}

/// Replaces the quote-delimited occurrences of `key` in `document` with
/// `replacement`, returning the number of replacements made.
///
/// An empty key equal to its (empty) replacement stops after the first hit.
pub fn substitute_key(document: &mut Vec<u8>, key: &[u8], replacement: &[u8]) -> usize {
    let mut count = 0;
    let mut found = find_from(document, key, 0);
    while let Some(at) = found {
        let end = at + key.len();
        let opens = at == 0 || document[at - 1] == QUOTE;
        let closes = end == document.len() || document[end] == QUOTE;
        if opens && closes && key != replacement {
            document.splice(at..end, replacement.iter().copied());
            count += 1;
        }

        found = find_from(document, key, at + replacement.len());
        if key == replacement {
            break;
        }
    }
    count
}

/// Literal search for `needle` starting at byte `from`; `None` past the end.
fn find_from(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    memmem::find(&haystack[from..], needle).map(|idx| idx + from)
}
