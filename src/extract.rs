//! Quoted-string extraction.
//!
//! The [`Scanner`] walks raw document bytes and yields every region found
//! between two `"` bytes. It is not a JSON parser: braces, colons, commas and
//! whitespace are skipped, and a backslash before a quote does not protect it.
//! Roles alternate strictly by order of appearance, starting with
//! [`Role::Key`].
//!
//! ```rust
//! use keyescape::extract::{Role, Scanner};
//!
//! let roles: Vec<_> = Scanner::new(br#"{"a":"hello"}"#)
//!     .map(|token| (token.text, token.role))
//!     .collect();
//!
//! assert_eq!(roles, vec![(&b"a"[..], Role::Key), (&b"hello"[..], Role::Value)]);
//! ```
//!
//! [`collect_strings`] runs the scanner to completion and groups the tokens
//! into an [`Extraction`].

use crate::encode::encode;
use crate::map::ReplacementMap;
use indexmap::{IndexMap, IndexSet};
use memchr::memchr;

const QUOTE: u8 = b'"';

/// Role of a quoted token, assigned by alternation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Key,
    Value,
}

impl Role {
    #[must_use]
    pub const fn is_key(self) -> bool {
        matches!(self, Role::Key)
    }

    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Role::Key => Role::Value,
            Role::Value => Role::Key,
        }
    }
}

/// A region of the document found strictly between two quotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuotedToken<'a> {
    /// Bytes between the quotes, without the quotes.
    pub text: &'a [u8],
    pub role: Role,
    /// Byte offset of the opening quote.
    pub start: usize,
}

/// Two-state quote scanner over raw document bytes.
pub struct Scanner<'a> {
    input: &'a [u8],
    position: usize,
    next_role: Role,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Scanner {
            input,
            position: 0,
            next_role: Role::Key,
        }
    }

    /// Returns the next closed quoted region, or `None` at end of input.
    ///
    /// An opening quote with no closing partner ends the scan and its partial
    /// token is dropped.
    pub fn next_token(&mut self) -> Option<QuotedToken<'a>> {
        let open = self.position + memchr(QUOTE, self.rest())?;
        let body = open + 1;
        let Some(len) = memchr(QUOTE, &self.input[body..]) else {
            tracing::debug!(offset = open, "unterminated quote, trailing token dropped");
            self.position = self.input.len();
            return None;
        };

        let close = body + len;
        let token = QuotedToken {
            text: &self.input[body..close],
            role: self.next_role,
            start: open,
        };
        self.next_role = self.next_role.flip();
        self.position = close + 1;
        Some(token)
    }

    fn rest(&self) -> &'a [u8] {
        &self.input[self.position..]
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = QuotedToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Every quoted token of a document, grouped by role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    keys: IndexSet<Vec<u8>>,
    values: IndexMap<Vec<u8>, String>,
    tokens: usize,
}

impl Extraction {
    /// Distinct key-role tokens, in order of first appearance.
    pub fn keys(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.keys.iter().map(Vec::as_slice)
    }

    /// Distinct value-role tokens with their escape sequence.
    ///
    /// These are kept for display only and never drive substitution.
    pub fn values(&self) -> impl Iterator<Item = (&[u8], &str)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_slice(), v.as_str()))
    }

    #[must_use]
    pub fn is_key<K: AsRef<[u8]> + ?Sized>(&self, token: &K) -> bool {
        self.keys.contains(token.as_ref())
    }

    /// Number of distinct key-role tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of closed quoted regions seen, duplicates included.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.tokens
    }

    /// Builds the replacement map, encoding every key afresh.
    #[must_use]
    pub fn replacement_map(&self) -> ReplacementMap {
        ReplacementMap::from_keys(&self.keys)
    }

    #[must_use]
    pub fn into_replacement_map(self) -> ReplacementMap {
        ReplacementMap::from_keys(self.keys)
    }
}

/// Scans `input` and collects its key-role and value-role tokens.
///
/// # Examples
///
/// ```rust
/// use keyescape::collect_strings;
///
/// let extraction = collect_strings(br#"{"a":"hello","b":"a"}"#);
///
/// assert!(extraction.is_key("a"));
/// assert!(extraction.is_key("b"));
/// assert!(!extraction.is_key("hello"));
/// assert_eq!(extraction.len(), 2);
/// assert_eq!(extraction.token_count(), 4);
/// ```
#[must_use]
pub fn collect_strings(input: &[u8]) -> Extraction {
    let mut extraction = Extraction::default();
    for token in Scanner::new(input) {
        extraction.tokens += 1;
        match token.role {
            Role::Key => {
                if !extraction.keys.contains(token.text) {
                    extraction.keys.insert(token.text.to_vec());
                }
            }
            Role::Value => {
                extraction
                    .values
                    .insert(token.text.to_vec(), encode(token.text));
            }
        }
    }
    extraction
}
