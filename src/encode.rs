//! Unicode escape encoding.
//!
//! Every input byte becomes one `\uXXXX` unit with four lowercase hex digits.
//! Bytes are escaped one at a time, so a multi-byte UTF-8 character turns into
//! several units (`é` becomes `\u00c3\u00a9`, not `\u00e9`).
//!
//! ```rust
//! use keyescape::encode::{collapse, encode};
//!
//! assert_eq!(encode("id"), "\\u0069\\u0064");
//! assert_eq!(collapse(&encode("id")), "\\x69\\x64");
//! ```

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Prefix of one escape unit.
pub const UNIT_PREFIX: &str = "\\u";

/// Length of one `\uXXXX` unit.
pub const UNIT_LEN: usize = 6;

/// Returns the four hex digits for a single byte.
///
/// The byte is read as an unsigned 16-bit code value, so the two high
/// digits are always `0`.
///
/// # Examples
///
/// ```rust
/// use keyescape::encode::hex_quad;
///
/// assert_eq!(&hex_quad(b'A'), b"0041");
/// assert_eq!(&hex_quad(0xff), b"00ff");
/// ```
#[inline]
#[must_use]
pub fn hex_quad(byte: u8) -> [u8; 4] {
    let c = u16::from(byte);
    [
        HEX_DIGITS[usize::from((c >> 12) & 0xF)],
        HEX_DIGITS[usize::from((c >> 8) & 0xF)],
        HEX_DIGITS[usize::from((c >> 4) & 0xF)],
        HEX_DIGITS[usize::from(c & 0xF)],
    ]
}

/// Length of the escape sequence for an input of `len` bytes.
#[inline]
#[must_use]
pub const fn encoded_len(len: usize) -> usize {
    len * UNIT_LEN
}

/// Converts a byte string into its full Unicode escape sequence.
///
/// Pure and total: any byte value is accepted and the output is always
/// `6 * input.len()` ASCII characters.
///
/// # Examples
///
/// ```rust
/// use keyescape::encode;
///
/// assert_eq!(encode("a"), "\\u0061");
/// assert_eq!(encode(b"\x00\xff"), "\\u0000\\u00ff");
/// assert_eq!(encode(""), "");
/// ```
#[must_use]
pub fn encode<T: AsRef<[u8]> + ?Sized>(input: &T) -> String {
    let bytes = input.as_ref();
    let mut out = String::with_capacity(encoded_len(bytes.len()));
    for &byte in bytes {
        out.push_str(UNIT_PREFIX);
        for digit in hex_quad(byte) {
            out.push(char::from(digit));
        }
    }
    out
}

/// Shortens every `\u00XY` unit to `\xXY`.
///
/// Used only for the human-readable report; the rewritten document keeps
/// the full form. Scanning resumes right after each shortened unit, and text
/// that is not a `\u00` unit is copied through unchanged.
///
/// # Examples
///
/// ```rust
/// use keyescape::encode::collapse;
///
/// assert_eq!(collapse("\\u0061\\u0062"), "\\x61\\x62");
/// assert_eq!(collapse("\\u1234"), "\\u1234");
/// ```
#[must_use]
pub fn collapse(escaped: &str) -> String {
    const MARKER: &str = "\\u00";

    let mut out = String::with_capacity(escaped.len());
    let mut rest = escaped;
    while let Some(idx) = rest.find(MARKER) {
        out.push_str(&rest[..idx]);
        out.push_str("\\x");
        let tail = &rest[idx + MARKER.len()..];
        let digits = tail.char_indices().nth(2).map_or(tail.len(), |(i, _)| i);
        out.push_str(&tail[..digits]);
        rest = &tail[digits..];
    }
    out.push_str(rest);
    out
}
