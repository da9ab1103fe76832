//! Byte classification and case conversion.
//!
//! ASCII-only predicates shared across the toolkit. No locale handling;
//! bytes above `0x7F` are never letters, digits, or whitespace.

/// Returns `true` if `ch` is an ASCII whitespace byte.
///
/// Whitespace: space, tab, newline, carriage return, vertical tab, form feed.
#[inline]
pub fn is_space(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Returns `true` if `ch` is a decimal digit (`[0-9]`).
#[inline]
pub fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// Returns `true` if `ch` is an ASCII letter (`[A-Za-z]`).
#[inline]
pub fn is_alpha(ch: u8) -> bool {
    ch.is_ascii_alphabetic()
}

/// Returns `true` if `ch` is a letter or digit (`[A-Za-z0-9]`).
#[inline]
pub fn is_alnum(ch: u8) -> bool {
    ch.is_ascii_alphanumeric()
}

/// Returns `true` if `ch` is an uppercase letter (`[A-Z]`).
#[inline]
pub fn is_upper(ch: u8) -> bool {
    ch.is_ascii_uppercase()
}

/// Returns `true` if `ch` is a lowercase letter (`[a-z]`).
#[inline]
pub fn is_lower(ch: u8) -> bool {
    ch.is_ascii_lowercase()
}

/// Converts a lowercase letter to uppercase; every other byte passes through.
#[inline]
pub fn to_upper(ch: u8) -> u8 {
    if is_lower(ch) { ch - 32 } else { ch }
}

/// Converts an uppercase letter to lowercase; every other byte passes through.
#[inline]
pub fn to_lower(ch: u8) -> u8 {
    if is_upper(ch) { ch + 32 } else { ch }
}
