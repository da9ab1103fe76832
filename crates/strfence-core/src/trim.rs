//! Whitespace trimming.
//!
//! Whitespace is the [`is_space`] set. The leading trim hands back a view
//! into the same buffer; the trailing trim rewrites the buffer in place.

use crate::ctype::is_space;
use crate::scan::length_bounded;

/// Returns the view of `s` past any leading whitespace.
///
/// The buffer is not modified; the view ends wherever the original slice
/// does, so terminator semantics carry over unchanged. A string that is
/// all whitespace yields the view starting at its terminator. Absent
/// input stays absent.
pub fn trim_leading(s: Option<&[u8]>) -> Option<&[u8]> {
    let s = s?;
    let start = s.iter().position(|&b| !is_space(b)).unwrap_or(s.len());
    Some(&s[start..])
}

/// Removes trailing whitespace in place.
///
/// The end of the string is located with [`length_bounded`] under
/// `max_len`, the scan rewinds over whitespace without ever moving before
/// index 0, and the NUL terminator is written after the last kept byte.
/// Returns the resulting length.
///
/// A non-empty string that is entirely whitespace keeps its first byte.
/// When the examined region fills the whole slice unterminated and ends
/// in non-whitespace there is no room for a terminator; the slice is
/// returned unmodified at its measured length. Absent input yields 0.
pub fn trim_trailing(s: Option<&mut [u8]>, max_len: usize) -> usize {
    let Some(s) = s else { return 0 };
    let len = length_bounded(Some(&s[..]), max_len);
    if len == 0 {
        return 0;
    }
    let mut end = len - 1;
    while end > 0 && is_space(s[end]) {
        end -= 1;
    }
    let new_len = end + 1;
    if new_len < s.len() {
        s[new_len] = 0;
    }
    new_len
}

/// Trims leading and trailing whitespace in place.
///
/// The leading cut is taken first as a view, then trailing whitespace is
/// removed within that view under `max_len`. Returns the advanced view,
/// NUL-terminated after its last non-whitespace byte. A fully-whitespace
/// string trims to empty. Absent input stays absent.
pub fn trim(s: Option<&mut [u8]>, max_len: usize) -> Option<&mut [u8]> {
    let s = s?;
    let start = s.iter().position(|&b| !is_space(b)).unwrap_or(s.len());
    trim_trailing(Some(&mut s[start..]), max_len);
    Some(&mut s[start..])
}
