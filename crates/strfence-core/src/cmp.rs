//! Bounded string comparison.
//!
//! Byte-wise comparison of NUL-terminated byte strings. Bytes past the end
//! of a slice compare as NUL, so an unterminated slice behaves like a
//! string that ends at the slice boundary. Results follow the
//! negative/zero/positive convention, with the difference taken between
//! the first non-matching bytes widened as unsigned values.

use crate::ctype::to_lower;

/// Compares two NUL-terminated byte strings lexicographically.
///
/// Returns a negative value if `a` sorts before `b`, zero if they are
/// equal, positive otherwise. Absent operands sort below present ones:
/// two absent operands compare equal, and a single absent operand yields
/// `-1` (or `1` when only `b` is absent), even against an empty string.
pub fn compare(a: Option<&[u8]>, b: Option<&[u8]>) -> i32 {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        (None, None) => return 0,
        (None, Some(_)) => return -1,
        (Some(_), None) => return 1,
    };
    let mut i = 0;
    loop {
        let x = if i < a.len() { a[i] } else { 0 };
        let y = if i < b.len() { b[i] } else { 0 };
        if x != y {
            return (x as i32) - (y as i32);
        }
        if x == 0 {
            return 0;
        }
        i += 1;
    }
}

/// Case-insensitive comparison of two NUL-terminated byte strings.
///
/// ASCII letters are folded to lowercase before each byte comparison;
/// every other byte compares as-is. Absent operands follow the same
/// ordering as [`compare`].
pub fn compare_ci(a: Option<&[u8]>, b: Option<&[u8]>) -> i32 {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        (None, None) => return 0,
        (None, Some(_)) => return -1,
        (Some(_), None) => return 1,
    };
    let mut i = 0;
    loop {
        let x = if i < a.len() { a[i] } else { 0 };
        let y = if i < b.len() { b[i] } else { 0 };
        let fx = to_lower(x);
        let fy = to_lower(y);
        if fx != fy {
            return (fx as i32) - (fy as i32);
        }
        if x == 0 {
            return 0;
        }
        i += 1;
    }
}

/// Compares at most `n` byte pairs of two NUL-terminated byte strings.
///
/// Stops at the first difference, at a shared terminator, or after `n`
/// pairs have matched. Returns 0 when `n` is zero or either operand is
/// absent; those degenerate cases carry no ordering signal.
pub fn compare_n(a: Option<&[u8]>, b: Option<&[u8]>, n: usize) -> i32 {
    let (Some(a), Some(b)) = (a, b) else { return 0 };
    for i in 0..n {
        let x = if i < a.len() { a[i] } else { 0 };
        let y = if i < b.len() { b[i] } else { 0 };
        if x != y {
            return (x as i32) - (y as i32);
        }
        if x == 0 {
            return 0;
        }
    }
    0
}
