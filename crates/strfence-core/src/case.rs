//! In-place case conversion.

use crate::ctype::{to_lower, to_upper};

/// Uppercases ASCII letters in place, up to the NUL terminator.
///
/// Bytes outside `a-z` are left alone. Absent input is a no-op.
pub fn make_upper(s: Option<&mut [u8]>) {
    let Some(s) = s else { return };
    for b in s.iter_mut() {
        if *b == 0 {
            break;
        }
        *b = to_upper(*b);
    }
}

/// Lowercases ASCII letters in place, up to the NUL terminator.
///
/// Bytes outside `A-Z` are left alone. Absent input is a no-op.
pub fn make_lower(s: Option<&mut [u8]>) {
    let Some(s) = s else { return };
    for b in s.iter_mut() {
        if *b == 0 {
            break;
        }
        *b = to_lower(*b);
    }
}
