//! Bounded length measurement and search.
//!
//! Length and search operations stop at the NUL terminator or at the end
//! of the slice, whichever comes first. Search results are byte indices
//! into the scanned slice.

/// Returns the number of bytes before the NUL terminator, examining at
/// most `max_len` bytes.
///
/// The scan never reads past `max_len` or the end of the slice; an
/// unterminated region yields the examined length. Absent input yields 0.
pub fn length_bounded(s: Option<&[u8]>, max_len: usize) -> usize {
    let Some(s) = s else { return 0 };
    let limit = max_len.min(s.len());
    s.iter().take(limit).position(|&b| b == 0).unwrap_or(limit)
}

/// Locates the first occurrence of `ch` before the NUL terminator.
///
/// Returns the byte index of the first match. `None` when `ch` does not
/// occur, when the input is absent, or when `ch` is NUL: the terminator
/// lies at the end of the string, not before it, so it is never found.
pub fn find_char(s: Option<&[u8]>, ch: u8) -> Option<usize> {
    let s = s?;
    let len = length_bounded(Some(s), s.len());
    s[..len].iter().position(|&b| b == ch)
}

/// Locates the last occurrence of `ch` before the NUL terminator.
///
/// Same absent and NUL policy as [`find_char`].
pub fn rfind_char(s: Option<&[u8]>, ch: u8) -> Option<usize> {
    let s = s?;
    let len = length_bounded(Some(s), s.len());
    s[..len].iter().rposition(|&b| b == ch)
}

/// Finds the first occurrence of `pattern` in `s`.
///
/// Returns the byte index where the match starts. An absent or empty
/// pattern is never found, and neither is a pattern longer than the
/// string. The scan is a plain window comparison, O(len(s) * len(pattern)).
pub fn find_substring(s: Option<&[u8]>, pattern: Option<&[u8]>) -> Option<usize> {
    let (Some(s), Some(pattern)) = (s, pattern) else {
        return None;
    };
    let p_len = length_bounded(Some(pattern), pattern.len());
    if p_len == 0 {
        return None;
    }
    let s_len = length_bounded(Some(s), s.len());
    if p_len > s_len {
        return None;
    }

    let haystack = &s[..s_len];
    let pattern = &pattern[..p_len];

    haystack.windows(p_len).position(|window| window == pattern)
}
