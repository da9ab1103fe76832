//! Prefix and suffix tests.

use crate::scan::length_bounded;

/// Returns `true` when `s` begins with `prefix`.
///
/// The walk follows `prefix` up to its terminator, so a present empty
/// prefix matches any present string. Absent on either side is `false`;
/// this is the one place where absent and empty differ observably for a
/// predicate, and the distinction is kept.
pub fn starts_with(s: Option<&[u8]>, prefix: Option<&[u8]>) -> bool {
    let (Some(s), Some(prefix)) = (s, prefix) else {
        return false;
    };
    let mut i = 0;
    loop {
        let p = if i < prefix.len() { prefix[i] } else { 0 };
        if p == 0 {
            return true;
        }
        let c = if i < s.len() { s[i] } else { 0 };
        if c != p {
            return false;
        }
        i += 1;
    }
}

/// Returns `true` when `s` ends with `suffix`.
///
/// Both lengths are measured with [`length_bounded`] under `max_len`,
/// then the suffix is compared against the string's tail. A suffix longer
/// than the string never matches; a present empty suffix always does.
/// Absent on either side is `false`.
pub fn ends_with(s: Option<&[u8]>, suffix: Option<&[u8]>, max_len: usize) -> bool {
    let (Some(s), Some(suffix)) = (s, suffix) else {
        return false;
    };
    let s_len = length_bounded(Some(s), max_len);
    let suffix_len = length_bounded(Some(suffix), max_len);
    if suffix_len > s_len {
        return false;
    }
    s[s_len - suffix_len..s_len] == suffix[..suffix_len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_basic() {
        assert!(starts_with(Some(b"hello world\0"), Some(b"hello\0")));
        assert!(!starts_with(Some(b"hello world\0"), Some(b"world\0")));
    }

    #[test]
    fn test_starts_with_full_match() {
        assert!(starts_with(Some(b"abc\0"), Some(b"abc\0")));
    }

    #[test]
    fn test_starts_with_prefix_longer_than_string() {
        assert!(!starts_with(Some(b"ab\0"), Some(b"abc\0")));
    }

    #[test]
    fn test_starts_with_empty_prefix_matches() {
        assert!(starts_with(Some(b"abc\0"), Some(b"\0")));
        assert!(starts_with(Some(b"\0"), Some(b"\0")));
    }

    #[test]
    fn test_starts_with_absent_is_false() {
        assert!(!starts_with(None, Some(b"\0")));
        assert!(!starts_with(Some(b"abc\0"), None));
        assert!(!starts_with(None, None));
    }

    #[test]
    fn test_starts_with_unterminated_slices() {
        assert!(starts_with(Some(b"abcd"), Some(b"ab")));
        assert!(!starts_with(Some(b"ab"), Some(b"abc")));
    }

    #[test]
    fn test_ends_with_basic() {
        assert!(ends_with(Some(b"report.txt\0"), Some(b".txt\0"), 64));
        assert!(!ends_with(Some(b"report.txt\0"), Some(b".csv\0"), 64));
    }

    #[test]
    fn test_ends_with_full_match() {
        assert!(ends_with(Some(b"abc\0"), Some(b"abc\0"), 64));
    }

    #[test]
    fn test_ends_with_suffix_longer_than_string() {
        assert!(!ends_with(Some(b"txt\0"), Some(b"more.txt\0"), 64));
    }

    #[test]
    fn test_ends_with_empty_suffix_matches() {
        assert!(ends_with(Some(b"abc\0"), Some(b"\0"), 64));
        assert!(ends_with(Some(b"\0"), Some(b"\0"), 64));
    }

    #[test]
    fn test_ends_with_absent_is_false() {
        assert!(!ends_with(None, Some(b"x\0"), 64));
        assert!(!ends_with(Some(b"x\0"), None, 64));
        assert!(!ends_with(None, None, 64));
    }

    #[test]
    fn test_ends_with_max_len_bounds_both_measurements() {
        // Under a bound of 3 the string reads "aaa", which does not end in "ab".
        assert!(!ends_with(Some(b"aaab"), Some(b"ab\0"), 3));
        assert!(ends_with(Some(b"aaab"), Some(b"ab\0"), 4));
    }
}
