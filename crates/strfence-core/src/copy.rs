//! Bounded copy and concatenation.
//!
//! Destination capacity always includes the terminator slot: an operation
//! with effective capacity `c` writes at most `c - 1` data bytes followed
//! by the NUL. The effective capacity is the caller's `capacity` clamped
//! to the destination slice length.

use crate::scan::length_bounded;

/// Copies the string in `src` into `dest`, truncating to fit.
///
/// At most `capacity - 1` bytes are copied and a NUL terminator is always
/// written after them. Returns the number of bytes copied, not counting
/// the terminator; a result shorter than the source length signals
/// truncation.
///
/// Nothing is written when either buffer is absent or the effective
/// capacity is zero, and the result is then 0.
pub fn copy(dest: Option<&mut [u8]>, src: Option<&[u8]>, capacity: usize) -> usize {
    let (Some(dest), Some(src)) = (dest, src) else {
        return 0;
    };
    let effective = capacity.min(dest.len());
    if effective == 0 {
        return 0;
    }
    let src_len = length_bounded(Some(src), src.len());
    let count = src_len.min(effective - 1);
    dest[..count].copy_from_slice(&src[..count]);
    dest[count] = 0;
    count
}

/// Appends the string in `src` to the string in `dest`, truncating to fit.
///
/// The existing destination length is measured within the effective
/// capacity, at most the remaining room less the terminator slot is
/// appended, and the result is always NUL-terminated. Returns the total
/// resulting length, not counting the terminator.
///
/// A destination left unterminated through its entire effective capacity
/// is cut back to `capacity - 1` bytes and terminated; the append then
/// has no room and the call degrades to that repair. Absent buffers and
/// zero effective capacity leave `dest` untouched and return 0.
pub fn concat(dest: Option<&mut [u8]>, src: Option<&[u8]>, capacity: usize) -> usize {
    let (Some(dest), Some(src)) = (dest, src) else {
        return 0;
    };
    let effective = capacity.min(dest.len());
    if effective == 0 {
        return 0;
    }
    let dest_len = length_bounded(Some(&dest[..]), effective).min(effective - 1);
    let src_len = length_bounded(Some(src), src.len());
    let count = src_len.min(effective - 1 - dest_len);
    dest[dest_len..dest_len + count].copy_from_slice(&src[..count]);
    dest[dest_len + count] = 0;
    dest_len + count
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn to_c_string(mut bytes: Vec<u8>) -> Vec<u8> {
        bytes.retain(|byte| *byte != 0);
        bytes.push(0);
        bytes
    }

    #[test]
    fn test_copy_basic() {
        let mut buf = [0xFFu8; 8];
        let copied = copy(Some(&mut buf), Some(b"hello\0"), 8);
        assert_eq!(copied, 5);
        assert_eq!(&buf[..6], b"hello\0");
    }

    #[test]
    fn test_copy_truncates_and_terminates() {
        let mut buf = [0xFFu8; 8];
        let copied = copy(Some(&mut buf), Some(b"hello\0"), 4);
        assert_eq!(copied, 3);
        assert_eq!(&buf[..4], b"hel\0");
        assert_eq!(buf[4], 0xFF); // past the effective capacity: untouched
    }

    #[test]
    fn test_copy_empty_source_writes_terminator_only() {
        let mut buf = [0xFFu8; 4];
        let copied = copy(Some(&mut buf), Some(b"\0"), 4);
        assert_eq!(copied, 0);
        assert_eq!(buf[0], 0);
        assert_eq!(buf[1], 0xFF);
    }

    #[test]
    fn test_copy_absent_inputs_write_nothing() {
        let mut buf = [0xFFu8; 4];
        assert_eq!(copy(None, Some(b"hi\0"), 4), 0);
        assert_eq!(copy(Some(&mut buf), None, 4), 0);
        assert_eq!(buf, [0xFF; 4]);
    }

    #[test]
    fn test_copy_zero_capacity_writes_nothing() {
        let mut buf = [0xFFu8; 4];
        assert_eq!(copy(Some(&mut buf), Some(b"hi\0"), 0), 0);
        assert_eq!(buf, [0xFF; 4]);
    }

    #[test]
    fn test_copy_capacity_clamped_to_slice() {
        let mut buf = [0xFFu8; 3];
        let copied = copy(Some(&mut buf), Some(b"hello\0"), 64);
        assert_eq!(copied, 2);
        assert_eq!(&buf, b"he\0");
    }

    #[test]
    fn test_copy_capacity_one_fits_only_terminator() {
        let mut buf = [0xFFu8; 4];
        let copied = copy(Some(&mut buf), Some(b"hi\0"), 1);
        assert_eq!(copied, 0);
        assert_eq!(buf[0], 0);
        assert_eq!(buf[1], 0xFF);
    }

    #[test]
    fn test_concat_basic() {
        let mut buf = [0u8; 12];
        copy(Some(&mut buf), Some(b"hello\0"), 12);
        let total = concat(Some(&mut buf), Some(b" world\0"), 12);
        assert_eq!(total, 11);
        assert_eq!(&buf[..12], b"hello world\0");
    }

    #[test]
    fn test_concat_truncates_to_capacity() {
        let mut buf = [0u8; 8];
        copy(Some(&mut buf), Some(b"abc\0"), 8);
        let total = concat(Some(&mut buf), Some(b"defgh\0"), 8);
        assert_eq!(total, 7);
        assert_eq!(&buf, b"abcdefg\0");
    }

    #[test]
    fn test_concat_onto_empty_matches_copy() {
        let mut appended = [0xFFu8; 8];
        let mut copied = [0xFFu8; 8];
        copy(Some(&mut appended), Some(b"\0"), 8);
        concat(Some(&mut appended), Some(b"xyz\0"), 8);
        copy(Some(&mut copied), Some(b"xyz\0"), 8);
        assert_eq!(appended, copied);
    }

    #[test]
    fn test_concat_full_dest_appends_nothing() {
        let mut buf = *b"abcdefg\0";
        let total = concat(Some(&mut buf), Some(b"xyz\0"), 8);
        assert_eq!(total, 7);
        assert_eq!(&buf, b"abcdefg\0");
    }

    #[test]
    fn test_concat_unterminated_dest_is_cut_back_and_terminated() {
        let mut buf = *b"abcd";
        let total = concat(Some(&mut buf), Some(b"ef\0"), 4);
        assert_eq!(total, 3);
        assert_eq!(&buf, b"abc\0");
    }

    #[test]
    fn test_concat_absent_inputs_write_nothing() {
        let mut buf = *b"ab\0\xFF";
        assert_eq!(concat(None, Some(b"x\0"), 4), 0);
        assert_eq!(concat(Some(&mut buf), None, 4), 0);
        assert_eq!(&buf, b"ab\0\xFF");
    }

    proptest! {
        #[test]
        fn prop_copy_stays_in_capacity_and_terminates(
            src in proptest::collection::vec(any::<u8>(), 0..64),
            capacity in 0usize..32,
        ) {
            let src = to_c_string(src);
            let mut buf = [0xA5u8; 32];
            let copied = copy(Some(&mut buf), Some(&src), capacity);

            if capacity == 0 {
                prop_assert_eq!(copied, 0);
                prop_assert!(buf.iter().all(|&b| b == 0xA5));
            } else {
                let src_len = length_bounded(Some(&src), src.len());
                prop_assert_eq!(copied, src_len.min(capacity - 1));
                prop_assert_eq!(buf[copied], 0);
                prop_assert_eq!(&buf[..copied], &src[..copied]);
                for &b in &buf[capacity..] {
                    prop_assert_eq!(b, 0xA5);
                }
            }
        }

        #[test]
        fn prop_concat_result_is_terminated_within_capacity(
            head in proptest::collection::vec(any::<u8>(), 0..24),
            tail in proptest::collection::vec(any::<u8>(), 0..24),
            capacity in 1usize..32,
        ) {
            let head = to_c_string(head);
            let tail = to_c_string(tail);
            let mut buf = [0x5Au8; 32];
            copy(Some(&mut buf), Some(&head), capacity);
            let total = concat(Some(&mut buf), Some(&tail), capacity);

            prop_assert!(total <= capacity - 1);
            prop_assert_eq!(buf[total], 0);
            let head_len = length_bounded(Some(&head), head.len());
            prop_assert!(total >= head_len.min(capacity - 1));
        }
    }
}
