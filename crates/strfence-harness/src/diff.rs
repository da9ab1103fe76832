//! Compact expected-vs-actual rendering for failed cases.

/// Byte offset of the first difference between two renderings, if any.
#[must_use]
pub fn first_diff_offset(expected: &str, actual: &str) -> Option<usize> {
    let a = expected.as_bytes();
    let b = actual.as_bytes();
    let min_len = a.len().min(b.len());
    for idx in 0..min_len {
        if a[idx] != b[idx] {
            return Some(idx);
        }
    }
    if a.len() == b.len() { None } else { Some(min_len) }
}

/// Render a three-line diff with a caret under the first divergent byte.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    match first_diff_offset(expected, actual) {
        None => String::from("values are identical"),
        Some(offset) => {
            let pad = " ".repeat(offset);
            format!(
                "expected: {expected}\nactual:   {actual}\ndiff:     {pad}^ first difference at byte {offset}"
            )
        }
    }
}
