//! Fixture case execution against the toolkit operations.
//!
//! The executor decodes named JSON inputs, invokes the operation, and renders
//! the outcome as a canonical string that fixture files record in `expected`.
//!
//! Input conventions, per field:
//! - `null` denotes an absent buffer.
//! - A JSON string denotes ASCII bytes with the terminator appended, so
//!   `"ab"` decodes to `[97, 98, 0]` and `""` to `[0]`.
//! - A JSON array denotes raw bytes exactly as written; `[]` is a zero-length
//!   buffer and arrays without a `0` model unterminated storage.
//! - Numbers decode capacities, bounds, and window lengths.
//! - Single bytes (`ch`, `delimiter`) accept a number or a one-character
//!   ASCII string.
//!
//! Output conventions:
//! - Plain results render bare: counts and lengths in decimal, comparisons as
//!   the signed difference, predicates as `true`/`false`.
//! - Missing search results render as `none`.
//! - Buffers render in byte-array form, e.g. `[97, 98, 0]`; absent buffers
//!   render as `null`.
//! - Mutating operations append the final buffer state, e.g.
//!   `len=2 dest=[97, 98, 0, 0]`.

use serde_json::Value;

use crate::error::HarnessError;

/// Execute one fixture case and return its canonical rendering.
pub fn execute_case(operation: &str, inputs: &Value) -> Result<String, HarnessError> {
    match operation {
        "copy" | "concat" => {
            let mut dest = buffer_arg(operation, inputs, "dest")?;
            let src = buffer_arg(operation, inputs, "src")?;
            let capacity = usize_arg(operation, inputs, "capacity")?;
            let len = if operation == "copy" {
                strfence_core::copy(dest.as_deref_mut(), src.as_deref(), capacity)
            } else {
                strfence_core::concat(dest.as_deref_mut(), src.as_deref(), capacity)
            };
            Ok(format!("len={len} dest={}", render_buffer(dest.as_deref())))
        }
        "compare" => {
            let a = buffer_arg(operation, inputs, "a")?;
            let b = buffer_arg(operation, inputs, "b")?;
            Ok(strfence_core::compare(a.as_deref(), b.as_deref()).to_string())
        }
        "compare_ci" => {
            let a = buffer_arg(operation, inputs, "a")?;
            let b = buffer_arg(operation, inputs, "b")?;
            Ok(strfence_core::compare_ci(a.as_deref(), b.as_deref()).to_string())
        }
        "compare_n" => {
            let a = buffer_arg(operation, inputs, "a")?;
            let b = buffer_arg(operation, inputs, "b")?;
            let n = usize_arg(operation, inputs, "n")?;
            Ok(strfence_core::compare_n(a.as_deref(), b.as_deref(), n).to_string())
        }
        "length_bounded" => {
            let s = buffer_arg(operation, inputs, "s")?;
            let max_len = usize_arg(operation, inputs, "max_len")?;
            Ok(strfence_core::length_bounded(s.as_deref(), max_len).to_string())
        }
        "find_char" | "rfind_char" => {
            let s = buffer_arg(operation, inputs, "s")?;
            let ch = byte_arg(operation, inputs, "ch")?;
            let index = if operation == "find_char" {
                strfence_core::find_char(s.as_deref(), ch)
            } else {
                strfence_core::rfind_char(s.as_deref(), ch)
            };
            Ok(render_index(index))
        }
        "find_substring" => {
            let s = buffer_arg(operation, inputs, "s")?;
            let pattern = buffer_arg(operation, inputs, "pattern")?;
            let index = strfence_core::find_substring(s.as_deref(), pattern.as_deref());
            Ok(render_index(index))
        }
        "trim_leading" => {
            let s = buffer_arg(operation, inputs, "s")?;
            let view = strfence_core::trim_leading(s.as_deref());
            Ok(format!("view={}", render_buffer(view)))
        }
        "trim_trailing" => {
            let mut s = buffer_arg(operation, inputs, "s")?;
            let max_len = usize_arg(operation, inputs, "max_len")?;
            let len = strfence_core::trim_trailing(s.as_deref_mut(), max_len);
            Ok(format!("len={len} buf={}", render_buffer(s.as_deref())))
        }
        "trim" => {
            let mut s = buffer_arg(operation, inputs, "s")?;
            let max_len = usize_arg(operation, inputs, "max_len")?;
            let view = match strfence_core::trim(s.as_deref_mut(), max_len) {
                Some(view) => format!("{view:?}"),
                None => String::from("null"),
            };
            Ok(format!("view={view} buf={}", render_buffer(s.as_deref())))
        }
        "tokenize" => {
            let mut s = buffer_arg(operation, inputs, "s")?;
            let delimiter = byte_arg(operation, inputs, "delimiter")?;
            let list = strfence_core::tokenize(s.as_deref_mut(), delimiter);
            match s.as_deref() {
                Some(buf) => {
                    let tokens: Vec<&[u8]> = (0..list.count())
                        .filter_map(|index| list.token(buf, index))
                        .collect();
                    Ok(format!(
                        "count={} tokens={tokens:?} buf={buf:?}",
                        list.count()
                    ))
                }
                None => Ok(String::from("count=0 tokens=[] buf=null")),
            }
        }
        "starts_with" => {
            let s = buffer_arg(operation, inputs, "s")?;
            let prefix = buffer_arg(operation, inputs, "prefix")?;
            Ok(strfence_core::starts_with(s.as_deref(), prefix.as_deref()).to_string())
        }
        "ends_with" => {
            let s = buffer_arg(operation, inputs, "s")?;
            let suffix = buffer_arg(operation, inputs, "suffix")?;
            let max_len = usize_arg(operation, inputs, "max_len")?;
            Ok(strfence_core::ends_with(s.as_deref(), suffix.as_deref(), max_len).to_string())
        }
        "make_upper" | "make_lower" => {
            let mut s = buffer_arg(operation, inputs, "s")?;
            if operation == "make_upper" {
                strfence_core::make_upper(s.as_deref_mut());
            } else {
                strfence_core::make_lower(s.as_deref_mut());
            }
            Ok(format!("buf={}", render_buffer(s.as_deref())))
        }
        "is_space" | "is_digit" | "is_alpha" | "is_alnum" | "is_upper" | "is_lower" => {
            let ch = byte_arg(operation, inputs, "ch")?;
            let verdict = match operation {
                "is_space" => strfence_core::is_space(ch),
                "is_digit" => strfence_core::is_digit(ch),
                "is_alpha" => strfence_core::is_alpha(ch),
                "is_alnum" => strfence_core::is_alnum(ch),
                "is_upper" => strfence_core::is_upper(ch),
                _ => strfence_core::is_lower(ch),
            };
            Ok(verdict.to_string())
        }
        "to_upper" | "to_lower" => {
            let ch = byte_arg(operation, inputs, "ch")?;
            let folded = if operation == "to_upper" {
                strfence_core::to_upper(ch)
            } else {
                strfence_core::to_lower(ch)
            };
            Ok(folded.to_string())
        }
        other => Err(HarnessError::UnknownOperation {
            operation: other.to_string(),
        }),
    }
}

fn buffer_arg(
    operation: &str,
    inputs: &Value,
    field: &str,
) -> Result<Option<Vec<u8>>, HarnessError> {
    let Some(value) = inputs.get(field) else {
        return Err(HarnessError::malformed(
            operation,
            field,
            "is required (use null for an absent buffer)",
        ));
    };
    match value {
        Value::Null => Ok(None),
        Value::String(text) => {
            if !text.is_ascii() {
                return Err(HarnessError::malformed(
                    operation,
                    field,
                    "string form must be ASCII",
                ));
            }
            let mut bytes = text.as_bytes().to_vec();
            bytes.push(0);
            Ok(Some(bytes))
        }
        Value::Array(items) => {
            let mut bytes = Vec::with_capacity(items.len());
            for item in items {
                let Some(byte) = item.as_u64().filter(|&byte| byte <= 255) else {
                    return Err(HarnessError::malformed(
                        operation,
                        field,
                        "array form must hold byte values 0..=255",
                    ));
                };
                bytes.push(byte as u8);
            }
            Ok(Some(bytes))
        }
        _ => Err(HarnessError::malformed(
            operation,
            field,
            "must be null, an ASCII string, or a byte array",
        )),
    }
}

fn usize_arg(operation: &str, inputs: &Value, field: &str) -> Result<usize, HarnessError> {
    let Some(value) = inputs.get(field) else {
        return Err(HarnessError::malformed(operation, field, "is required"));
    };
    value
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| HarnessError::malformed(operation, field, "must be a non-negative integer"))
}

fn byte_arg(operation: &str, inputs: &Value, field: &str) -> Result<u8, HarnessError> {
    let Some(value) = inputs.get(field) else {
        return Err(HarnessError::malformed(operation, field, "is required"));
    };
    match value {
        Value::Number(_) => value
            .as_u64()
            .filter(|&byte| byte <= 255)
            .map(|byte| byte as u8)
            .ok_or_else(|| {
                HarnessError::malformed(operation, field, "must be a byte value 0..=255")
            }),
        Value::String(text) if text.len() == 1 && text.is_ascii() => Ok(text.as_bytes()[0]),
        _ => Err(HarnessError::malformed(
            operation,
            field,
            "must be a byte value or a one-character ASCII string",
        )),
    }
}

fn render_buffer(buf: Option<&[u8]>) -> String {
    match buf {
        Some(bytes) => format!("{bytes:?}"),
        None => String::from("null"),
    }
}

fn render_index(index: Option<usize>) -> String {
    match index {
        Some(i) => i.to_string(),
        None => String::from("none"),
    }
}
