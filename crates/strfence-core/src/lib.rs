//! # strfence-core
//!
//! Bounded, termination-safe byte-string primitives.
//!
//! Every operation works on caller-owned byte slices holding NUL-terminated
//! string data: a `0x00` byte marks the logical end of the string and the
//! slice length is the hard physical bound. Operations take explicit
//! capacities or length bounds, clamp them to the slice they were handed,
//! and never read or write past either. Nothing here allocates.
//!
//! Absent buffers are passed as `None` and produce a defined result (zero,
//! `false`, `None`, or an empty list) instead of a fault, so callers
//! translating from pointer-based interfaces keep their NULL tolerance.
//! Truncation is silent; it shows up only in returned lengths.
//!
//! No `unsafe` code is permitted in this crate, and no function panics on
//! any input.

#![deny(unsafe_code)]

pub mod affix;
pub mod case;
pub mod cmp;
pub mod copy;
pub mod ctype;
pub mod scan;
pub mod token;
pub mod trim;

// Re-export the full operation surface.
pub use affix::{ends_with, starts_with};
pub use case::{make_lower, make_upper};
pub use cmp::{compare, compare_ci, compare_n};
pub use copy::{concat, copy};
pub use ctype::{is_alnum, is_alpha, is_digit, is_lower, is_space, is_upper, to_lower, to_upper};
pub use scan::{find_char, find_substring, length_bounded, rfind_char};
pub use token::{MAX_TOKENS, TokenList, TokenSpan, tokenize};
pub use trim::{trim, trim_leading, trim_trailing};
