//! In-place tokenization.
//!
//! Splits a NUL-terminated byte string on a single delimiter byte by
//! writing NUL over each delimiter encountered. Token positions are
//! recorded as spans into the caller's buffer; the list holds at most
//! [`MAX_TOKENS`] entries and the scan stops the moment it is full,
//! leaving the rest of the input exactly as it was.

/// Maximum number of tokens a single [`tokenize`] call records.
pub const MAX_TOKENS: usize = 10;

/// Byte range of one token within the tokenized buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenSpan {
    /// Index of the token's first byte.
    pub start: usize,
    /// Token length in bytes. Recorded tokens are never empty.
    pub len: usize,
}

/// Fixed-capacity list of token spans produced by [`tokenize`].
///
/// Owns no buffer data; spans index into the byte slice that was
/// tokenized, which the caller still holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenList {
    spans: [TokenSpan; MAX_TOKENS],
    count: usize,
}

impl TokenList {
    /// An empty list.
    pub const fn new() -> Self {
        Self {
            spans: [TokenSpan { start: 0, len: 0 }; MAX_TOKENS],
            count: 0,
        }
    }

    /// Number of recorded tokens, at most [`MAX_TOKENS`].
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` when no token was recorded.
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the `index`-th span, or `None` past the recorded count.
    pub fn get(&self, index: usize) -> Option<TokenSpan> {
        self.spans[..self.count].get(index).copied()
    }

    /// The recorded spans, in scan order.
    pub fn spans(&self) -> &[TokenSpan] {
        &self.spans[..self.count]
    }

    /// Iterates over the recorded spans.
    pub fn iter(&self) -> impl Iterator<Item = TokenSpan> + '_ {
        self.spans[..self.count].iter().copied()
    }

    /// Resolves the `index`-th token against the buffer it was cut from.
    ///
    /// Returns `None` past the recorded count or when the span does not
    /// fit `buf` (the list was built from a different buffer).
    pub fn token<'a>(&self, buf: &'a [u8], index: usize) -> Option<&'a [u8]> {
        let span = self.get(index)?;
        buf.get(span.start..span.start + span.len)
    }

    fn push(&mut self, span: TokenSpan) {
        self.spans[self.count] = span;
        self.count += 1;
    }
}

impl Default for TokenList {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits `s` on `delimiter`, rewriting each delimiter as a NUL terminator.
///
/// A token is a maximal non-empty run of non-delimiter bytes, so
/// consecutive delimiters yield nothing. Recording stops when the list is
/// full: the delimiter that closed the final token has already been
/// overwritten, and everything after it is left untouched and unscanned.
/// A NUL delimiter never matches, making the whole string one token.
/// Absent input yields an empty list.
///
/// The input is consumed by the split; callers needing the original
/// string must copy it first.
pub fn tokenize(s: Option<&mut [u8]>, delimiter: u8) -> TokenList {
    let mut list = TokenList::new();
    let Some(s) = s else { return list };

    let mut token_start = 0;
    let mut in_token = false;
    let mut i = 0;
    while i < s.len() && s[i] != 0 && list.count < MAX_TOKENS {
        if s[i] == delimiter {
            s[i] = 0;
            if in_token {
                list.push(TokenSpan {
                    start: token_start,
                    len: i - token_start,
                });
                in_token = false;
            }
        } else if !in_token {
            in_token = true;
            token_start = i;
        }
        i += 1;
    }
    if in_token && list.count < MAX_TOKENS {
        list.push(TokenSpan {
            start: token_start,
            len: i - token_start,
        });
    }
    list
}
