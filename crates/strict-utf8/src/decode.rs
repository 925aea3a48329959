//! Single-step UTF-8 decoding.
//!
//! [`decode`] consumes exactly one encoded scalar starting at a byte offset.
//! The end bound is the length of the slice: to decode inside `[start, end)`
//! of a larger buffer, pass `&buf[..end]` and keep `start` as the cursor, so
//! that every offset reported back stays absolute.
//!
//! Encoding table enforced here:
//!
//! | lead byte      | length | continuation bytes | value range            |
//! |----------------|--------|--------------------|------------------------|
//! | `00..=7F`      | 1      | -                  | `U+0000..=U+007F`      |
//! | `C0..=DF`      | 2      | 1                  | `U+0080..=U+07FF`      |
//! | `E0..=EF`      | 3      | 2                  | `U+0800..=U+FFFF`      |
//! | `F0..=F4`      | 4      | 3                  | `U+10000..=U+10FFFF`   |
//!
//! Anything else in lead position is rejected. Values outside the range of
//! their row are overlong; `U+D800..=U+DFFF` is rejected as a surrogate.

use crate::error::{Reason, Utf8Error};

/// Largest Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10_FFFF;

/// A successfully decoded scalar and the cursor just past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded scalar value.
    pub codepoint: char,
    /// Offset of the first byte after the sequence.
    pub next: usize,
}

#[inline]
const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Decodes one scalar from `bytes` starting at `cursor`.
///
/// Never reads at or past `bytes.len()`. A cursor at (or beyond) the end is
/// reported as [`Utf8Error::Truncated`] at `cursor`; callers that want "no
/// more input" semantics should use [`Codepoints`](crate::Codepoints).
///
/// # Errors
///
/// Returns the [`Reason`] for the first grammar violation found in the
/// sequence starting at `cursor`. The decoder never resynchronizes.
#[inline]
pub fn decode(bytes: &[u8], cursor: usize) -> Result<Decoded, Reason> {
    let Some(&lead) = bytes.get(cursor) else {
        return Err(Reason::new(Utf8Error::Truncated, cursor));
    };

    let (len, mut value, min) = match lead {
        0x00..=0x7F => {
            return Ok(Decoded {
                codepoint: char::from(lead),
                next: cursor + 1,
            });
        }
        0xC0..=0xDF => (2, u32::from(lead & 0x1F), 0x80),
        0xE0..=0xEF => (3, u32::from(lead & 0x0F), 0x800),
        0xF0..=0xF4 => (4, u32::from(lead & 0x07), 0x1_0000),
        _ => return Err(Reason::new(Utf8Error::InvalidLeadingByte(lead), cursor)),
    };

    for offset in cursor + 1..cursor + len {
        let Some(&byte) = bytes.get(offset) else {
            return Err(Reason::new(Utf8Error::Truncated, cursor));
        };
        if !is_continuation(byte) {
            return Err(Reason::new(Utf8Error::InvalidContinuationByte(byte), offset));
        }
        value = (value << 6) | u32::from(byte & 0x3F);
    }

    if value < min {
        return Err(Reason::new(Utf8Error::Overlong(value), cursor));
    }

    match char::from_u32(value) {
        Some(codepoint) => Ok(Decoded {
            codepoint,
            next: cursor + len,
        }),
        None if value > MAX_CODEPOINT => Err(Reason::new(Utf8Error::OutOfRange(value), cursor)),
        None => Err(Reason::new(Utf8Error::Surrogate(value), cursor)),
    }
}

/// Returns the cursor after the scalar at `cursor`, or the offset of the
/// offending byte if it does not decode.
#[must_use]
pub fn next_codepoint(bytes: &[u8], cursor: usize) -> usize {
    match decode(bytes, cursor) {
        Ok(decoded) => decoded.next,
        Err(reason) => reason.position(),
    }
}

/// Returns the scalar at `cursor`, discarding any failure detail.
#[must_use]
pub fn decode_char(bytes: &[u8], cursor: usize) -> Option<char> {
    decode(bytes, cursor).ok().map(|d| d.codepoint)
}
