//! Whole-buffer acceptance checks.

use core::ops::Range;

use crate::{decode::decode, error::Reason, source::ByteSource};

/// Returns `true` if `src` is entirely valid UTF-8. Empty input is valid.
#[must_use]
pub fn is_valid<S: ByteSource + ?Sized>(src: &S) -> bool {
    validate(src).is_ok()
}

/// Checks that `src` is entirely valid UTF-8.
///
/// # Errors
///
/// Returns the [`Reason`] for the first violation. Validation stops there;
/// nothing after the first bad sequence is inspected.
pub fn validate<S: ByteSource + ?Sized>(src: &S) -> Result<(), Reason> {
    walk(src.source_bytes(), 0)
}

/// Checks the sub-range `range` of `bytes`.
///
/// Offsets in the returned [`Reason`] are relative to the start of `bytes`,
/// not of `range`. A range reaching past the buffer is clamped to it, and an
/// inverted range is treated as empty.
///
/// # Errors
///
/// Returns the [`Reason`] for the first violation inside the range. A
/// sequence cut by `range.end` is reported as truncated even if the buffer
/// continues.
pub fn validate_range(bytes: &[u8], range: Range<usize>) -> Result<(), Reason> {
    let end = range.end.min(bytes.len());
    let start = range.start.min(end);
    walk(&bytes[..end], start)
}

fn walk(bytes: &[u8], mut cursor: usize) -> Result<(), Reason> {
    while cursor < bytes.len() {
        // Runs of ASCII need no decoding.
        match bytes[cursor..].iter().position(|b| !b.is_ascii()) {
            Some(skip) => cursor += skip,
            None => break,
        }
        cursor = decode(bytes, cursor)
            .inspect_err(|reason| {
                tracing::debug!(
                    position = reason.position(),
                    explanation = reason.explanation(),
                    "rejected invalid UTF-8"
                );
            })?
            .next;
    }
    Ok(())
}
