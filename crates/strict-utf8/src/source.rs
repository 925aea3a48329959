//! Input representations accepted by the validator and the iterators.
//!
//! Every representation is reduced to a plain `&[u8]` before decoding, so
//! behavior never depends on how the bytes were handed over.

use alloc::{string::String, vec::Vec};
use core::ffi::CStr;

use bstr::{BStr, BString, ByteSlice};

/// Anything that can expose its contents as a contiguous byte range.
///
/// Implement this for application string types (for example a database's
/// string datum) to validate them without copying.
pub trait ByteSource {
    /// The bytes to decode. The end of the slice is the end bound.
    fn source_bytes(&self) -> &[u8];
}

impl ByteSource for [u8] {
    fn source_bytes(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> ByteSource for [u8; N] {
    fn source_bytes(&self) -> &[u8] {
        self
    }
}

impl ByteSource for Vec<u8> {
    fn source_bytes(&self) -> &[u8] {
        self
    }
}

impl ByteSource for str {
    fn source_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ByteSource for String {
    fn source_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ByteSource for BStr {
    fn source_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ByteSource for BString {
    fn source_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// The terminator is not part of the range.
impl ByteSource for CStr {
    fn source_bytes(&self) -> &[u8] {
        self.to_bytes()
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &T {
    fn source_bytes(&self) -> &[u8] {
        (**self).source_bytes()
    }
}

/// A byte buffer whose logical end is its first NUL byte.
///
/// Models C-style strings that arrive inside a larger buffer: nothing at or
/// after the terminator is ever decoded. Without a terminator the whole
/// buffer is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NulTerminated<'a> {
    bytes: &'a [u8],
}

impl<'a> NulTerminated<'a> {
    /// Scans `buf` for the first NUL and bounds the range there.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        let end = buf.find_byte(0).unwrap_or(buf.len());
        Self {
            bytes: &buf[..end],
        }
    }

    /// Length of the range, excluding the terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the terminator is the first byte.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl ByteSource for NulTerminated<'_> {
    fn source_bytes(&self) -> &[u8] {
        self.bytes
    }
}
