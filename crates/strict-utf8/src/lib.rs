//! Strict UTF-8 decoding for untrusted input.
//!
//! Every string that crosses a storage or wire boundary passes through this
//! crate, so it rejects anything that is not exactly well-formed UTF-8:
//! overlong forms, encoded surrogates, values past U+10FFFF, stray
//! continuation bytes and truncated tails. Nothing is ever replaced or
//! skipped; a failure is returned with its category and byte offset.
//!
//! - [`decode`] consumes one scalar at a cursor.
//! - [`is_valid`] and [`validate`] accept or reject a whole buffer.
//! - [`Codepoints`] walks a buffer scalar by scalar.
//! - [`next_textual_element`] and [`TextualElements`] group scalars under a
//!   caller-supplied policy.
//!
//! ```rust
//! use strict_utf8::{Utf8Error, is_valid, validate};
//!
//! assert!(is_valid("naïve"));
//! let reason = validate(b"ab\xED\xA0\x80").unwrap_err();
//! assert_eq!(reason.kind(), Utf8Error::Surrogate(0xD800));
//! assert_eq!(reason.position(), 2);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod codepoints;
mod decode;
mod element;
mod error;
mod source;
mod validate;

#[cfg(test)]
mod tests;

pub use codepoints::{Codepoints, WalkState};
pub use decode::{Decoded, MAX_CODEPOINT, decode, decode_char, next_codepoint};
pub use element::{Termination, TextualElement, TextualElements, next_textual_element};
pub use error::{Reason, Utf8Error};
pub use source::{ByteSource, NulTerminated};
pub use validate::{is_valid, validate, validate_range};
