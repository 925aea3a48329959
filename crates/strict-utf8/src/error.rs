use thiserror::Error;

/// The grammar rule a byte sequence broke.
///
/// Each variant carries the offending byte or the assembled scalar value so
/// the `Display` output can name it. The set may grow; match with a wildcard
/// arm.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Utf8Error {
    /// Input ended before the sequence started by the leading byte was
    /// complete (or no byte was available at all).
    #[error("truncated sequence: expected continuation byte, saw end of buffer")]
    Truncated,
    /// A byte that cannot begin a sequence: a bare continuation byte or a
    /// byte above `0xF4`.
    #[error("invalid leading byte 0x{0:02X}")]
    InvalidLeadingByte(u8),
    /// A byte in continuation position outside `0x80..=0xBF`.
    #[error("invalid continuation byte 0x{0:02X}")]
    InvalidContinuationByte(u8),
    /// A multi-byte sequence whose value fits in fewer bytes.
    #[error("overlong encoding of U+{0:04X}")]
    Overlong(u32),
    /// A sequence encoding a UTF-16 surrogate half.
    #[error("encoded surrogate half U+{0:04X}")]
    Surrogate(u32),
    /// A sequence encoding a value above U+10FFFF.
    #[error("code point 0x{0:X} exceeds the Unicode maximum U+10FFFF")]
    OutOfRange(u32),
}

impl Utf8Error {
    /// A fixed, human-readable explanation of the category.
    ///
    /// Unlike the `Display` output this never mentions the offending value,
    /// so it is suitable as a static message for higher-level errors.
    #[must_use]
    pub const fn explanation(&self) -> &'static str {
        match self {
            Utf8Error::Truncated => "truncated sequence",
            Utf8Error::InvalidLeadingByte(_) => "invalid leading byte",
            Utf8Error::InvalidContinuationByte(_) => "invalid continuation byte",
            Utf8Error::Overlong(_) => "overlong encoding",
            Utf8Error::Surrogate(_) => "encoded surrogate half",
            Utf8Error::OutOfRange(_) => "code point exceeds Unicode maximum",
        }
    }
}

/// Why and where a byte sequence was rejected.
///
/// `position` is an absolute byte offset into the buffer the caller passed
/// in. For a bad continuation byte it is that byte's offset; for every other
/// category it is the offset of the sequence's leading byte.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind} at byte {position}")]
pub struct Reason {
    pub(crate) kind: Utf8Error,
    pub(crate) position: usize,
}

impl Reason {
    pub(crate) const fn new(kind: Utf8Error, position: usize) -> Self {
        Self { kind, position }
    }

    /// The category of the violation.
    #[must_use]
    pub const fn kind(&self) -> Utf8Error {
        self.kind
    }

    /// Byte offset of the offending byte.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Static explanation text; never empty.
    #[must_use]
    pub const fn explanation(&self) -> &'static str {
        self.kind.explanation()
    }
}
