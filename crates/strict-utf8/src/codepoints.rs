//! Restartable forward walk over the scalars of a byte range.
//!
//! A [`Codepoints`] value owns nothing but offsets into a borrowed slice, so
//! cloning it forks an independent walk. Construction eagerly decodes the
//! first scalar: a fresh walk is either positioned on a scalar or already
//! done.
//!
//! ```rust
//! use strict_utf8::Codepoints;
//!
//! let mut walk = Codepoints::new(b"h\xC3\xA9\xFF");
//! assert_eq!(walk.current(), Some('h'));
//! walk.advance();
//! assert_eq!(walk.current(), Some('é'));
//! walk.advance();
//! assert!(walk.is_done());
//! assert!(walk.saw_error());
//! assert_eq!(walk.error_explanation().map(|r| r.position()), Some(3));
//! ```

use core::{iter::FusedIterator, ops::Range, ptr};

use crate::{decode::decode, error::Reason, source::ByteSource};

/// Where a walk stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    /// On a decoded scalar; the walk's position is just past it.
    Positioned(char),
    /// Clean end of input.
    Exhausted,
    /// Stopped on a malformed sequence.
    Failed(Reason),
}

/// A forward cursor over the scalars in `[start, end)` of a byte slice.
///
/// Also an [`Iterator`] over `char`: `next()` yields the current scalar and
/// then advances. When iteration stops, check [`saw_error`](Self::saw_error)
/// to tell a clean end from a malformed tail.
#[derive(Debug, Clone)]
pub struct Codepoints<'a> {
    // Bounded at the walk's end.
    bytes: &'a [u8],
    start: usize,
    position: usize,
    state: WalkState,
}

impl<'a> Codepoints<'a> {
    /// Starts a walk over all of `src`.
    #[must_use]
    pub fn new<S: ByteSource + ?Sized>(src: &'a S) -> Self {
        let bytes = src.source_bytes();
        Self::with_range(bytes, 0..bytes.len())
    }

    /// Starts a walk over `range` of `bytes`, with offsets relative to
    /// `bytes`. Out-of-bounds ranges are clamped; inverted ones are empty.
    #[must_use]
    pub fn with_range(bytes: &'a [u8], range: Range<usize>) -> Self {
        let end = range.end.min(bytes.len());
        let start = range.start.min(end);
        let mut walk = Self {
            bytes: &bytes[..end],
            start,
            position: start,
            state: WalkState::Exhausted,
        };
        walk.step();
        walk
    }

    /// The canonical finished walk. Every done walk compares equal to it.
    #[must_use]
    pub const fn end() -> Self {
        Self {
            bytes: &[],
            start: 0,
            position: 0,
            state: WalkState::Exhausted,
        }
    }

    fn step(&mut self) {
        if self.position >= self.bytes.len() {
            self.state = WalkState::Exhausted;
            return;
        }
        match decode(self.bytes, self.position) {
            Ok(decoded) => {
                self.state = WalkState::Positioned(decoded.codepoint);
                self.position = decoded.next;
            }
            Err(reason) => {
                tracing::trace!(
                    position = reason.position(),
                    explanation = reason.explanation(),
                    "codepoint walk stopped on malformed input"
                );
                self.state = WalkState::Failed(reason);
            }
        }
    }

    /// Moves to the next scalar. Does nothing once the walk is done.
    pub fn advance(&mut self) {
        if !self.is_done() {
            self.step();
        }
    }

    /// The scalar the walk is positioned on, or `None` once done.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        match self.state {
            WalkState::Positioned(c) => Some(c),
            WalkState::Exhausted | WalkState::Failed(_) => None,
        }
    }

    /// The full tagged state.
    #[must_use]
    pub fn state(&self) -> WalkState {
        self.state
    }

    /// `true` while positioned on a scalar.
    #[must_use]
    pub fn is_positioned(&self) -> bool {
        matches!(self.state, WalkState::Positioned(_))
    }

    /// `true` after a clean end or a failure.
    #[must_use]
    pub fn is_done(&self) -> bool {
        !self.is_positioned()
    }

    /// `true` if the walk ended on a malformed sequence rather than at the
    /// end bound.
    #[must_use]
    pub fn saw_error(&self) -> bool {
        matches!(self.state, WalkState::Failed(_))
    }

    /// Why the walk failed, if it did.
    #[must_use]
    pub fn error_explanation(&self) -> Option<&Reason> {
        match &self.state {
            WalkState::Failed(reason) => Some(reason),
            WalkState::Positioned(_) | WalkState::Exhausted => None,
        }
    }

    /// Offset where the walk began.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset just past the current scalar. After a failure this is the
    /// offset of the sequence that failed to decode.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The end bound of the walk.
    #[must_use]
    pub fn bound(&self) -> usize {
        self.bytes.len()
    }
}

impl Default for Codepoints<'_> {
    fn default() -> Self {
        Self::end()
    }
}

/// Two done walks are equal regardless of how they ended. Otherwise both must
/// be positioned on the same slice at the same `(start, position, end)`.
impl PartialEq for Codepoints<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_done(), other.is_done()) {
            (true, true) => true,
            (false, false) => {
                ptr::eq(self.bytes.as_ptr(), other.bytes.as_ptr())
                    && self.start == other.start
                    && self.position == other.position
                    && self.bytes.len() == other.bytes.len()
            }
            _ => false,
        }
    }
}

impl Eq for Codepoints<'_> {}

impl Iterator for Codepoints<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.current()?;
        self.step();
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_done() {
            return (0, Some(0));
        }
        // The tail may fail on its first byte.
        (1, Some(1 + self.bytes.len() - self.position))
    }
}

impl FusedIterator for Codepoints<'_> {}
