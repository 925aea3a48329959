//! Grouping adjacent scalars into caller-defined textual elements.
//!
//! The grouping policy is entirely the caller's: the first scalar always
//! opens an element, and each following scalar joins it while `keep_going`
//! returns `true`. A "continue while the next scalar is a combining mark"
//! predicate gives a crude grapheme segmentation; full cluster rules can be
//! layered on the same primitive.

use core::ops::Range;

use crate::{
    codepoints::{Codepoints, WalkState},
    error::{Reason, Utf8Error},
    source::ByteSource,
};

/// Why an element ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// `keep_going` rejected the next scalar, which was left unconsumed.
    Declined,
    /// The end bound was reached.
    EndOfInput,
    /// The next sequence after the element failed to decode.
    Failed(Reason),
}

/// One element: the byte range it spans and how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextualElement {
    /// Absolute offsets of the element's bytes.
    pub range: Range<usize>,
    /// What stopped the element from growing.
    pub termination: Termination,
}

impl TextualElement {
    /// The cursor where the next element starts.
    #[must_use]
    pub fn end(&self) -> usize {
        self.range.end
    }

    /// The element's bytes within the buffer it was cut from.
    #[must_use]
    pub fn bytes<'b>(&self, buf: &'b [u8]) -> &'b [u8] {
        buf.get(self.range.clone()).unwrap_or_default()
    }
}

/// Cuts one textual element from `bytes`, starting at `start`.
///
/// The first scalar is always included. Each subsequent scalar is passed to
/// `keep_going`; on `false` the element ends right before it.
///
/// # Errors
///
/// Fails only if the first scalar cannot be decoded (including when `start`
/// is at the end of `bytes`). A failure after the first scalar ends the
/// element instead and is reported as [`Termination::Failed`].
pub fn next_textual_element<F>(
    bytes: &[u8],
    start: usize,
    mut keep_going: F,
) -> Result<TextualElement, Reason>
where
    F: FnMut(char) -> bool,
{
    let mut walk = Codepoints::with_range(bytes, start..bytes.len());
    match walk.state() {
        WalkState::Positioned(_) => {}
        WalkState::Failed(reason) => return Err(reason),
        WalkState::Exhausted => return Err(Reason::new(Utf8Error::Truncated, start)),
    }

    let mut end = walk.position();
    let termination = loop {
        walk.advance();
        match walk.state() {
            WalkState::Positioned(c) if keep_going(c) => end = walk.position(),
            WalkState::Positioned(_) => break Termination::Declined,
            WalkState::Exhausted => break Termination::EndOfInput,
            WalkState::Failed(reason) => break Termination::Failed(reason),
        }
    };

    Ok(TextualElement {
        range: start..end,
        termination,
    })
}

/// Splits a whole buffer into textual elements.
///
/// Yields `Ok` elements until the input ends. A decode failure is yielded
/// once, either as an element ending in [`Termination::Failed`] or as an
/// `Err` when no scalar could start the element, and then iteration stops.
#[derive(Debug, Clone)]
pub struct TextualElements<'a, F> {
    bytes: &'a [u8],
    cursor: usize,
    keep_going: F,
    failed: bool,
}

impl<'a, F: FnMut(char) -> bool> TextualElements<'a, F> {
    /// Segments all of `src` with `keep_going` as the grouping policy.
    pub fn new<S: ByteSource + ?Sized>(src: &'a S, keep_going: F) -> Self {
        Self {
            bytes: src.source_bytes(),
            cursor: 0,
            keep_going,
            failed: false,
        }
    }
}

impl<F: FnMut(char) -> bool> Iterator for TextualElements<'_, F> {
    type Item = Result<TextualElement, Reason>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor >= self.bytes.len() {
            return None;
        }
        let next = next_textual_element(self.bytes, self.cursor, &mut self.keep_going);
        match &next {
            Ok(element) => {
                self.failed = matches!(element.termination, Termination::Failed(_));
                self.cursor = element.end();
            }
            Err(_) => self.failed = true,
        }
        Some(next)
    }
}

impl<F: FnMut(char) -> bool> core::iter::FusedIterator for TextualElements<'_, F> {}
