//! Span types locating matched text inside checker output.

use serde::{Deserialize, Serialize};
use text_size::TextSize;

/// A byte offset into one invocation's raw output.
pub type ByteOffset = TextSize;

/// A range of bytes within the raw output of one checker invocation.
///
/// Spans are half-open intervals `[start, end)`. A diagnostic carries the
/// span of the text it was extracted from, so the host can recover that text
/// while the raw output is still alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// The start byte offset (inclusive).
    pub start: ByteOffset,
    /// The end byte offset (exclusive).
    pub end: ByteOffset,
}

impl Span {
    /// Creates a new span from start and end byte offsets.
    #[inline]
    pub fn new(start: impl Into<ByteOffset>, end: impl Into<ByteOffset>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Returns the text this span covers within `output`.
    ///
    /// Returns `None` if the span falls outside `output` or splits a UTF-8
    /// character, which can only happen when the span came from a different
    /// invocation's output.
    pub fn slice<'a>(&self, output: &'a str) -> Option<&'a str> {
        output.get(usize::from(self.start)..usize::from(self.end))
    }
}
