//! Errors returned by the range-aggregate index.

use thiserror::Error;

/// Returned when an index or range falls outside `[0, len)`.
///
/// Bounds are always checked before anything is written, so a call that
/// returns this error has left the tree exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutOfRange {
    /// A single position was not below `len`.
    #[error("index {index} is out of range for length {len}")]
    Index { index: usize, len: usize },

    /// An inclusive range was reversed or reached past `len - 1`.
    #[error("range [{left}, {right}] is out of range for length {len}")]
    Range { left: usize, right: usize, len: usize },
}

impl OutOfRange {
    /// Length of the sequence at the time of the failed call.
    pub fn sequence_len(&self) -> usize {
        return match self {
            OutOfRange::Index { len, .. } => *len,
            OutOfRange::Range { len, .. } => *len,
        };
    }
}
