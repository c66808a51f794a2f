//! Round-key sequences.

use std::sync::Arc;

use crate::word::Word;

/// Ordered, immutable sequence of round keys.
///
/// The length is the number of rounds and may be zero. Clones share storage.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RoundKeys<W: Word>(Arc<[W]>);

impl<W: Word> RoundKeys<W> {
    /// Wraps the given keys.
    pub fn new(keys: impl Into<Arc<[W]>>) -> Self {
        Self(keys.into())
    }

    /// Returns the key used at `round` (0-based).
    #[inline]
    pub fn get(&self, round: usize) -> W {
        self.0[round]
    }

    /// Number of rounds.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no rounds at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys as a slice, in round order.
    #[inline]
    pub fn as_slice(&self) -> &[W] {
        &self.0
    }
}

impl<W: Word> From<Vec<W>> for RoundKeys<W> {
    fn from(value: Vec<W>) -> Self {
        Self::new(value)
    }
}

impl<W: Word> From<&[W]> for RoundKeys<W> {
    fn from(value: &[W]) -> Self {
        Self::new(value)
    }
}

impl<W: Word, const N: usize> From<[W; N]> for RoundKeys<W> {
    fn from(value: [W; N]) -> Self {
        Self::new(Vec::from(value))
    }
}
