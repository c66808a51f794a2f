//! Lazy shuffled enumeration of a range.

use std::iter::FusedIterator;

use feistel_core::{FeistelNetwork, RoundFunction, Word};

use crate::error::ShuffleError;
use crate::index::{ensure_keyed, walk_forward};
use crate::mask::RangeMask;

/// Starts a lazy shuffle of `[min, max)`.
///
/// Bounds are swapped when `min > max`, so argument order never changes the
/// output. Equal bounds select the whole word domain offset by `min`.
///
/// # Errors
///
/// [`ShuffleError::InvalidKey`] when the network has no round keys.
pub fn shuffle<W, F>(min: W, max: W, network: &FeistelNetwork<W, F>) -> Result<Shuffle<'_, W, F>, ShuffleError>
where
    W: Word,
    F: RoundFunction<W>,
{
    Shuffle::new(min, max, network)
}

/// Iterator over `random_index(i, span) + offset` for `i = 0, 1, ...`.
///
/// Values are computed on demand on the caller's thread.
#[derive(Clone, Debug)]
pub struct Shuffle<'a, W: Word, F> {
    network: &'a FeistelNetwork<W, F>,
    offset: W,
    span: W,
    mask: RangeMask<W>,
    next: Option<W>,
}

impl<'a, W: Word, F: RoundFunction<W>> Shuffle<'a, W, F> {
    /// See [`shuffle`].
    pub fn new(min: W, max: W, network: &'a FeistelNetwork<W, F>) -> Result<Self, ShuffleError> {
        ensure_keyed(network)?;
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        let span = max.wrapping_sub(min);
        Ok(Self {
            network,
            offset: min,
            span,
            mask: RangeMask::new(span),
            next: Some(W::ZERO),
        })
    }

    /// Lowest emitted value.
    pub fn offset(&self) -> W {
        self.offset
    }

    /// Number of values in a complete pass; zero means the whole word domain.
    pub fn span(&self) -> W {
        self.span
    }

    /// Linear index of the next value, or `None` once exhausted.
    pub fn position(&self) -> Option<W> {
        self.next
    }

    /// Number of values still to be yielded.
    pub fn remaining(&self) -> u128 {
        match self.next {
            None => 0,
            Some(idx) if self.span == W::ZERO => W::MAX.widen() + 1 - idx.widen(),
            Some(idx) => self.span.widen() - idx.widen(),
        }
    }
}

impl<W: Word, F: RoundFunction<W>> Iterator for Shuffle<'_, W, F> {
    type Item = W;

    fn next(&mut self) -> Option<W> {
        let idx = self.next?;
        let permutation = walk_forward(idx, self.span, self.mask, self.network);

        let following = idx.wrapping_add(W::ONE);
        self.next = if idx == W::MAX || following == self.span {
            None
        } else {
            Some(following)
        };

        Some(permutation.wrapping_add(self.offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<W: Word, F: RoundFunction<W>> FusedIterator for Shuffle<'_, W, F> {}
