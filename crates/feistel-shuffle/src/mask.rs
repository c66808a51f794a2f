//! Half-width split derived from an upper bound.

use feistel_core::Word;

/// Splits words into two equal halves whose combined domain covers a bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeMask<W: Word> {
    bit_offset: u32,
    bit_mask: W,
}

impl<W: Word> RangeMask<W> {
    /// Derives the split for `bound`. A bound of zero stands for the whole
    /// word domain.
    pub fn new(bound: W) -> Self {
        let bound_minus_one = if bound == W::ZERO {
            W::MAX.wrapping_sub(W::ONE)
        } else {
            bound.wrapping_sub(W::ONE)
        };
        let bit_offset = (bound_minus_one.bit_length() + 1) >> 1;
        let bit_mask = (W::ONE << bit_offset).wrapping_sub(W::ONE);
        Self {
            bit_offset,
            bit_mask,
        }
    }

    /// Width of each half in bits.
    #[inline]
    pub fn bit_offset(&self) -> u32 {
        self.bit_offset
    }

    /// Mask selecting one half.
    #[inline]
    pub fn bit_mask(&self) -> W {
        self.bit_mask
    }

    /// Width of the combined two-half domain in bits.
    #[inline]
    pub fn domain_bits(&self) -> u32 {
        2 * self.bit_offset
    }

    /// Splits `value` into `(high, low)` halves.
    #[inline]
    pub fn split(&self, value: W) -> (W, W) {
        (value >> self.bit_offset, value & self.bit_mask)
    }

    /// Recombines halves produced by [`RangeMask::split`].
    #[inline]
    pub fn join(&self, left: W, right: W) -> W {
        (left << self.bit_offset) | right
    }
}
