//! Fixed-width unsigned words used as Feistel halves.

use core::fmt::{Debug, Display, LowerHex};
use core::hash::Hash;
use core::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

/// Unsigned machine word the network operates on.
///
/// All arithmetic wraps modulo `2^BITS`. Implemented for `u8`, `u16`, `u32`
/// and `u64`; `u64` is the reference width.
pub trait Word:
    Copy
    + Eq
    + Ord
    + Hash
    + Debug
    + Display
    + LowerHex
    + Default
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Width in bits.
    const BITS: u32;
    /// The value `0`.
    const ZERO: Self;
    /// The value `1`.
    const ONE: Self;
    /// Largest representable value.
    const MAX: Self;

    /// Wrapping addition.
    fn wrapping_add(self, rhs: Self) -> Self;
    /// Wrapping subtraction.
    fn wrapping_sub(self, rhs: Self) -> Self;
    /// Wrapping multiplication.
    fn wrapping_mul(self, rhs: Self) -> Self;
    /// Number of leading zero bits.
    fn leading_zeros(self) -> u32;
    /// Truncating conversion from `u64`.
    fn truncate_from(value: u64) -> Self;
    /// Lossless widening to `u128`.
    fn widen(self) -> u128;

    /// Minimal number of bits needed to represent `self` (`0` for zero).
    #[inline]
    fn bit_length(self) -> u32 {
        Self::BITS - self.leading_zeros()
    }
}

macro_rules! impl_word {
    ($($ty:ty),*) => {
        $(
            impl Word for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$ty>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn leading_zeros(self) -> u32 {
                    <$ty>::leading_zeros(self)
                }

                #[inline]
                fn truncate_from(value: u64) -> Self {
                    value as $ty
                }

                #[inline]
                fn widen(self) -> u128 {
                    u128::from(self)
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_length_matches_highest_set_bit() {
        assert_eq!(Word::bit_length(0u64), 0);
        assert_eq!(Word::bit_length(1u64), 1);
        assert_eq!(Word::bit_length(19u64), 5);
        assert_eq!(Word::bit_length(u64::MAX), 64);
        assert_eq!(Word::bit_length(0x80u8), 8);
    }

    #[test]
    fn truncation_keeps_low_bits() {
        assert_eq!(<u8 as Word>::truncate_from(0x1_23), 0x23);
        assert_eq!(<u16 as Word>::truncate_from(654_188_429), (654_188_429u64 & 0xffff) as u16);
        assert_eq!(<u64 as Word>::truncate_from(u64::MAX), u64::MAX);
    }
}
