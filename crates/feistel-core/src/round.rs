//! Round functions mixing a half-word with a round key.

use crate::word::Word;

/// Pure mapping `(value, key) -> value` applied once per Feistel round.
///
/// The function does not have to be injective; the network stays a
/// permutation regardless. Any `Fn(W, W) -> W` closure is a round function.
pub trait RoundFunction<W: Word> {
    /// Mixes `value` with `key`.
    fn apply(&self, value: W, key: W) -> W;
}

impl<W: Word, F> RoundFunction<W> for F
where
    F: Fn(W, W) -> W,
{
    #[inline]
    fn apply(&self, value: W, key: W) -> W {
        self(value, key)
    }
}

/// Default round function: `(value * A) ^ (key * B)`, wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultRound;

impl DefaultRound {
    /// Multiplier applied to the value half.
    pub const VALUE_MULTIPLIER: u64 = 654_188_429;
    /// Multiplier applied to the round key.
    pub const KEY_MULTIPLIER: u64 = 104_729;
}

impl<W: Word> RoundFunction<W> for DefaultRound {
    #[inline]
    fn apply(&self, value: W, key: W) -> W {
        value.wrapping_mul(W::truncate_from(Self::VALUE_MULTIPLIER))
            ^ key.wrapping_mul(W::truncate_from(Self::KEY_MULTIPLIER))
    }
}
