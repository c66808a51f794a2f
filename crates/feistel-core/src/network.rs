//! Feistel network forward and inverse application.

use crate::key::RoundKeys;
use crate::round::{DefaultRound, RoundFunction};
use crate::word::Word;

/// Keyed Feistel network over a pair of half-words.
///
/// The network is immutable after construction and can be shared freely
/// between threads when its round function can.
#[derive(Clone, Debug)]
pub struct FeistelNetwork<W: Word, F = DefaultRound> {
    keys: RoundKeys<W>,
    round: F,
}

impl<W: Word> FeistelNetwork<W, DefaultRound> {
    /// Builds a network that uses [`DefaultRound`].
    pub fn with_default_round(keys: impl Into<RoundKeys<W>>) -> Self {
        Self::new(keys, DefaultRound)
    }
}

impl<W: Word, F: RoundFunction<W>> FeistelNetwork<W, F> {
    /// Builds a network from round keys and a round function.
    ///
    /// Any number of keys is accepted. With zero keys the network is a
    /// masked identity.
    pub fn new(keys: impl Into<RoundKeys<W>>, round: F) -> Self {
        Self {
            keys: keys.into(),
            round,
        }
    }

    /// Number of rounds.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.keys.len()
    }

    /// Round keys in forward order.
    #[inline]
    pub fn keys(&self) -> &RoundKeys<W> {
        &self.keys
    }

    /// Round function.
    #[inline]
    pub fn round_function(&self) -> &F {
        &self.round
    }

    /// Applies the network forward to `(left, right)` restricted to `mask`.
    #[inline]
    pub fn cipher(&self, left: W, right: W, mask: W) -> (W, W) {
        self.core(left, right, mask, W::ZERO)
    }

    /// Inverse of [`FeistelNetwork::cipher`] for the same `mask`.
    #[inline]
    pub fn decipher(&self, left: W, right: W, mask: W) -> (W, W) {
        let (right, left) = self.core(right, left, W::ZERO, mask);
        (left, right)
    }

    // Exactly one of `sel_a`/`sel_b` is the work mask and the other is zero,
    // so the key expression picks `keys[i]` or `keys[R-1-i]` without a branch.
    // Inputs are used as given; only the zero-round pass-through masks them.
    fn core(&self, a: W, b: W, sel_a: W, sel_b: W) -> (W, W) {
        let mask = sel_a | sel_b;
        let rounds = self.keys.len();
        if rounds == 0 {
            return (a & mask, b & mask);
        }
        let key = |round: usize| (self.keys.get(round) & sel_a) | (self.keys.get(rounds - 1 - round) & sel_b);

        // The first round masks only the round output, so bits of `a` above
        // the mask survive a single round.
        let mut left = b;
        let mut right = a ^ (self.round.apply(b, key(0)) & mask);
        for round in 1..rounds {
            let mixed = (left ^ self.round.apply(right, key(round))) & mask;
            left = right;
            right = mixed;
        }
        (left, right)
    }
}
