//! Bijection between linear and permuted indices by cycle walking.

use feistel_core::{FeistelNetwork, RoundFunction, Word};

use crate::error::ShuffleError;
use crate::mask::RangeMask;

/// Maps `idx` to its permuted position in `[0, max)`.
///
/// A `max` of zero permutes the whole word domain.
///
/// # Errors
///
/// [`ShuffleError::InvalidKey`] when the network has no round keys,
/// [`ShuffleError::OutOfRange`] when `idx >= max` and `max != 0`.
pub fn random_index<W, F>(idx: W, max: W, network: &FeistelNetwork<W, F>) -> Result<W, ShuffleError>
where
    W: Word,
    F: RoundFunction<W>,
{
    check_args(idx, max, network)?;
    Ok(walk_forward(idx, max, RangeMask::new(max), network))
}

/// Maps a permuted position back to its linear index; inverse of
/// [`random_index`] for the same `max` and network.
///
/// # Errors
///
/// Same conditions as [`random_index`].
pub fn get_index<W, F>(permutation: W, max: W, network: &FeistelNetwork<W, F>) -> Result<W, ShuffleError>
where
    W: Word,
    F: RoundFunction<W>,
{
    check_args(permutation, max, network)?;
    let mask = RangeMask::new(max);
    Ok(walk(permutation, max, |value| {
        let (left, right) = mask.split(value);
        let (left, right) = network.decipher(left, right, mask.bit_mask());
        mask.join(left, right)
    }))
}

pub(crate) fn ensure_keyed<W: Word, F>(network: &FeistelNetwork<W, F>) -> Result<(), ShuffleError>
where
    F: RoundFunction<W>,
{
    if network.rounds() == 0 {
        return Err(ShuffleError::InvalidKey);
    }
    Ok(())
}

fn check_args<W: Word, F>(value: W, max: W, network: &FeistelNetwork<W, F>) -> Result<(), ShuffleError>
where
    F: RoundFunction<W>,
{
    ensure_keyed(network)?;
    if max != W::ZERO && value >= max {
        return Err(ShuffleError::OutOfRange {
            value: value.widen(),
            max: max.widen(),
        });
    }
    Ok(())
}

/// Forward cycle walk with a precomputed mask; the caller has validated `idx`.
pub(crate) fn walk_forward<W, F>(idx: W, max: W, mask: RangeMask<W>, network: &FeistelNetwork<W, F>) -> W
where
    W: Word,
    F: RoundFunction<W>,
{
    walk(idx, max, |value| {
        let (left, right) = mask.split(value);
        let (left, right) = network.cipher(left, right, mask.bit_mask());
        mask.join(left, right)
    })
}

// The step is a bijection on [0, 2^(2*bit_offset)) and the start lies in
// [0, max), so the orbit re-enters [0, max) after finitely many steps.
fn walk<W: Word>(start: W, max: W, mut step: impl FnMut(W) -> W) -> W {
    let mut value = start;
    loop {
        value = step(value);
        if value < max || max == W::ZERO {
            return value;
        }
    }
}
