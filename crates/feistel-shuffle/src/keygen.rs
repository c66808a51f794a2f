//! Round-key generation.

use feistel_core::RoundKeys;
use rand::{CryptoRng, RngCore};

/// Round count used when callers do not pick one.
pub const DEFAULT_ROUNDS: usize = 4;

/// Draws `rounds` 64-bit round keys from `rng`.
pub fn generate_keys<R: RngCore + CryptoRng>(rng: &mut R, rounds: usize) -> RoundKeys<u64> {
    let keys: Vec<u64> = (0..rounds).map(|_| rng.next_u64()).collect();
    RoundKeys::from(keys)
}
