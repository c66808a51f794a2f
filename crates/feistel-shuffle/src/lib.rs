//! Format-preserving pseudorandom permutations of index ranges.
//!
//! Built on the [`feistel_core`] network, this crate provides:
//! - [`random_index`] / [`get_index`]: a reversible mapping of `[0, max)` onto
//!   itself by cycle walking, with `max = 0` standing for the whole word domain.
//! - [`shuffle`]: a lazy iterator over a shuffled `[min, max)`.
//! - [`ShuffleStream`]: the same sequence produced on a background thread with
//!   explicit cancellation.
//! - Round-key generation and a versioned serialized key format.
//!
//! No permutation table is ever materialized. This is obfuscation, not
//! encryption; do not rely on it to hide data from a determined adversary.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod index;
mod keygen;
mod mask;
mod material;
mod sequence;
mod stream;

pub use crate::error::ShuffleError;
pub use crate::index::{get_index, random_index};
pub use crate::keygen::{generate_keys, DEFAULT_ROUNDS};
pub use crate::mask::RangeMask;
pub use crate::material::{KeyMaterial, KeyParams, MATERIAL_VERSION};
pub use crate::sequence::{shuffle, Shuffle};
pub use crate::stream::ShuffleStream;

pub use feistel_core::{DefaultRound, FeistelNetwork, RoundFunction, RoundKeys, Word};
