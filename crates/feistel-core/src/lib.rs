//! Keyed Feistel network over fixed-width words.
//!
//! This crate provides the primitive the index permutation is built on:
//! - A [`Word`] abstraction over `u8`, `u16`, `u32` and `u64` with wrapping arithmetic.
//! - Pluggable [`RoundFunction`]s, with [`DefaultRound`] as the stock choice.
//! - A [`FeistelNetwork`] exposing forward and inverse application on two halves.
//!
//! The construction is format-preserving obfuscation, not a vetted cipher; it
//! makes no claim of resistance to cryptanalysis.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod key;
mod network;
mod round;
mod word;

pub use crate::key::RoundKeys;
pub use crate::network::FeistelNetwork;
pub use crate::round::{DefaultRound, RoundFunction};
pub use crate::word::Word;
