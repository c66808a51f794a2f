//! Error type shared by the permutation entry points.

use std::fmt;

/// Errors returned by index permutation, shuffling and key material decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShuffleError {
    /// The network has no round keys and cannot permute anything.
    InvalidKey,
    /// An index or permutation is at or above the declared upper bound.
    OutOfRange {
        /// Rejected value.
        value: u128,
        /// Exclusive upper bound it was checked against.
        max: u128,
    },
    /// Serialized key material could not be decoded or is inconsistent.
    Material(String),
    /// The background producer thread could not be started.
    Spawn(String),
}

impl fmt::Display for ShuffleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShuffleError::InvalidKey => write!(f, "feistel network has zero round keys"),
            ShuffleError::OutOfRange { value, max } => {
                write!(f, "value {value} is out of range for upper bound {max}")
            }
            ShuffleError::Material(msg) => write!(f, "invalid key material: {msg}"),
            ShuffleError::Spawn(msg) => write!(f, "failed to start shuffle producer: {msg}"),
        }
    }
}

impl std::error::Error for ShuffleError {}

impl From<bincode::Error> for ShuffleError {
    fn from(value: bincode::Error) -> Self {
        ShuffleError::Material(value.to_string())
    }
}
