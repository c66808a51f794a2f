//! Serialized round-key material.

use feistel_core::{FeistelNetwork, RoundKeys};
use serde::{Deserialize, Serialize};

use crate::error::ShuffleError;

/// Current key material format version.
pub const MATERIAL_VERSION: u32 = 1;

/// Static parameters describing the key material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyParams {
    /// Word width in bits (64).
    pub word_bits: u32,
    /// Number of rounds; must match the key count.
    pub rounds: u32,
    /// Format version.
    pub version: u32,
}

/// Round keys for a 64-bit network together with their parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMaterial {
    /// Static parameters.
    pub params: KeyParams,
    /// Round keys in forward order.
    pub keys: Vec<u64>,
}

impl KeyMaterial {
    /// Wraps round keys with matching parameters.
    ///
    /// Fails when the round count does not fit the `u32` parameter field.
    pub fn new(keys: &RoundKeys<u64>) -> Result<Self, ShuffleError> {
        Ok(Self {
            params: KeyParams {
                word_bits: u64::BITS,
                rounds: round_count(keys.len())?,
                version: MATERIAL_VERSION,
            },
            keys: keys.as_slice().to_vec(),
        })
    }

    /// Serializes the material with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ShuffleError> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserializes and validates material produced by [`KeyMaterial::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ShuffleError> {
        let material: Self = bincode::deserialize(bytes)?;
        material.validate()?;
        Ok(material)
    }

    /// Checks the parameters against the key list.
    pub fn validate(&self) -> Result<(), ShuffleError> {
        if self.params.version != MATERIAL_VERSION {
            return Err(ShuffleError::Material(format!(
                "unsupported version {}",
                self.params.version
            )));
        }
        if self.params.word_bits != u64::BITS {
            return Err(ShuffleError::Material(format!(
                "expected {}-bit words, found {}",
                u64::BITS,
                self.params.word_bits
            )));
        }
        if self.params.rounds as usize != self.keys.len() {
            return Err(ShuffleError::Material(format!(
                "declared {} rounds but carries {} keys",
                self.params.rounds,
                self.keys.len()
            )));
        }
        Ok(())
    }

    /// Round keys as a [`RoundKeys`] sequence.
    pub fn round_keys(&self) -> RoundKeys<u64> {
        RoundKeys::from(self.keys.as_slice())
    }

    /// Builds a network with the default round function.
    pub fn into_network(self) -> FeistelNetwork<u64> {
        FeistelNetwork::with_default_round(self.keys)
    }
}

fn round_count(len: usize) -> Result<u32, ShuffleError> {
    u32::try_from(len).map_err(|_| ShuffleError::Material(format!("{len} rounds exceed the u32 limit")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> KeyMaterial {
        KeyMaterial::new(&RoundKeys::from(vec![1u64, 2, 3, 0xdead_beef])).expect("four rounds")
    }

    #[test]
    fn round_count_rejects_oversized_lengths() {
        assert_eq!(round_count(4), Ok(4));
        assert_eq!(round_count(u32::MAX as usize), Ok(u32::MAX));
        #[cfg(target_pointer_width = "64")]
        assert!(matches!(
            round_count(u32::MAX as usize + 1),
            Err(ShuffleError::Material(_))
        ));
    }

    #[test]
    fn serialize_roundtrip() {
        let material = sample();
        let bytes = material.to_bytes().expect("serialize");
        let decoded = KeyMaterial::from_bytes(&bytes).expect("deserialize");
        assert_eq!(decoded, material);
        assert_eq!(decoded.params.rounds, 4);
        assert_eq!(decoded.into_network().rounds(), 4);
    }

    #[test]
    fn rejects_inconsistent_round_count() {
        let mut material = sample();
        material.params.rounds = 7;
        let bytes = material.to_bytes().expect("serialize");
        assert!(matches!(
            KeyMaterial::from_bytes(&bytes),
            Err(ShuffleError::Material(_))
        ));
    }

    #[test]
    fn rejects_other_word_width_and_version() {
        let mut material = sample();
        material.params.word_bits = 32;
        assert!(material.validate().is_err());

        let mut material = sample();
        material.params.version = 2;
        assert!(material.validate().is_err());
    }

    #[test]
    fn rejects_truncated_bytes() {
        let bytes = sample().to_bytes().expect("serialize");
        assert!(matches!(
            KeyMaterial::from_bytes(&bytes[..bytes.len() - 3]),
            Err(ShuffleError::Material(_))
        ));
    }
}
