use std::fmt;

use crate::encode::Encodable;
use crate::error::{ChainError, Result};
use crate::U256;
use serde::{Deserialize, Serialize};
use sha256::digest;

/// 256-bit hash held as an unsigned integer.
///
/// The integer is read from the digest bytes in little-endian order, which is
/// the order proof-of-work compares in. `Display` and `from_hex` use the
/// conventional reversed (big-endian) hex form.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash(U256);

impl Hash {
    // hash anything with a consensus encoding
    pub fn hash<T: Encodable>(data: &T) -> Self {
        Self::double_sha256(&data.consensus_bytes())
    }

    pub fn double_sha256(data: &[u8]) -> Self {
        Hash::from_bytes(sha256_round(&sha256_round(data)))
    }

    /// Parses the reversed hex form, with or without a `0x` prefix.
    /// Short literals are left-padded with zeroes.
    pub fn from_hex(literal: &str) -> Result<Self> {
        let trimmed = literal.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.len() > 64 {
            return Err(ChainError::InvalidHash(literal.to_string()));
        }
        let padded = format!("{:0>64}", digits);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&padded, &mut bytes)
            .map_err(|_| ChainError::InvalidHash(literal.to_string()))?;
        Ok(Hash(U256::from_big_endian(&bytes)))
    }

    // bytes in digest (little-endian) order
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash(U256::from_little_endian(&bytes))
    }

    // check if a hash is strictly below a target
    pub fn matches_target(&self, target: U256) -> bool {
        self.0 < target
    }

    pub fn zero() -> Self {
        Hash(U256::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_u256(&self) -> U256 {
        self.0
    }

    pub fn as_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        self.0.to_little_endian(&mut bytes);
        bytes
    }
}

fn sha256_round(data: &[u8]) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    if let Err(e) = hex::decode_to_slice(digest(data), &mut bytes) {
        panic!(
            "sha256 produced an invalid digest: {:?} \
            This should not happen",
            e
        );
    }
    bytes
}

impl From<U256> for Hash {
    fn from(value: U256) -> Self {
        Hash(value)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut bytes = [0u8; 32];
        self.0.to_big_endian(&mut bytes);
        write!(f, "{}", hex::encode(bytes))
    }
}
