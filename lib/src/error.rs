use crate::chainparams::NetworkId;
use crate::sha256::Hash;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("unknown network `{0}`, expected one of: main, test, regtest")]
    UnknownNetwork(String),
    #[error("compact target {0:#010x} overflows 256 bits")]
    CompactOverflow(u32),
    #[error("compact target {0:#010x} is negative")]
    CompactNegative(u32),
    #[error("{network} genesis hash mismatch: expected {expected}, computed {actual}")]
    GenesisHashMismatch {
        network: NetworkId,
        expected: Hash,
        actual: Hash,
    },
    #[error("{network} genesis merkle root mismatch: expected {expected}, computed {actual}")]
    MerkleRootMismatch {
        network: NetworkId,
        expected: Hash,
        actual: Hash,
    },
    #[error("{network} genesis hash {hash} does not satisfy its own target {bits:#010x}")]
    GenesisAboveTarget { network: NetworkId, hash: Hash, bits: u32 },
    #[error("{network} checkpoint at height 0 is {actual}, genesis is {expected}")]
    CheckpointMismatch {
        network: NetworkId,
        expected: Hash,
        actual: Hash,
    },
    #[error("{network} checkpoint at height {height} follows height {previous}, heights must strictly increase")]
    UnorderedCheckpoints {
        network: NetworkId,
        height: u32,
        previous: u32,
    },
    #[error("{0} checkpoint set has no entry for height 0")]
    MissingGenesisCheckpoint(NetworkId),
    #[error("{network} deployment {deployment} uses bit {bit}, allowed range is 0..=28")]
    InvalidDeploymentBit {
        network: NetworkId,
        deployment: &'static str,
        bit: u8,
    },
    #[error("invalid 256-bit hash literal `{0}`")]
    InvalidHash(String),
    #[error("no network has been selected")]
    NoActiveNetwork,
    #[error("network {active} is already selected, cannot switch to {requested}")]
    NetworkAlreadySelected { active: NetworkId, requested: NetworkId },
}

pub type Result<T> = std::result::Result<T, ChainError>;
