use crate::compact::CompactTarget;
use crate::encode::Encodable;
use crate::sha256::Hash;
use crate::types::transaction::Transaction;
use crate::util::{MerkleRoot, Savable};
use serde::{Deserialize, Serialize};
use std::io::{Error as IoError, ErrorKind as IoErrorKind, Read, Result as IoResult, Write};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn new(header: BlockHeader, transactions: Vec<Transaction>) -> Self {
        Self {
            header,
            transactions,
        }
    }

    // a block is identified by its header alone
    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    pub fn has_valid_merkle_root(&self) -> bool {
        MerkleRoot::calculate(&self.transactions) == self.header.merkle_root
    }
}

impl Savable for Block {
    fn load<I: Read>(reader: I) -> IoResult<Self> {
        ciborium::de::from_reader(reader)
            .map_err(|_| IoError::new(IoErrorKind::InvalidData, "Failed to deserialize block"))
    }

    fn save<O: Write>(&self, writer: O) -> IoResult<()> {
        ciborium::ser::into_writer(self, writer)
            .map_err(|_| IoError::new(IoErrorKind::InvalidData, "Failed to serialize block"))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: Hash,
    /// tx aggregated to single merkle root
    pub merkle_root: MerkleRoot,
    /// unix seconds
    pub time: u32,
    /// for POW
    pub bits: CompactTarget,
    pub nonce: u32,
}

impl BlockHeader {
    pub fn new(
        version: i32,
        prev_block_hash: Hash,
        merkle_root: MerkleRoot,
        time: u32,
        bits: CompactTarget,
        nonce: u32,
    ) -> Self {
        Self {
            version,
            prev_block_hash,
            merkle_root,
            time,
            bits,
            nonce,
        }
    }

    pub fn hash(&self) -> Hash {
        Hash::hash(self)
    }

    /// Steps to the next proof-of-work candidate. When the nonce space is
    /// exhausted the nonce restarts at zero and the time moves forward one
    /// second. Returns `true` on that wraparound.
    pub fn next_candidate(&mut self) -> bool {
        if let Some(new_nonce) = self.nonce.checked_add(1) {
            self.nonce = new_nonce;
            false
        } else {
            self.nonce = 0;
            self.time = self.time.wrapping_add(1);
            true
        }
    }
}

impl Encodable for BlockHeader {
    fn consensus_encode(&self, writer: &mut Vec<u8>) {
        self.version.consensus_encode(writer);
        self.prev_block_hash.consensus_encode(writer);
        self.merkle_root.consensus_encode(writer);
        self.time.consensus_encode(writer);
        self.bits.consensus_encode(writer);
        self.nonce.consensus_encode(writer);
    }
}
