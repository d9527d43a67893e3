use std::fmt;
use std::fs::File;
use std::io::{Read, Result as IoResult, Write};
use std::path::Path;

use crate::encode::Encodable;
use crate::sha256::Hash;
use crate::types::Transaction;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub struct MerkleRoot(Hash);

impl MerkleRoot {
    // txids paired level by level, an odd one out is paired with itself
    pub fn calculate(transactions: &[Transaction]) -> MerkleRoot {
        let mut layer: Vec<Hash> = transactions.iter().map(|tx| tx.hash()).collect();
        if layer.is_empty() {
            return MerkleRoot(Hash::zero());
        }

        while layer.len() > 1 {
            let mut new_layer = Vec::with_capacity(layer.len().div_ceil(2));
            for pair in layer.chunks(2) {
                let left = pair[0];
                let right = pair.get(1).copied().unwrap_or(left);
                let mut concatenated = Vec::with_capacity(64);
                left.consensus_encode(&mut concatenated);
                right.consensus_encode(&mut concatenated);
                new_layer.push(Hash::double_sha256(&concatenated));
            }
            layer = new_layer;
        }

        MerkleRoot(layer[0])
    }

    pub fn as_hash(&self) -> Hash {
        self.0
    }
}

impl From<Hash> for MerkleRoot {
    fn from(hash: Hash) -> Self {
        MerkleRoot(hash)
    }
}

impl Encodable for MerkleRoot {
    fn consensus_encode(&self, writer: &mut Vec<u8>) {
        self.0.consensus_encode(writer);
    }
}

impl fmt::Display for MerkleRoot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

pub trait Savable
where
    Self: Sized,
{
    fn load<I: Read>(reader: I) -> IoResult<Self>;
    fn save<O: Write>(&self, writer: O) -> IoResult<()>;

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> IoResult<()> {
        let file = File::create(&path)?;
        self.save(file)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let file = File::open(&path)?;
        Self::load(file)
    }
}
