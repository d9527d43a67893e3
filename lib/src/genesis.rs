//! Genesis block construction.
//!
//! The genesis block holds a single coinbase transaction whose scriptSig
//! carries a fixed marker, the script number 4 and the timestamp text. Its
//! output pays the reward to a script nobody holds a key for. Everything here
//! is a pure function of [`GenesisParameters`].

use crate::compact::CompactTarget;
use crate::script::{opcodes::OP_CHECKSIG, Script};
use crate::sha256::Hash;
use crate::types::{Block, BlockHeader, Transaction, TransactionInput, TransactionOutput};
use crate::util::MerkleRoot;
use crate::Amount;
use serde::{Deserialize, Serialize};

/// Height-marker value pushed first in the genesis scriptSig (0x1d00ffff).
pub const GENESIS_SCRIPT_SIG_MARKER: i64 = 486_604_799;
pub const GENESIS_SCRIPT_SIG_NUM: i64 = 4;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisParameters {
    pub timestamp: String,
    pub output_script: Script,
    pub time: u32,
    pub nonce: u32,
    pub bits: CompactTarget,
    pub version: i32,
    pub reward: Amount,
}

impl GenesisParameters {
    pub fn build(&self) -> Block {
        build_genesis(self)
    }

    pub fn hash(&self) -> Hash {
        self.header().hash()
    }

    pub fn header(&self) -> BlockHeader {
        let coinbase = coinbase_transaction(&self.timestamp, &self.output_script, self.reward);
        genesis_header(self, MerkleRoot::calculate(&[coinbase]))
    }
}

/// push(empty) OP_CHECKSIG
pub fn unspendable_output_script() -> Script {
    Script::builder().push_slice(&[]).push_opcode(OP_CHECKSIG).into_script()
}

pub fn coinbase_transaction(timestamp: &str, output_script: &Script, reward: Amount) -> Transaction {
    let script_sig = Script::builder()
        .push_int(GENESIS_SCRIPT_SIG_MARKER)
        .push_num(GENESIS_SCRIPT_SIG_NUM)
        .push_slice(timestamp.as_bytes())
        .into_script();
    Transaction::new(
        vec![TransactionInput::coinbase(script_sig)],
        vec![TransactionOutput {
            value: reward,
            script_pubkey: output_script.clone(),
        }],
    )
}

pub fn build_genesis(params: &GenesisParameters) -> Block {
    let coinbase = coinbase_transaction(&params.timestamp, &params.output_script, params.reward);
    let transactions = vec![coinbase];
    let header = genesis_header(params, MerkleRoot::calculate(&transactions));
    Block::new(header, transactions)
}

fn genesis_header(params: &GenesisParameters, merkle_root: MerkleRoot) -> BlockHeader {
    BlockHeader::new(
        params.version,
        Hash::zero(),
        merkle_root,
        params.time,
        params.bits,
        params.nonce,
    )
}
