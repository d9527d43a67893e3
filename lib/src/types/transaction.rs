use crate::encode::Encodable;
use crate::script::Script;
use crate::sha256::Hash;
use crate::Amount;
use serde::{Deserialize, Serialize};

pub const SEQUENCE_FINAL: u32 = 0xffff_ffff;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,
}

impl Transaction {
    pub fn new(inputs: Vec<TransactionInput>, outputs: Vec<TransactionOutput>) -> Self {
        Transaction {
            version: 1,
            inputs,
            outputs,
            lock_time: 0,
        }
    }

    /// txid
    pub fn hash(&self) -> Hash {
        Hash::hash(self)
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_output.is_null()
    }
}

impl Encodable for Transaction {
    fn consensus_encode(&self, writer: &mut Vec<u8>) {
        self.version.consensus_encode(writer);
        self.inputs.consensus_encode(writer);
        self.outputs.consensus_encode(writer);
        self.lock_time.consensus_encode(writer);
    }
}

/// Reference to an output of an earlier transaction.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutPoint {
    pub txid: Hash,
    pub vout: u32,
}

impl OutPoint {
    // what a coinbase input spends
    pub fn null() -> Self {
        OutPoint {
            txid: Hash::zero(),
            vout: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }
}

impl Encodable for OutPoint {
    fn consensus_encode(&self, writer: &mut Vec<u8>) {
        self.txid.consensus_encode(writer);
        self.vout.consensus_encode(writer);
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TransactionInput {
    pub previous_output: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

impl TransactionInput {
    pub fn coinbase(script_sig: Script) -> Self {
        TransactionInput {
            previous_output: OutPoint::null(),
            script_sig,
            sequence: SEQUENCE_FINAL,
        }
    }
}

impl Encodable for TransactionInput {
    fn consensus_encode(&self, writer: &mut Vec<u8>) {
        self.previous_output.consensus_encode(writer);
        self.script_sig.consensus_encode(writer);
        self.sequence.consensus_encode(writer);
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TransactionOutput {
    pub value: Amount,
    pub script_pubkey: Script,
}

impl Encodable for TransactionOutput {
    fn consensus_encode(&self, writer: &mut Vec<u8>) {
        self.value.consensus_encode(writer);
        self.script_pubkey.consensus_encode(writer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_outpoint_encoding() {
        let encoded = OutPoint::null().consensus_bytes();
        assert_eq!(encoded.len(), 36);
        assert!(encoded[..32].iter().all(|b| *b == 0));
        assert_eq!(&encoded[32..], &[0xff; 4]);
    }

    #[test]
    fn coinbase_detection() {
        let coinbase = Transaction::new(
            vec![TransactionInput::coinbase(Script::new())],
            vec![TransactionOutput {
                value: 1,
                script_pubkey: Script::new(),
            }],
        );
        assert!(coinbase.is_coinbase());

        let mut spend = coinbase.clone();
        spend.inputs[0].previous_output = OutPoint {
            txid: coinbase.hash(),
            vout: 0,
        };
        assert!(!spend.is_coinbase());
    }
}
