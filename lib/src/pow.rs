//! Brute-force proof-of-work search over genesis parameters.
//!
//! Only used when a new network is being defined. The coinbase never changes
//! while searching, so the merkle root is computed once and only the header
//! nonce and time move.

use crate::compact::CompactTarget;
use crate::error::Result;
use crate::genesis::GenesisParameters;
use crate::sha256::Hash;
use crate::types::{Block, BlockHeader};
use crate::util::MerkleRoot;
use crate::U256;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// Nonces tried between two looks at the cancellation flag.
pub const BATCH_SIZE: u64 = 10_000;
const PROGRESS_INTERVAL: u64 = 100_000;

#[derive(Clone, Debug)]
pub struct GenesisSearch {
    params: GenesisParameters,
    target: U256,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Input parameters with the winning nonce and time filled in.
    pub params: GenesisParameters,
    pub hash: Hash,
    pub merkle_root: MerkleRoot,
    /// Header hashes evaluated, the winning one included.
    pub attempts: u64,
}

impl SearchOutcome {
    pub fn block(&self) -> Block {
        self.params.build()
    }
}

struct Candidate {
    header: BlockHeader,
    target: U256,
    attempts: u64,
}

impl Candidate {
    fn mine(&mut self, steps: u64) -> Option<Hash> {
        for _ in 0..steps {
            let hash = self.header.hash();
            self.attempts += 1;
            if hash.matches_target(self.target) {
                return Some(hash);
            }
            if self.attempts % PROGRESS_INTERVAL == 0 {
                debug!(
                    attempts = self.attempts,
                    nonce = self.header.nonce,
                    time = self.header.time,
                    "genesis search progress"
                );
            }
            if self.header.next_candidate() {
                info!(time = self.header.time, "nonce space exhausted, advancing time");
            }
        }
        None
    }
}

impl GenesisSearch {
    pub fn new(params: GenesisParameters, target: U256) -> Self {
        GenesisSearch { params, target }
    }

    /// Searches against the target encoded in the parameters' own `bits`.
    pub fn from_bits(params: GenesisParameters) -> Result<Self> {
        let target = params.bits.to_target()?;
        Ok(GenesisSearch::new(params, target))
    }

    pub fn with_bits(params: GenesisParameters, bits: CompactTarget) -> Result<Self> {
        let target = bits.to_target()?;
        Ok(GenesisSearch::new(params, target))
    }

    pub fn target(&self) -> U256 {
        self.target
    }

    /// Runs until a hash below the target is found. Unbounded: a target
    /// that is too hard keeps this running forever.
    pub fn run(&self) -> SearchOutcome {
        let mut candidate = self.start();
        loop {
            if let Some(hash) = candidate.mine(BATCH_SIZE) {
                return self.finish(candidate, hash);
            }
        }
    }

    /// Like [`GenesisSearch::run`], but gives up with `None` once `cancel`
    /// is observed set. The flag is read before every batch.
    pub fn run_with_cancel(&self, cancel: &AtomicBool) -> Option<SearchOutcome> {
        let mut candidate = self.start();
        while !cancel.load(Ordering::Relaxed) {
            if let Some(hash) = candidate.mine(BATCH_SIZE) {
                return Some(self.finish(candidate, hash));
            }
        }
        info!(attempts = candidate.attempts, "genesis search cancelled");
        None
    }

    fn start(&self) -> Candidate {
        info!(
            nonce = self.params.nonce,
            time = self.params.time,
            bits = %self.params.bits,
            "starting genesis search"
        );
        Candidate {
            header: self.params.header(),
            target: self.target,
            attempts: 0,
        }
    }

    fn finish(&self, candidate: Candidate, hash: Hash) -> SearchOutcome {
        let mut params = self.params.clone();
        params.nonce = candidate.header.nonce;
        params.time = candidate.header.time;
        info!(
            nonce = params.nonce,
            time = params.time,
            attempts = candidate.attempts,
            %hash,
            "genesis search succeeded"
        );
        SearchOutcome {
            params,
            hash,
            merkle_root: candidate.header.merkle_root,
            attempts: candidate.attempts,
        }
    }
}

/// Searches from `initial` and returns it with the found nonce and time.
pub fn search(initial: GenesisParameters, target: U256) -> GenesisParameters {
    GenesisSearch::new(initial, target).run().params
}
