//! Per-network chain parameters and the process-wide registry.
//!
//! Every network is described by one [`NetworkSpec`] record in
//! [`networks::NETWORKS`]. [`ChainParams::new`] turns a record into the
//! immutable parameter set, rebuilding the genesis block and checking it
//! against the published literals. The registry builds each set on first use
//! and hands out `&'static` references from then on.

pub mod networks;

use crate::compact::CompactTarget;
use crate::error::{ChainError, Result};
use crate::genesis::{build_genesis, unspendable_output_script, GenesisParameters};
use crate::sha256::Hash;
use crate::types::Block;
use crate::{Amount, U256};
use static_init::dynamic;
use std::collections::BTreeMap;
use std::fmt;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, error, info};

/// Highest bit a version-bits deployment may signal on.
pub const MAX_DEPLOYMENT_BIT: u8 = 28;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NetworkId {
    Main,
    Test,
    RegTest,
}

impl NetworkId {
    pub const ALL: [NetworkId; 3] = [NetworkId::Main, NetworkId::Test, NetworkId::RegTest];

    pub fn name(self) -> &'static str {
        match self {
            NetworkId::Main => "main",
            NetworkId::Test => "test",
            NetworkId::RegTest => "regtest",
        }
    }
}

impl FromStr for NetworkId {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "main" => Ok(NetworkId::Main),
            "test" => Ok(NetworkId::Test),
            "regtest" => Ok(NetworkId::RegTest),
            other => Err(ChainError::UnknownNetwork(other.to_string())),
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeploymentId {
    TestDummy,
    Csv,
}

impl DeploymentId {
    pub const COUNT: usize = 2;
    pub const ALL: [DeploymentId; DeploymentId::COUNT] = [DeploymentId::TestDummy, DeploymentId::Csv];

    pub fn name(self) -> &'static str {
        match self {
            DeploymentId::TestDummy => "testdummy",
            DeploymentId::Csv => "csv",
        }
    }
}

/// Version-bits soft fork window. Declarative only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deployment {
    pub bit: u8,
    /// unix seconds
    pub start_time: i64,
    /// unix seconds
    pub timeout: i64,
}

/// Consensus values that are plain numbers and flags, shared verbatim
/// between a [`NetworkSpec`] record and the built [`ConsensusParams`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsensusRules {
    pub subsidy_halving_interval: u32,
    pub masternode_payments_start_block: u32,
    pub masternode_payments_increase_block: u32,
    pub masternode_payments_increase_period: u32,
    pub instant_send_keep_lock: u32,
    pub budget_payments_start_block: u32,
    pub budget_payments_cycle_blocks: u32,
    pub budget_payments_window_blocks: u32,
    /// seconds
    pub budget_proposal_establishing_time: i64,
    pub superblock_start_block: u32,
    pub superblock_cycle: u32,
    pub governance_min_quorum: u32,
    pub governance_filter_elements: u32,
    pub masternode_minimum_confirmations: u32,
    pub majority_enforce_block_upgrade: u32,
    pub majority_reject_block_outdated: u32,
    pub majority_window: u32,
    /// loosest target a block may claim
    pub pow_limit: U256,
    pub pow_target_timespan: i64,
    pub pow_target_spacing: i64,
    pub allow_min_difficulty_blocks: bool,
    pub no_retargeting: bool,
    pub rule_change_activation_threshold: u32,
    pub miner_confirmation_window: u32,
    /// indexed by `DeploymentId as usize`
    pub deployments: [Deployment; DeploymentId::COUNT],
}

impl ConsensusRules {
    pub fn deployment(&self, id: DeploymentId) -> &Deployment {
        &self.deployments[id as usize]
    }

    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.pow_target_timespan / self.pow_target_spacing
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bip34Activation {
    pub height: u32,
    pub hash: Hash,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsensusParams {
    pub genesis_hash: Hash,
    /// `None` where BIP34 never activates.
    pub bip34: Option<Bip34Activation>,
    pub rules: ConsensusRules,
}

impl ConsensusParams {
    pub fn deployments(&self) -> impl Iterator<Item = (DeploymentId, &Deployment)> {
        DeploymentId::ALL
            .into_iter()
            .map(|id| (id, self.rules.deployment(id)))
    }
}

/// Base58check version bytes per key and address class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressPrefixes {
    pub pubkey_address: u8,
    pub script_address: u8,
    pub secret_key: u8,
    pub ext_public_key: [u8; 4],
    pub ext_secret_key: [u8; 4],
    /// BIP44 coin type, hardened
    pub coin_type: [u8; 4],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolicyFlags {
    pub mining_requires_peers: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

/// Hard-coded peer, address in IPv6 form (IPv4 is v4-mapped).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedSpec {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec {
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = IpAddr::V6(Ipv6Addr::from(self.addr)).to_canonical();
        SocketAddr::new(ip, self.port)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedData {
    pub dns_seeds: Vec<DnsSeed>,
    pub fixed_seeds: Vec<SocketAddr>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckpointSet(BTreeMap<u32, Hash>);

impl CheckpointSet {
    pub fn get(&self, height: u32) -> Option<&Hash> {
        self.0.get(&height)
    }

    pub fn genesis(&self) -> Option<&Hash> {
        self.get(0)
    }

    /// In increasing height order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Hash)> {
        self.0.iter().map(|(height, hash)| (*height, hash))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenesisSpec {
    pub timestamp: &'static str,
    pub time: u32,
    pub nonce: u32,
    pub bits: CompactTarget,
    pub version: i32,
    pub reward: Amount,
}

impl GenesisSpec {
    pub fn to_params(&self) -> GenesisParameters {
        GenesisParameters {
            timestamp: self.timestamp.to_string(),
            output_script: unspendable_output_script(),
            time: self.time,
            nonce: self.nonce,
            bits: self.bits,
            version: self.version,
            reward: self.reward,
        }
    }
}

/// Literal description of one network. Hashes are big-endian hex as they
/// are usually published.
#[derive(Clone, Debug)]
pub struct NetworkSpec {
    pub network: NetworkId,
    pub genesis: GenesisSpec,
    pub genesis_hash: &'static str,
    pub genesis_merkle_root: &'static str,
    pub bip34: Option<(u32, &'static str)>,
    pub rules: ConsensusRules,
    pub message_start: [u8; 4],
    pub alert_pub_key: &'static [u8],
    pub default_port: u16,
    /// seconds
    pub max_tip_age: i64,
    pub prune_after_height: u64,
    pub dns_seeds: &'static [(&'static str, &'static str)],
    pub fixed_seeds: &'static [SeedSpec],
    pub base58_prefixes: AddressPrefixes,
    pub policy: PolicyFlags,
    pub pool_max_transactions: u32,
    /// seconds
    pub fulfilled_request_expire_time: i64,
    pub spork_pub_key: &'static str,
    pub masternode_payments_pub_key: &'static str,
    pub checkpoints: &'static [(u32, &'static str)],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainParams {
    pub network: NetworkId,
    pub consensus: ConsensusParams,
    pub genesis_params: GenesisParameters,
    pub genesis: Block,
    pub message_start: [u8; 4],
    pub alert_pub_key: Vec<u8>,
    pub default_port: u16,
    pub max_tip_age: i64,
    pub prune_after_height: u64,
    pub seeds: SeedData,
    pub base58_prefixes: AddressPrefixes,
    pub policy: PolicyFlags,
    pub pool_max_transactions: u32,
    pub fulfilled_request_expire_time: i64,
    pub spork_pub_key: String,
    pub masternode_payments_pub_key: String,
    pub checkpoints: CheckpointSet,
}

impl ChainParams {
    /// Builds the parameter set for one network record. Fails if the record
    /// does not describe a consistent chain: rejected genesis bits, a genesis
    /// block that differs from the published literals or misses its own
    /// target, a checkpoint set that does not start at that genesis block,
    /// or an out of range deployment bit.
    pub fn new(spec: &NetworkSpec) -> Result<Self> {
        let network = spec.network;
        let genesis_params = spec.genesis.to_params();
        let target = genesis_params.bits.to_target()?;
        let genesis = build_genesis(&genesis_params);
        let hash = genesis.hash();

        let expected_merkle_root = Hash::from_hex(spec.genesis_merkle_root)?;
        let merkle_root = genesis.header.merkle_root.as_hash();
        if merkle_root != expected_merkle_root {
            error!(%network, expected = %expected_merkle_root, actual = %merkle_root, "genesis merkle root mismatch");
            return Err(ChainError::MerkleRootMismatch {
                network,
                expected: expected_merkle_root,
                actual: merkle_root,
            });
        }

        let genesis_hash = Hash::from_hex(spec.genesis_hash)?;
        if hash != genesis_hash {
            error!(%network, expected = %genesis_hash, actual = %hash, "genesis hash mismatch");
            return Err(ChainError::GenesisHashMismatch {
                network,
                expected: genesis_hash,
                actual: hash,
            });
        }

        if !hash.matches_target(target) {
            error!(%network, %hash, bits = %genesis_params.bits, "genesis block misses its target");
            return Err(ChainError::GenesisAboveTarget {
                network,
                hash,
                bits: genesis_params.bits.to_consensus(),
            });
        }

        for id in DeploymentId::ALL {
            let bit = spec.rules.deployment(id).bit;
            if bit > MAX_DEPLOYMENT_BIT {
                error!(%network, deployment = id.name(), bit, "deployment bit out of range");
                return Err(ChainError::InvalidDeploymentBit {
                    network,
                    deployment: id.name(),
                    bit,
                });
            }
        }

        let mut checkpoints = CheckpointSet::default();
        for (height, literal) in spec.checkpoints {
            // heights must be strictly increasing, duplicates included
            if let Some((previous, _)) = checkpoints.0.last_key_value() {
                if *height <= *previous {
                    error!(%network, height, previous, "checkpoints out of order");
                    return Err(ChainError::UnorderedCheckpoints {
                        network,
                        height: *height,
                        previous: *previous,
                    });
                }
            }
            checkpoints.0.insert(*height, Hash::from_hex(literal)?);
        }
        match checkpoints.genesis() {
            None => {
                error!(%network, "no checkpoint at height 0");
                return Err(ChainError::MissingGenesisCheckpoint(network));
            }
            Some(checkpoint) if *checkpoint != genesis_hash => {
                error!(%network, checkpoint = %checkpoint, "checkpoint 0 is not the genesis block");
                return Err(ChainError::CheckpointMismatch {
                    network,
                    expected: genesis_hash,
                    actual: *checkpoint,
                });
            }
            Some(_) => {}
        }

        let bip34 = spec
            .bip34
            .map(|(height, literal)| -> Result<Bip34Activation> {
                Ok(Bip34Activation {
                    height,
                    hash: Hash::from_hex(literal)?,
                })
            })
            .transpose()?;

        let seeds = SeedData {
            dns_seeds: spec
                .dns_seeds
                .iter()
                .map(|(name, host)| DnsSeed {
                    name: name.to_string(),
                    host: host.to_string(),
                })
                .collect(),
            fixed_seeds: spec.fixed_seeds.iter().map(SeedSpec::socket_addr).collect(),
        };

        debug!(%network, genesis = %genesis_hash, checkpoints = checkpoints.len(), "built chain parameters");

        Ok(ChainParams {
            network,
            consensus: ConsensusParams {
                genesis_hash,
                bip34,
                rules: spec.rules,
            },
            genesis_params,
            genesis,
            message_start: spec.message_start,
            alert_pub_key: spec.alert_pub_key.to_vec(),
            default_port: spec.default_port,
            max_tip_age: spec.max_tip_age,
            prune_after_height: spec.prune_after_height,
            seeds,
            base58_prefixes: spec.base58_prefixes,
            policy: spec.policy,
            pool_max_transactions: spec.pool_max_transactions,
            fulfilled_request_expire_time: spec.fulfilled_request_expire_time,
            spork_pub_key: spec.spork_pub_key.to_string(),
            masternode_payments_pub_key: spec.masternode_payments_pub_key.to_string(),
            checkpoints,
        })
    }

    pub fn genesis_hash(&self) -> Hash {
        self.consensus.genesis_hash
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.consensus.rules.difficulty_adjustment_interval()
    }
}

#[dynamic(lazy)]
static MAIN_PARAMS: Result<ChainParams> = ChainParams::new(&networks::MAIN);

#[dynamic(lazy)]
static TEST_PARAMS: Result<ChainParams> = ChainParams::new(&networks::TEST);

#[dynamic(lazy)]
static REGTEST_PARAMS: Result<ChainParams> = ChainParams::new(&networks::REGTEST);

static ACTIVE_NETWORK: OnceLock<NetworkId> = OnceLock::new();

/// Parameter set for `network`, built on first request. A record that fails
/// its checks fails the same way on every call.
pub fn params(network: NetworkId) -> Result<&'static ChainParams> {
    let entry: &'static Result<ChainParams> = match network {
        NetworkId::Main => &MAIN_PARAMS,
        NetworkId::Test => &TEST_PARAMS,
        NetworkId::RegTest => &REGTEST_PARAMS,
    };
    entry.as_ref().map_err(Clone::clone)
}

pub fn params_for_name(name: &str) -> Result<&'static ChainParams> {
    params(name.parse()?)
}

/// Makes `network` the active network for the rest of the process. The first
/// successful selection wins; selecting the same network again is a no-op,
/// selecting a different one fails.
pub fn select(network: NetworkId) -> Result<&'static ChainParams> {
    let chain = params(network)?;
    let active = *ACTIVE_NETWORK.get_or_init(|| network);
    if active != network {
        return Err(ChainError::NetworkAlreadySelected {
            active,
            requested: network,
        });
    }
    info!(%network, genesis = %chain.genesis_hash(), "selected network");
    Ok(chain)
}

/// [`select`] by name: `main`, `test` or `regtest`.
pub fn select_params(name: &str) -> Result<&'static ChainParams> {
    select(name.parse()?)
}

pub fn active_network() -> Option<NetworkId> {
    ACTIVE_NETWORK.get().copied()
}

/// Parameters of the selected network. Fails until something was selected.
pub fn active_params() -> Result<&'static ChainParams> {
    let network = active_network().ok_or(ChainError::NoActiveNetwork)?;
    params(network)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockHeader;

    const TEST_GENESIS: &str = "0000013a6e0083e5f65668024bae1327e10635800731e5c48b5c1aed5dff7307";
    const MAIN_GENESIS: &str = "00000bb05966a7bcedb336fa91c29f7b37e0cbd9b50f6a6cc77ad381e5566df8";

    fn all() -> Vec<&'static ChainParams> {
        NetworkId::ALL
            .into_iter()
            .map(|network| params(network).unwrap())
            .collect()
    }

    #[test]
    fn every_network_builds() {
        for network in NetworkId::ALL {
            let chain = params(network).unwrap();
            assert_eq!(chain.network, network);
            assert_eq!(chain.genesis.hash(), chain.genesis_hash());
            assert!(chain.genesis.has_valid_merkle_root());
        }
    }

    #[test]
    fn genesis_literals() {
        let expected = [
            (NetworkId::Main, "00000bb05966a7bcedb336fa91c29f7b37e0cbd9b50f6a6cc77ad381e5566df8"),
            (NetworkId::Test, "0000013a6e0083e5f65668024bae1327e10635800731e5c48b5c1aed5dff7307"),
            (NetworkId::RegTest, "7205e6e2d9ec2c83eb8e77d6fb38d63b10acbbeeb5889c150f77142dc6481009"),
        ];
        for (network, hash) in expected {
            let chain = params(network).unwrap();
            assert_eq!(chain.genesis_hash().to_string(), hash);
            assert_eq!(
                chain.genesis.header.merkle_root.to_string(),
                "6a8d14f36d8dc3089bb9c652b7691ab5a5ca4f292cd13fb1eed8bd2ff1ddab63"
            );
        }
    }

    #[test]
    fn networks_are_pairwise_distinct() {
        let chains = all();
        for (i, a) in chains.iter().enumerate() {
            for b in &chains[i + 1..] {
                assert_ne!(a.genesis_hash(), b.genesis_hash());
                assert_ne!(a.base58_prefixes.pubkey_address, b.base58_prefixes.pubkey_address);
                assert_ne!(a.base58_prefixes.script_address, b.base58_prefixes.script_address);
                assert_ne!(a.message_start, b.message_start);
                assert_ne!(a.default_port, b.default_port);
            }
        }
    }

    #[test]
    fn checkpoint_zero_is_genesis() {
        for chain in all() {
            assert_eq!(chain.checkpoints.genesis(), Some(&chain.genesis_hash()));
            assert_eq!(chain.checkpoints.iter().next().map(|(h, _)| h), Some(0));
        }
    }

    #[test]
    fn genesis_target_within_pow_limit() {
        for chain in all() {
            let target = chain.genesis.header.bits.to_target().unwrap();
            assert!(target <= chain.consensus.rules.pow_limit);
        }
        let main = params(NetworkId::Main).unwrap();
        assert_eq!(
            Hash::from(main.consensus.rules.pow_limit).to_string(),
            "00000fffff000000000000000000000000000000000000000000000000000000"
        );
        let regtest = params(NetworkId::RegTest).unwrap();
        assert_eq!(
            Hash::from(regtest.consensus.rules.pow_limit).to_string(),
            "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        for name in ["mainnet", "Main", "", "testnet3"] {
            assert_eq!(
                params_for_name(name),
                Err(ChainError::UnknownNetwork(name.to_string()))
            );
        }
        assert_eq!(params_for_name("regtest").unwrap().network, NetworkId::RegTest);
    }

    #[test]
    fn names_round_trip() {
        for network in NetworkId::ALL {
            assert_eq!(network.to_string().parse::<NetworkId>(), Ok(network));
        }
    }

    #[test]
    fn table_is_indexed_by_network() {
        for (spec, network) in networks::NETWORKS.iter().zip(NetworkId::ALL) {
            assert_eq!(spec.network, network);
            assert_eq!(networks::spec(network).network, network);
        }
    }

    #[test]
    fn regtest_policy() {
        let regtest = params(NetworkId::RegTest).unwrap();
        assert!(regtest.consensus.rules.no_retargeting);
        assert!(regtest.consensus.rules.allow_min_difficulty_blocks);
        assert!(regtest.policy.mine_blocks_on_demand);
        assert!(regtest.consensus.bip34.is_none());
        assert!(regtest.seeds.dns_seeds.is_empty());
        assert!(regtest.seeds.fixed_seeds.is_empty());
    }

    #[test]
    fn main_consensus_values() {
        let main = params(NetworkId::Main).unwrap();
        let rules = &main.consensus.rules;
        assert_eq!(rules.subsidy_halving_interval, 210_240);
        assert_eq!(main.difficulty_adjustment_interval(), 576);
        assert_eq!(rules.deployment(DeploymentId::TestDummy).bit, 28);
        assert_eq!(rules.deployment(DeploymentId::Csv).bit, 0);
        assert_eq!(rules.deployment(DeploymentId::Csv).start_time, 1_486_252_800);
        assert_eq!(main.consensus.deployments().count(), 2);
        let bip34 = main.consensus.bip34.unwrap();
        assert_eq!(bip34.height, 227_931);
        assert_eq!(
            bip34.hash.to_string(),
            "000000000000024b89b42a942fe0d9fea3bb44ab7bd1b19115dd6a759c0808b8"
        );
        assert_eq!(main.message_start, [0x0f, 0x0a, 0xc0, 0xe0]);
        assert_eq!(main.default_port, 9009);
    }

    #[test]
    fn test_network_has_a_dns_seed() {
        let test = params(NetworkId::Test).unwrap();
        assert_eq!(
            test.seeds.dns_seeds,
            vec![DnsSeed {
                name: "helium.org".to_string(),
                host: "testnet-seed.helium.org".to_string(),
            }]
        );
    }

    #[test]
    fn fixed_seeds_unmap_ipv4() {
        let mut addr = [0u8; 16];
        addr[10] = 0xff;
        addr[11] = 0xff;
        addr[12..].copy_from_slice(&[10, 0, 0, 1]);
        let seed = SeedSpec { addr, port: 9009 };
        assert_eq!(seed.socket_addr().to_string(), "10.0.0.1:9009");
    }

    #[test]
    fn tampered_nonce_is_a_hash_mismatch() {
        let mut spec = networks::MAIN.clone();
        spec.genesis.nonce += 1;
        assert!(matches!(
            ChainParams::new(&spec),
            Err(ChainError::GenesisHashMismatch { network: NetworkId::Main, .. })
        ));
    }

    #[test]
    fn tampered_literal_is_a_hash_mismatch() {
        let mut spec = networks::TEST.clone();
        spec.genesis_hash = networks::MAIN.genesis_hash;
        let err = ChainParams::new(&spec).unwrap_err();
        assert_eq!(
            err,
            ChainError::GenesisHashMismatch {
                network: NetworkId::Test,
                expected: Hash::from_hex(networks::MAIN.genesis_hash).unwrap(),
                actual: Hash::from_hex(networks::TEST.genesis_hash).unwrap(),
            }
        );
    }

    #[test]
    fn tampered_timestamp_is_a_merkle_mismatch() {
        let mut spec = networks::REGTEST.clone();
        spec.genesis.timestamp = "TEST";
        assert!(matches!(
            ChainParams::new(&spec),
            Err(ChainError::MerkleRootMismatch { .. })
        ));
    }

    #[test]
    fn genesis_must_meet_its_own_target() {
        let mut spec = networks::REGTEST.clone();
        spec.genesis.bits = CompactTarget::from_consensus(0x1d00_ffff);
        let header: BlockHeader = spec.genesis.to_params().header();
        spec.genesis_hash = Box::leak(header.hash().to_string().into_boxed_str());
        assert!(matches!(
            ChainParams::new(&spec),
            Err(ChainError::GenesisAboveTarget { bits: 0x1d00_ffff, .. })
        ));
    }

    #[test]
    fn bad_genesis_bits_are_rejected() {
        let mut spec = networks::MAIN.clone();
        spec.genesis.bits = CompactTarget::from_consensus(0x2301_0000);
        assert_eq!(
            ChainParams::new(&spec),
            Err(ChainError::CompactOverflow(0x2301_0000))
        );
    }

    #[test]
    fn checkpoints_must_start_at_genesis() {
        let mut spec = networks::MAIN.clone();
        spec.checkpoints = &[];
        assert_eq!(
            ChainParams::new(&spec),
            Err(ChainError::MissingGenesisCheckpoint(NetworkId::Main))
        );

        spec.checkpoints = &[(0, TEST_GENESIS)];
        assert!(matches!(
            ChainParams::new(&spec),
            Err(ChainError::CheckpointMismatch { network: NetworkId::Main, .. })
        ));
    }

    #[test]
    fn checkpoint_heights_strictly_increase() {
        let mut spec = networks::MAIN.clone();
        spec.checkpoints = &[(0, MAIN_GENESIS), (5, TEST_GENESIS), (5, TEST_GENESIS)];
        assert_eq!(
            ChainParams::new(&spec),
            Err(ChainError::UnorderedCheckpoints {
                network: NetworkId::Main,
                height: 5,
                previous: 5,
            })
        );

        // a later correct genesis entry must not hide a wrong one
        spec.checkpoints = &[(5, MAIN_GENESIS), (0, TEST_GENESIS), (0, MAIN_GENESIS)];
        assert_eq!(
            ChainParams::new(&spec),
            Err(ChainError::UnorderedCheckpoints {
                network: NetworkId::Main,
                height: 0,
                previous: 5,
            })
        );

        spec.checkpoints = &[(0, MAIN_GENESIS), (5, TEST_GENESIS), (9, TEST_GENESIS)];
        let chain = ChainParams::new(&spec).unwrap();
        let heights: Vec<u32> = chain.checkpoints.iter().map(|(height, _)| height).collect();
        assert_eq!(heights, vec![0, 5, 9]);
    }

    #[test]
    fn deployment_bits_are_bounded() {
        let mut spec = networks::MAIN.clone();
        spec.rules.deployments[DeploymentId::Csv as usize].bit = 29;
        assert_eq!(
            ChainParams::new(&spec),
            Err(ChainError::InvalidDeploymentBit {
                network: NetworkId::Main,
                deployment: "csv",
                bit: 29,
            })
        );
    }
}
