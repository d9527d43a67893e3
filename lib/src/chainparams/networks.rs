//! The published records for main, test and regtest.

use super::{
    AddressPrefixes, ConsensusRules, Deployment, GenesisSpec, NetworkId, NetworkSpec, PolicyFlags,
};
use crate::compact::CompactTarget;
use crate::{COIN, U256};

pub const GENESIS_TIMESTAMP: &str =
    "Bitcoin Block #462720: 0000000000000000005b05764038a767b16533fb63c67d759afb2f2259d75c6a";

// the coinbase is the same on every network
pub const GENESIS_MERKLE_ROOT: &str =
    "6a8d14f36d8dc3089bb9c652b7691ab5a5ca4f292cd13fb1eed8bd2ff1ddab63";

const fn genesis(time: u32, nonce: u32, bits: u32) -> GenesisSpec {
    GenesisSpec {
        timestamp: GENESIS_TIMESTAMP,
        time,
        nonce,
        bits: CompactTarget::from_consensus(bits),
        version: 1,
        reward: 50 * COIN,
    }
}

const fn deployment(bit: u8, start_time: i64, timeout: i64) -> Deployment {
    Deployment {
        bit,
        start_time,
        timeout,
    }
}

// 00000fffff000000000000000000000000000000000000000000000000000000
const POW_LIMIT: U256 = U256([0, 0, 0, 0x0000_0fff_ff00_0000]);
// 7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff
const REGTEST_POW_LIMIT: U256 = U256([u64::MAX, u64::MAX, u64::MAX, 0x7fff_ffff_ffff_ffff]);

const ONE_DAY: i64 = 24 * 60 * 60;
// 2.5 minutes
const BLOCK_SPACING: i64 = 150;

/// Pubkey addresses start with 'X', script addresses with '7'.
pub static MAIN: NetworkSpec = NetworkSpec {
    network: NetworkId::Main,
    genesis: genesis(1_503_187_200, 410_678, 0x1e0f_fff0),
    genesis_hash: "00000bb05966a7bcedb336fa91c29f7b37e0cbd9b50f6a6cc77ad381e5566df8",
    genesis_merkle_root: GENESIS_MERKLE_ROOT,
    bip34: Some((
        227_931,
        "000000000000024b89b42a942fe0d9fea3bb44ab7bd1b19115dd6a759c0808b8",
    )),
    rules: ConsensusRules {
        subsidy_halving_interval: 210_240,
        masternode_payments_start_block: 100_000,
        masternode_payments_increase_block: 158_000,
        masternode_payments_increase_period: 576 * 30,
        instant_send_keep_lock: 24,
        budget_payments_start_block: 328_008,
        budget_payments_cycle_blocks: 16_616,
        budget_payments_window_blocks: 100,
        budget_proposal_establishing_time: ONE_DAY,
        superblock_start_block: 614_820,
        superblock_cycle: 16_616,
        governance_min_quorum: 10,
        governance_filter_elements: 20_000,
        masternode_minimum_confirmations: 15,
        majority_enforce_block_upgrade: 750,
        majority_reject_block_outdated: 950,
        majority_window: 1000,
        pow_limit: POW_LIMIT,
        pow_target_timespan: ONE_DAY,
        pow_target_spacing: BLOCK_SPACING,
        allow_min_difficulty_blocks: false,
        no_retargeting: false,
        // 95% of 2016
        rule_change_activation_threshold: 1916,
        miner_confirmation_window: 2016,
        deployments: [
            // January 1, 2008 to December 31, 2008
            deployment(28, 1_199_145_601, 1_230_767_999),
            // Feb 5th, 2017 to Feb 5th, 2018
            deployment(0, 1_486_252_800, 1_517_788_800),
        ],
    },
    message_start: [0x0f, 0x0a, 0xc0, 0xe0],
    alert_pub_key: &[],
    default_port: 9009,
    max_tip_age: 6 * 60 * 60,
    prune_after_height: 100_000,
    dns_seeds: &[],
    fixed_seeds: &[],
    base58_prefixes: AddressPrefixes {
        pubkey_address: 76,
        script_address: 16,
        secret_key: 204,
        ext_public_key: [0x04, 0x88, 0xb2, 0x1e],
        ext_secret_key: [0x04, 0x88, 0xad, 0xe4],
        coin_type: [0x80, 0x00, 0x00, 0x05],
    },
    policy: PolicyFlags {
        mining_requires_peers: true,
        default_consistency_checks: false,
        require_standard: true,
        mine_blocks_on_demand: false,
        testnet_to_be_deprecated_field_rpc: false,
    },
    pool_max_transactions: 3,
    fulfilled_request_expire_time: 60 * 60,
    spork_pub_key: "",
    masternode_payments_pub_key: "",
    checkpoints: &[(
        0,
        "00000bb05966a7bcedb336fa91c29f7b37e0cbd9b50f6a6cc77ad381e5566df8",
    )],
};

/// Pubkey addresses start with 'y', script addresses with '8' or '9'.
pub static TEST: NetworkSpec = NetworkSpec {
    network: NetworkId::Test,
    genesis: genesis(1_503_190_800, 824_929, 0x1e0f_fff0),
    genesis_hash: "0000013a6e0083e5f65668024bae1327e10635800731e5c48b5c1aed5dff7307",
    genesis_merkle_root: GENESIS_MERKLE_ROOT,
    bip34: Some((
        21_111,
        "0000000023b3a96d3484e5abb3755c413e7d41500f8e2a5c3f0dd01299cd8ef8",
    )),
    rules: ConsensusRules {
        subsidy_halving_interval: 210_240,
        masternode_payments_start_block: 10_000,
        masternode_payments_increase_block: 46_000,
        masternode_payments_increase_period: 576,
        instant_send_keep_lock: 6,
        budget_payments_start_block: 60_000,
        budget_payments_cycle_blocks: 50,
        budget_payments_window_blocks: 10,
        budget_proposal_establishing_time: 60 * 20,
        superblock_start_block: 61_000,
        superblock_cycle: 24,
        governance_min_quorum: 1,
        governance_filter_elements: 500,
        masternode_minimum_confirmations: 1,
        majority_enforce_block_upgrade: 51,
        majority_reject_block_outdated: 75,
        majority_window: 100,
        pow_limit: POW_LIMIT,
        pow_target_timespan: ONE_DAY,
        pow_target_spacing: BLOCK_SPACING,
        allow_min_difficulty_blocks: true,
        no_retargeting: false,
        // 75% of 2016
        rule_change_activation_threshold: 1512,
        miner_confirmation_window: 2016,
        deployments: [
            deployment(28, 1_199_145_601, 1_230_767_999),
            // March 1st, 2016 to May 1st, 2017
            deployment(0, 1_456_790_400, 1_493_596_800),
        ],
    },
    message_start: [0xf0, 0xa0, 0x0c, 0x0e],
    alert_pub_key: &[],
    default_port: 19009,
    // allow mining on top of old blocks
    max_tip_age: 0x7fff_ffff,
    prune_after_height: 1000,
    dns_seeds: &[("helium.org", "testnet-seed.helium.org")],
    fixed_seeds: &[],
    base58_prefixes: AddressPrefixes {
        pubkey_address: 140,
        script_address: 19,
        secret_key: 239,
        ext_public_key: [0x04, 0x35, 0x87, 0xcf],
        ext_secret_key: [0x04, 0x35, 0x83, 0x94],
        coin_type: [0x80, 0x00, 0x00, 0x01],
    },
    policy: PolicyFlags {
        mining_requires_peers: true,
        default_consistency_checks: false,
        require_standard: false,
        mine_blocks_on_demand: false,
        testnet_to_be_deprecated_field_rpc: true,
    },
    pool_max_transactions: 3,
    fulfilled_request_expire_time: 5 * 60,
    spork_pub_key: "",
    masternode_payments_pub_key: "",
    checkpoints: &[(
        0,
        "0000013a6e0083e5f65668024bae1327e10635800731e5c48b5c1aed5dff7307",
    )],
};

/// Bitcoin regtest address bytes: pubkey addresses start with 'm' or 'n',
/// script addresses with '2'.
pub static REGTEST: NetworkSpec = NetworkSpec {
    network: NetworkId::RegTest,
    genesis: genesis(1_503_187_200, 3, 0x207f_ffff),
    genesis_hash: "7205e6e2d9ec2c83eb8e77d6fb38d63b10acbbeeb5889c150f77142dc6481009",
    genesis_merkle_root: GENESIS_MERKLE_ROOT,
    bip34: None,
    rules: ConsensusRules {
        subsidy_halving_interval: 150,
        masternode_payments_start_block: 240,
        masternode_payments_increase_block: 350,
        masternode_payments_increase_period: 10,
        instant_send_keep_lock: 6,
        budget_payments_start_block: 1000,
        budget_payments_cycle_blocks: 50,
        budget_payments_window_blocks: 10,
        budget_proposal_establishing_time: 60 * 20,
        superblock_start_block: 1500,
        superblock_cycle: 10,
        governance_min_quorum: 1,
        governance_filter_elements: 100,
        masternode_minimum_confirmations: 1,
        majority_enforce_block_upgrade: 750,
        majority_reject_block_outdated: 950,
        majority_window: 1000,
        pow_limit: REGTEST_POW_LIMIT,
        pow_target_timespan: ONE_DAY,
        pow_target_spacing: BLOCK_SPACING,
        allow_min_difficulty_blocks: true,
        no_retargeting: true,
        // 75% of 144
        rule_change_activation_threshold: 108,
        miner_confirmation_window: 144,
        deployments: [
            deployment(28, 0, 999_999_999_999),
            deployment(0, 0, 999_999_999_999),
        ],
    },
    message_start: [0xf0, 0x0a, 0xc0, 0x0e],
    alert_pub_key: &[],
    default_port: 19004,
    max_tip_age: 6 * 60 * 60,
    prune_after_height: 1000,
    dns_seeds: &[],
    fixed_seeds: &[],
    base58_prefixes: AddressPrefixes {
        pubkey_address: 111,
        script_address: 196,
        secret_key: 239,
        ext_public_key: [0x04, 0x35, 0x87, 0xcf],
        ext_secret_key: [0x04, 0x35, 0x83, 0x94],
        coin_type: [0x80, 0x00, 0x00, 0x01],
    },
    policy: PolicyFlags {
        mining_requires_peers: false,
        default_consistency_checks: true,
        require_standard: false,
        mine_blocks_on_demand: true,
        testnet_to_be_deprecated_field_rpc: false,
    },
    pool_max_transactions: 3,
    fulfilled_request_expire_time: 5 * 60,
    spork_pub_key: "",
    masternode_payments_pub_key: "",
    checkpoints: &[(
        0,
        "7205e6e2d9ec2c83eb8e77d6fb38d63b10acbbeeb5889c150f77142dc6481009",
    )],
};

/// Indexed by `NetworkId as usize`.
pub static NETWORKS: [&NetworkSpec; 3] = [&MAIN, &TEST, &REGTEST];

pub fn spec(network: NetworkId) -> &'static NetworkSpec {
    NETWORKS[network as usize]
}
