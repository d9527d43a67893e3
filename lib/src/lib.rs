use serde::{Deserialize, Serialize};
use uint::construct_uint;

pub mod chainparams;
pub mod compact;
pub mod encode;
pub mod error;
pub mod genesis;
pub mod pow;
pub mod script;
pub mod sha256;
pub mod types;
pub mod util;

pub use chainparams::{
    active_params, params, params_for_name, select, select_params, ChainParams, NetworkId,
};
pub use compact::CompactTarget;
pub use error::ChainError;
pub use genesis::{build_genesis, GenesisParameters};
pub use pow::{GenesisSearch, SearchOutcome};

construct_uint! {
    #[derive(Serialize, Deserialize)]
    pub struct U256(4);
}

/// Amount in base units.
pub type Amount = i64;

// 1 coin = 10^8 base units
pub const COIN: Amount = 100_000_000;

// loosest target any compact value can describe without overflow
// 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF
pub const MAX_TARGET: U256 = U256([u64::MAX; 4]);
