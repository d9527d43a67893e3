use anyhow::{anyhow, bail, Result};
use clap::Parser;
use heliumlib::chainparams::{networks, NetworkId};
use heliumlib::pow::{GenesisSearch, SearchOutcome};
use heliumlib::sha256::Hash;
use heliumlib::util::Savable;
use heliumlib::{Amount, CompactTarget, GenesisParameters};
use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Searches for a genesis block nonce. Starts from the published genesis
/// parameters of `--network`; every other flag overrides one of them.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "regtest")]
    network: String,
    /// coinbase timestamp text
    #[arg(long)]
    timestamp: Option<String>,
    /// header time, unix seconds
    #[arg(long)]
    time: Option<u32>,
    /// compact target in hex, e.g. 0x1e0ffff0
    #[arg(long, value_parser = parse_bits)]
    bits: Option<CompactTarget>,
    /// first nonce to try
    #[arg(long)]
    nonce: Option<u32>,
    #[arg(long)]
    block_version: Option<i32>,
    /// coinbase reward in base units
    #[arg(long)]
    reward: Option<Amount>,
    /// write the found block here (CBOR)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl Cli {
    fn genesis_params(&self) -> Result<GenesisParameters> {
        let network: NetworkId = self.network.parse()?;
        let mut params = networks::spec(network).genesis.to_params();
        if let Some(timestamp) = &self.timestamp {
            params.timestamp = timestamp.clone();
        }
        if let Some(time) = self.time {
            params.time = time;
        }
        if let Some(bits) = self.bits {
            params.bits = bits;
        }
        if let Some(nonce) = self.nonce {
            params.nonce = nonce;
        }
        if let Some(version) = self.block_version {
            params.version = version;
        }
        if let Some(reward) = self.reward {
            params.reward = reward;
        }
        Ok(params)
    }
}

fn parse_bits(s: &str) -> std::result::Result<CompactTarget, String> {
    let digits = s.trim_start_matches("0x").trim_start_matches("0X");
    u32::from_str_radix(digits, 16)
        .map(CompactTarget::from_consensus)
        .map_err(|e| format!("invalid compact target `{}`: {}", s, e))
}

// the search is blocking, it gets its own thread and reports back over flume
fn spawn_search_thread(
    search: GenesisSearch,
    cancel: Arc<AtomicBool>,
    sender: flume::Sender<Option<SearchOutcome>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let outcome = search.run_with_cancel(&cancel);
        // receiver only goes away when main has already returned
        let _ = sender.send(outcome);
    })
}

fn print_outcome(outcome: &SearchOutcome) {
    let params = &outcome.params;
    println!("timestamp:   {}", params.timestamp);
    println!("time:        {}", params.time);
    println!("nonce:       {}", params.nonce);
    println!("bits:        {}", params.bits);
    println!("version:     {}", params.version);
    println!("reward:      {}", params.reward);
    println!("genesis:     {}", outcome.hash);
    println!("merkle root: {}", outcome.merkle_root);
    println!("attempts:    {}", outcome.attempts);
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let search = GenesisSearch::from_bits(cli.genesis_params()?)?;
    info!(network = %cli.network, target = %Hash::from(search.target()), "searching for genesis nonce");

    let cancel = Arc::new(AtomicBool::new(false));
    let (sender, receiver) = flume::bounded(1);
    let worker = spawn_search_thread(search, cancel.clone(), sender);

    let outcome = tokio::select! {
        received = receiver.recv_async() => received?,
        signal = tokio::signal::ctrl_c() => {
            signal?;
            warn!("interrupted, stopping search");
            cancel.store(true, Ordering::Relaxed);
            // the worker notices between batches and reports back
            receiver.recv_async().await?
        }
    };
    worker
        .join()
        .map_err(|_| anyhow!("search thread panicked"))?;

    let Some(outcome) = outcome else {
        bail!("search cancelled before a block was found");
    };
    print_outcome(&outcome);

    if let Some(path) = &cli.out {
        outcome
            .block()
            .save_to_file(path)
            .map_err(|e| anyhow!("Error writing block to {}: {}", path.display(), e))?;
        info!(path = %path.display(), "saved genesis block");
    }
    Ok(())
}
