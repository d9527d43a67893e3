use anyhow::Result;
use argh::FromArgs;
use chrono::DateTime;
use heliumlib::chainparams::ChainParams;
use heliumlib::select_params;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// helium node startup: selects a network and reports its chain identity
struct Args {
    #[argh(option, default = "String::from(\"main\")")]
    /// network to run on: main, test or regtest
    network: String,
}

fn report(chain: &ChainParams) {
    let header = &chain.genesis.header;
    let prefixes = &chain.base58_prefixes;
    let genesis_time = DateTime::from_timestamp(i64::from(header.time), 0)
        .map(|time| time.to_rfc3339())
        .unwrap_or_else(|| header.time.to_string());

    println!("network:          {}", chain.network);
    println!("genesis:          {}", chain.genesis_hash());
    println!("merkle root:      {}", header.merkle_root);
    println!("genesis time:     {}", genesis_time);
    println!("genesis bits:     {}", header.bits);
    println!("magic:            {}", hex::encode(chain.message_start));
    println!("port:             {}", chain.default_port);
    println!(
        "prefixes:         pubkey {} script {} secret {} xpub {} xprv {} coin type {}",
        prefixes.pubkey_address,
        prefixes.script_address,
        prefixes.secret_key,
        hex::encode(prefixes.ext_public_key),
        hex::encode(prefixes.ext_secret_key),
        hex::encode(prefixes.coin_type),
    );
    println!(
        "retarget:         every {} blocks",
        chain.difficulty_adjustment_interval()
    );
    for seed in &chain.seeds.dns_seeds {
        println!("dns seed:         {} ({})", seed.host, seed.name);
    }
    for addr in &chain.seeds.fixed_seeds {
        println!("fixed seed:       {}", addr);
    }
    for (height, hash) in chain.checkpoints.iter() {
        println!("checkpoint:       {} {}", height, hash);
    }
    for (id, deployment) in chain.consensus.deployments() {
        println!(
            "deployment:       {} bit {} from {} until {}",
            id.name(),
            deployment.bit,
            deployment.start_time,
            deployment.timeout
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Args = argh::from_env();

    // an unknown name or a broken parameter set halts startup
    let chain = select_params(&args.network).inspect_err(|e| {
        error!(network = %args.network, "cannot start: {}", e);
    })?;
    info!(network = %chain.network, port = chain.default_port, "chain parameters ready");

    report(chain);
    Ok(())
}
