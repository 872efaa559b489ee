use devnet_deployer::infra::solana::{read_payer, RpcCluster};
use devnet_deployer::infra::logging;
use devnet_deployer::{Config, FundingPolicy};
use solana_sdk::signer::Signer;
use tracing::Level;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Optional env vars:\n\
           SOLANA_RPC_URL, PAYER_KEYPAIR_PATH, DEPLOY_MIN_BALANCE_LAMPORTS\n\
         Default payer key:\n\
           ~/.config/solana/id.json\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init(Level::WARN);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let config = Config::from_env()?;

    println!("> Preflight:");
    println!("  SOLANA_RPC_URL={}", config.rpc_url);
    println!("  PAYER_KEYPAIR_PATH={}", config.payer_keypair_path.display());
    println!("  LOADER_PROGRAM_ID={}", config.loader_program_id);

    let payer = read_payer(&config.payer_keypair_path)?;
    let cluster = RpcCluster::new(config.rpc_url.clone());
    let client = cluster.client();

    // Basic RPC connectivity
    let version = client.get_version().await?;
    println!("  RPC version: {}", version.solana_core);

    // Payer balance against the deploy threshold
    let balance_lamports = client.get_balance(&payer.pubkey()).await?;
    let sol = balance_lamports as f64 / 1_000_000_000_f64;
    println!("  Payer: {}", payer.pubkey());
    println!("  Payer balance: {} lamports (~{:.6} SOL)", balance_lamports, sol);

    let policy = FundingPolicy::new(config.min_balance_lamports);
    if let Err(e) = policy.check(balance_lamports) {
        eprintln!("  Warning: {}", e);
        eprintln!("  Run `devnet-deployer airdrop` until the balance reaches the threshold.");
    } else {
        println!("  Payer balance meets the deploy threshold.");
    }

    // Loader account existence
    let loader = client
        .get_account(&config.loader_program_id)
        .await
        .map_err(|e| {
            anyhow::anyhow!("Loader account not found on cluster: {} ({})", config.loader_program_id, e)
        })?;
    if !loader.executable {
        eprintln!("  Warning: loader account exists but is not marked executable.");
    } else {
        println!("  Loader program is present + executable.");
    }

    println!("> Preflight OK.");
    Ok(())
}
