//! Command-line entrypoint: airdrop, balance, deploy and the deploy page server.

use clap::{Parser, Subcommand};
use devnet_deployer::app::actions;
use devnet_deployer::infra::logging;
use devnet_deployer::transport::http::{self, AppState};
use devnet_deployer::Config;
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "devnet-deployer")]
#[command(about = "Deploy compiled programs to a Solana test cluster")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request test funds for the payer
    Airdrop,

    /// Print the payer balance
    Balance,

    /// Deploy a compiled program binary
    Deploy {
        /// Path to the program binary (.so)
        path: PathBuf,
    },

    /// Run the deploy page and API server
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    });

    let config = Config::from_env()?;

    match cli.command {
        Commands::Airdrop => {
            let balance = actions::request_lamports(&config).await?;
            println!("{}", balance);
        }
        Commands::Balance => {
            let balance = actions::balance(&config).await?;
            println!("{}", balance);
        }
        Commands::Deploy { path } => {
            let report = actions::deploy(&config, &path).await?;
            println!("{}", serde_json::to_string_pretty(&report.to_json())?);
        }
        Commands::Serve => {
            let engine = actions::engine_from_config(&config)?;
            info!("> Engine ready (rpc {})", config.rpc_url);
            http::serve(AppState::new(engine), config.bind_addr).await?;
        }
    }

    Ok(())
}
