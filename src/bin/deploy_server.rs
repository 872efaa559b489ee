// src/bin/deploy_server.rs

use devnet_deployer::app::actions;
use devnet_deployer::infra::logging;
use devnet_deployer::infra::solana::RpcCluster;
use devnet_deployer::transport::http::{self, AppState};
use devnet_deployer::{Config, DeployEngine, EngineSettings};
use std::sync::Arc;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init(Level::INFO);
    let config = Config::from_env()?;

    // `--ephemeral` generates a throwaway payer instead of reading PAYER_KEYPAIR_PATH.
    let ephemeral = std::env::args().skip(1).any(|a| a == "--ephemeral");

    info!("> Initializing DeployEngine...");
    let engine = if ephemeral {
        let cluster = Arc::new(RpcCluster::new(config.rpc_url.clone()));
        DeployEngine::ephemeral(cluster, EngineSettings::from(&config))
    } else {
        actions::engine_from_config(&config)?
    };
    info!(
        "> DeployEngine initialized (rpc {}, deploy threshold {} lamports, airdrop {} lamports).",
        config.rpc_url, config.min_balance_lamports, config.airdrop_lamports
    );

    http::serve(AppState::new(engine), config.bind_addr).await
}
