//! One-shot operations: each call opens its own RPC connection and loads the payer
//! from the configured keypair file.

use crate::domain::deploy::{DeployEngine, DeployReport, EngineSettings};
use crate::error::Result;
use crate::infra::config::Config;
use crate::infra::solana::{read_payer, RpcCluster};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Builds an engine for `config`: fresh RPC connection, payer read from disk.
pub fn engine_from_config(config: &Config) -> Result<DeployEngine> {
    let payer = read_payer(&config.payer_keypair_path)?;
    let cluster = Arc::new(RpcCluster::new(config.rpc_url.clone()));
    let engine = DeployEngine::new(cluster, payer, EngineSettings::from(config));
    info!(
        "> Actions: payer {} on {}",
        engine.payer_pubkey(),
        config.rpc_url
    );
    Ok(engine)
}

/// Airdrops the configured amount to the configured payer. Returns the new balance.
pub async fn request_lamports(config: &Config) -> Result<u64> {
    engine_from_config(config)?.request_lamports().await
}

/// Deploys the program binary at `path` using the configured payer.
pub async fn deploy(config: &Config, path: impl AsRef<Path>) -> Result<DeployReport> {
    info!("> Actions: Let's go!");
    engine_from_config(config)?.deploy(path).await
}

pub async fn balance(config: &Config) -> Result<u64> {
    engine_from_config(config)?.balance().await
}
