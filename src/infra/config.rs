//! Centralized configuration (environment variables + defaults).

use crate::error::{DeployError, Result};
use solana_sdk::pubkey::Pubkey;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
pub const DEFAULT_PAYER_KEYPAIR_PATH: &str = "~/.config/solana/id.json";
/// Minimum payer balance (lamports) before a deployment is attempted.
pub const DEFAULT_MIN_BALANCE_LAMPORTS: u64 = 9_000_000_000;
/// Lamports requested per airdrop.
pub const DEFAULT_AIRDROP_LAMPORTS: u64 = 3_000_000_000;
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_DEPLOY_TIMEOUT_SECS: u64 = 600;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub payer_keypair_path: PathBuf,
    pub min_balance_lamports: u64,
    pub airdrop_lamports: u64,
    pub rpc_timeout: Duration,
    pub deploy_timeout: Duration,
    pub bind_addr: SocketAddr,
    pub loader_program_id: Pubkey,
}

impl Config {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Missing keys fall back to defaults,
    /// present-but-invalid keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rpc_url = lookup("SOLANA_RPC_URL").unwrap_or_else(|| DEFAULT_RPC_URL.to_string());
        let payer_keypair_path = lookup("PAYER_KEYPAIR_PATH")
            .unwrap_or_else(|| DEFAULT_PAYER_KEYPAIR_PATH.to_string());
        let payer_keypair_path = PathBuf::from(shellexpand::tilde(&payer_keypair_path).into_owned());

        let min_balance_lamports = parse_or(
            &lookup,
            "DEPLOY_MIN_BALANCE_LAMPORTS",
            DEFAULT_MIN_BALANCE_LAMPORTS,
        )?;
        let airdrop_lamports = parse_or(&lookup, "AIRDROP_LAMPORTS", DEFAULT_AIRDROP_LAMPORTS)?;
        let rpc_timeout_secs = parse_or(&lookup, "RPC_TIMEOUT_SECS", DEFAULT_RPC_TIMEOUT_SECS)?;
        let deploy_timeout_secs =
            parse_or(&lookup, "DEPLOY_TIMEOUT_SECS", DEFAULT_DEPLOY_TIMEOUT_SECS)?;
        if rpc_timeout_secs == 0 || deploy_timeout_secs == 0 {
            return Err(DeployError::Config(
                "RPC_TIMEOUT_SECS and DEPLOY_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = SocketAddr::from_str(&bind_addr)
            .map_err(|e| DeployError::Config(format!("BIND_ADDR is not a socket address: {}", e)))?;

        let loader_program_id = match lookup("LOADER_PROGRAM_ID") {
            Some(s) => Pubkey::from_str(&s).map_err(|e| {
                DeployError::Config(format!("LOADER_PROGRAM_ID is not a valid pubkey: {}", e))
            })?,
            None => default_loader_program_id(),
        };

        Ok(Self {
            rpc_url,
            payer_keypair_path,
            min_balance_lamports,
            airdrop_lamports,
            rpc_timeout: Duration::from_secs(rpc_timeout_secs),
            deploy_timeout: Duration::from_secs(deploy_timeout_secs),
            bind_addr,
            loader_program_id,
        })
    }
}

#[allow(deprecated)]
pub fn default_loader_program_id() -> Pubkey {
    solana_program::bpf_loader::id()
}

fn parse_or<F>(lookup: &F, key: &str, default: u64) -> Result<u64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(v) => v
            .trim()
            .parse::<u64>()
            .map_err(|_| DeployError::Config(format!("{} must be a valid u64 (got {:?})", key, v))),
        None => Ok(default),
    }
}
