//! Stateful deploy client: one cluster handle plus one payer.
//!
//! Each network await runs under a deadline so a hung RPC call surfaces as
//! [`DeployError::Timeout`] instead of blocking the caller forever.

use crate::domain::cluster::Cluster;
use crate::domain::deploy::report::{program_digest, DeployReport};
use crate::domain::funding::FundingPolicy;
use crate::error::{DeployError, Result};
use crate::infra::config::{self, Config};
use chrono::Utc;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Tunables of a [`DeployEngine`].
#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub min_balance: u64,
    pub airdrop_lamports: u64,
    pub loader_id: Pubkey,
    /// Deadline for balance reads and airdrops.
    pub rpc_timeout: Duration,
    /// Deadline for the whole program load (account creation, writes, finalize).
    pub deploy_timeout: Duration,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            min_balance: config::DEFAULT_MIN_BALANCE_LAMPORTS,
            airdrop_lamports: config::DEFAULT_AIRDROP_LAMPORTS,
            loader_id: config::default_loader_program_id(),
            rpc_timeout: Duration::from_secs(config::DEFAULT_RPC_TIMEOUT_SECS),
            deploy_timeout: Duration::from_secs(config::DEFAULT_DEPLOY_TIMEOUT_SECS),
        }
    }
}

impl From<&Config> for EngineSettings {
    fn from(config: &Config) -> Self {
        Self {
            min_balance: config.min_balance_lamports,
            airdrop_lamports: config.airdrop_lamports,
            loader_id: config.loader_program_id,
            rpc_timeout: config.rpc_timeout,
            deploy_timeout: config.deploy_timeout,
        }
    }
}

pub struct DeployEngine {
    cluster: Arc<dyn Cluster>,
    payer: Keypair,
    policy: FundingPolicy,
    settings: EngineSettings,
}

impl DeployEngine {
    pub fn new(cluster: Arc<dyn Cluster>, payer: Keypair, settings: EngineSettings) -> Self {
        Self {
            cluster,
            payer,
            policy: FundingPolicy::new(settings.min_balance),
            settings,
        }
    }

    /// Engine with a freshly generated payer. It must be funded through
    /// [`DeployEngine::request_lamports`] before it can deploy anything.
    pub fn ephemeral(cluster: Arc<dyn Cluster>, settings: EngineSettings) -> Self {
        let payer = Keypair::new();
        info!("> DeployEngine: generated ephemeral payer {}", payer.pubkey());
        Self::new(cluster, payer, settings)
    }

    pub fn payer_pubkey(&self) -> Pubkey {
        self.payer.pubkey()
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub async fn balance(&self) -> Result<u64> {
        let payer = self.payer.pubkey();
        with_deadline(
            "balance query",
            self.settings.rpc_timeout,
            self.cluster.get_balance(&payer),
        )
        .await
    }

    /// Airdrops the configured amount to the payer and returns the balance afterwards.
    pub async fn request_lamports(&self) -> Result<u64> {
        let payer = self.payer.pubkey();
        let lamports = self.settings.airdrop_lamports;
        info!("> DeployEngine: requesting airdrop of {} lamports for {}", lamports, payer);

        let signature = with_deadline(
            "airdrop",
            self.settings.rpc_timeout,
            self.cluster.request_airdrop(&payer, lamports),
        )
        .await?;
        debug!("> DeployEngine: airdrop signature {}", signature);

        let balance = self.balance().await?;
        info!("> DeployEngine: payer balance is now {} lamports", balance);
        Ok(balance)
    }

    /// Deploys the binary at `path` into a new program account.
    ///
    /// Nothing happens past the balance read if the payer is below the funding threshold:
    /// no program keypair is generated, the file is not read and the loader is not called.
    pub async fn deploy(&self, path: impl AsRef<Path>) -> Result<DeployReport> {
        let path = path.as_ref();
        let payer = self.payer.pubkey();
        info!("> DeployEngine: deploying {:?} with payer {}", path, payer);

        let balance = self.balance().await?;
        if let Err(e) = self.policy.check(balance) {
            warn!(
                "> DeployEngine: Low lamports ({} < {}). You first get sols.",
                balance, self.policy.min_balance
            );
            return Err(e);
        }

        info!("> DeployEngine: Create Program Account");
        let program_account = Keypair::new();
        let program_id = program_account.pubkey();
        info!("> DeployEngine: program id {}", program_id);

        let program = tokio::fs::read(path)
            .await
            .map_err(|source| DeployError::ReadProgram {
                path: path.to_path_buf(),
                source,
            })?;
        if program.is_empty() {
            return Err(DeployError::EmptyProgram {
                path: path.to_path_buf(),
            });
        }
        let program_sha256 = program_digest(&program);
        info!(
            "> DeployEngine: program binary is {} bytes (sha256 {})",
            program.len(),
            program_sha256
        );

        with_deadline(
            "program load",
            self.settings.deploy_timeout,
            self.cluster.load_program(
                &self.payer,
                &program_account,
                &program,
                &self.settings.loader_id,
            ),
        )
        .await?;
        info!("> DeployEngine: program {} deployed", program_id);

        Ok(DeployReport {
            program_id,
            payer,
            loader_id: self.settings.loader_id,
            program_len: program.len(),
            program_sha256,
            balance_before: balance,
            deployed_at: Utc::now(),
        })
    }
}

/// Runs `fut` with a deadline; elapsing drops the future and yields [`DeployError::Timeout`].
pub async fn with_deadline<T, F>(operation: &'static str, after: Duration, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(after, fut).await {
        Ok(result) => result,
        Err(_) => {
            warn!("> DeployEngine: {} timed out after {:?}", operation, after);
            Err(DeployError::Timeout { operation, after })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn deadline_passes_through_fast_results() {
        let v = with_deadline("noop", Duration::from_secs(1), async { Ok(7u64) })
            .await
            .unwrap();
        assert_eq!(v, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_elapses_on_hung_future() {
        let err = with_deadline("hang", Duration::from_secs(5), async {
            std::future::pending::<Result<()>>().await
        })
        .await
        .unwrap_err();
        match err {
            DeployError::Timeout { operation, after } => {
                assert_eq!(operation, "hang");
                assert_eq!(after, Duration::from_secs(5));
            }
            other => panic!("expected Timeout, got {:?}", other),
        }
    }
}
