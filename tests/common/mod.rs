//! In-memory cluster used by the integration tests. No network access.

#![allow(dead_code)]

use async_trait::async_trait;
use devnet_deployer::{Cluster, DeployEngine, DeployError, EngineSettings, Result};
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct LoadCall {
    pub payer: Pubkey,
    pub program_id: Pubkey,
    pub bytes: Vec<u8>,
    pub loader_id: Pubkey,
}

#[derive(Default)]
pub struct MockCluster {
    balances: Mutex<HashMap<Pubkey, u64>>,
    airdrops: Mutex<Vec<(Pubkey, u64)>>,
    loads: Mutex<Vec<LoadCall>>,
    balance_reads: AtomicUsize,
    /// Balance queries never resolve.
    hang_balance: bool,
    /// Program loads never resolve.
    hang_load: bool,
    /// Program loads fail with an RPC error.
    reject_load: bool,
}

impl MockCluster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hanging_balance() -> Self {
        Self {
            hang_balance: true,
            ..Self::default()
        }
    }

    pub fn hanging_load() -> Self {
        Self {
            hang_load: true,
            ..Self::default()
        }
    }

    pub fn rejecting_load() -> Self {
        Self {
            reject_load: true,
            ..Self::default()
        }
    }

    pub fn with_balance(self, pubkey: Pubkey, lamports: u64) -> Self {
        self.balances.lock().unwrap().insert(pubkey, lamports);
        self
    }

    pub fn set_balance(&self, pubkey: Pubkey, lamports: u64) {
        self.balances.lock().unwrap().insert(pubkey, lamports);
    }

    pub fn loads(&self) -> Vec<LoadCall> {
        self.loads.lock().unwrap().clone()
    }

    pub fn airdrops(&self) -> Vec<(Pubkey, u64)> {
        self.airdrops.lock().unwrap().clone()
    }

    pub fn balance_reads(&self) -> usize {
        self.balance_reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Cluster for MockCluster {
    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64> {
        if self.hang_balance {
            std::future::pending::<()>().await;
        }
        self.balance_reads.fetch_add(1, Ordering::SeqCst);
        Ok(*self.balances.lock().unwrap().get(pubkey).unwrap_or(&0))
    }

    async fn request_airdrop(&self, pubkey: &Pubkey, lamports: u64) -> Result<Signature> {
        self.airdrops.lock().unwrap().push((*pubkey, lamports));
        *self.balances.lock().unwrap().entry(*pubkey).or_insert(0) += lamports;
        Ok(Signature::new_unique())
    }

    async fn load_program(
        &self,
        payer: &Keypair,
        program: &Keypair,
        bytes: &[u8],
        loader_id: &Pubkey,
    ) -> Result<()> {
        if self.hang_load {
            std::future::pending::<()>().await;
        }
        self.loads.lock().unwrap().push(LoadCall {
            payer: payer.pubkey(),
            program_id: program.pubkey(),
            bytes: bytes.to_vec(),
            loader_id: *loader_id,
        });
        if self.reject_load {
            let err = ClientError::from(ClientErrorKind::Custom(
                "loader rejected program".to_string(),
            ));
            return Err(DeployError::from(err));
        }
        Ok(())
    }
}

pub const THRESHOLD: u64 = 9_000_000_000;
pub const AIRDROP: u64 = 3_000_000_000;

pub fn settings() -> EngineSettings {
    EngineSettings {
        min_balance: THRESHOLD,
        airdrop_lamports: AIRDROP,
        rpc_timeout: Duration::from_secs(5),
        deploy_timeout: Duration::from_secs(30),
        ..EngineSettings::default()
    }
}

/// Engine with a fresh payer whose balance is preset to `balance`.
pub fn engine_with_balance(mut cluster: MockCluster, balance: u64) -> (DeployEngine, Arc<MockCluster>) {
    let payer = Keypair::new();
    cluster = cluster.with_balance(payer.pubkey(), balance);
    let cluster = Arc::new(cluster);
    let engine = DeployEngine::new(cluster.clone(), payer, settings());
    (engine, cluster)
}

pub fn program_file(bytes: &[u8]) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}
