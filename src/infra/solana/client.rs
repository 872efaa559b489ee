// Responsible for all communication with the Solana cluster.
#![allow(deprecated)]

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_program::{instruction::Instruction, loader_instruction, system_instruction};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    packet::PACKET_DATA_SIZE,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::{keypair::read_keypair_file, Signer},
    transaction::Transaction,
};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use crate::domain::cluster::Cluster;
use crate::error::{DeployError, Result};

/// Bytes of program data per loader `write` transaction. Leaves room for signatures,
/// account keys and the instruction header inside one packet.
pub const WRITE_CHUNK_SIZE: usize = PACKET_DATA_SIZE - 300;

const AIRDROP_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Reads the payer keypair from a `solana-keygen` JSON file.
pub fn read_payer(path: &Path) -> Result<Keypair> {
    read_keypair_file(path)
        .map_err(|e| DeployError::Keypair(format!("Failed to read keypair file {:?}: {}", path, e)))
}

/// [`Cluster`] over a JSON-RPC connection with `confirmed` commitment.
pub struct RpcCluster {
    client: RpcClient,
}

impl RpcCluster {
    pub fn new(rpc_url: impl Into<String>) -> Self {
        let client = RpcClient::new_with_commitment(rpc_url.into(), CommitmentConfig::confirmed());
        Self { client }
    }

    pub fn client(&self) -> &RpcClient {
        &self.client
    }

    /// Sends one instruction signed by the payer (fee payer) and the program account.
    async fn send(
        &self,
        instruction: Instruction,
        payer: &Keypair,
        program: &Keypair,
    ) -> Result<Signature> {
        let mut transaction = Transaction::new_with_payer(&[instruction], Some(&payer.pubkey()));
        let recent_blockhash = self.client.get_latest_blockhash().await?;
        transaction.sign(&[payer, program], recent_blockhash);
        Ok(self.client.send_and_confirm_transaction(&transaction).await?)
    }
}

#[async_trait]
impl Cluster for RpcCluster {
    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64> {
        Ok(self.client.get_balance(pubkey).await?)
    }

    async fn request_airdrop(&self, pubkey: &Pubkey, lamports: u64) -> Result<Signature> {
        let signature = self.client.request_airdrop(pubkey, lamports).await?;
        // The caller's deadline bounds this loop.
        while !self.client.confirm_transaction(&signature).await? {
            tokio::time::sleep(AIRDROP_POLL_INTERVAL).await;
        }
        Ok(signature)
    }

    async fn load_program(
        &self,
        payer: &Keypair,
        program: &Keypair,
        bytes: &[u8],
        loader_id: &Pubkey,
    ) -> Result<()> {
        let program_id = program.pubkey();

        let existing = self
            .client
            .get_account_with_commitment(&program_id, self.client.commitment())
            .await?
            .value;
        if let Some(account) = existing {
            if account.executable {
                info!("> RpcCluster: {} is already an executable account", program_id);
                return Ok(());
            }
        }

        let lamports = self
            .client
            .get_minimum_balance_for_rent_exemption(bytes.len())
            .await?;
        info!(
            "> RpcCluster: creating program account {} ({} bytes, {} lamports)",
            program_id,
            bytes.len(),
            lamports
        );
        let create = system_instruction::create_account(
            &payer.pubkey(),
            &program_id,
            lamports,
            bytes.len() as u64,
            loader_id,
        );
        self.send(create, payer, program).await?;

        let chunks = bytes.chunks(WRITE_CHUNK_SIZE).count();
        for (i, chunk) in bytes.chunks(WRITE_CHUNK_SIZE).enumerate() {
            let offset = (i * WRITE_CHUNK_SIZE) as u32;
            let write = loader_instruction::write(&program_id, loader_id, offset, chunk.to_vec());
            self.send(write, payer, program).await?;
            debug!("> RpcCluster: wrote chunk {}/{} at offset {}", i + 1, chunks, offset);
        }

        let finalize = loader_instruction::finalize(&program_id, loader_id);
        let signature = self.send(finalize, payer, program).await?;
        info!("> RpcCluster: finalized {} ({})", program_id, signature);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_chunk_fits_in_a_packet() {
        assert_eq!(WRITE_CHUNK_SIZE, 932);
    }

    #[test]
    fn missing_keypair_file_is_a_keypair_error() {
        let err = read_payer(Path::new("/definitely/not/here/id.json")).unwrap_err();
        assert!(matches!(err, DeployError::Keypair(msg) if msg.contains("id.json")));
    }

    #[test]
    fn reads_solana_keygen_json() {
        let payer = Keypair::new();
        let file = tempfile::NamedTempFile::new().unwrap();
        solana_sdk::signer::keypair::write_keypair_file(&payer, file.path()).unwrap();
        let loaded = read_payer(file.path()).unwrap();
        assert_eq!(loaded.pubkey(), payer.pubkey());
    }
}
