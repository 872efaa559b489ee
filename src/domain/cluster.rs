//! The network seam: everything the deploy engine needs from a cluster.

use crate::error::Result;
use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};

/// Operations the engine performs against a cluster.
///
/// The production implementation is [`crate::infra::solana::RpcCluster`]; tests plug in an
/// in-memory double.
#[async_trait]
pub trait Cluster: Send + Sync {
    /// Current balance of `pubkey` in lamports.
    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64>;

    /// Requests `lamports` of test funds for `pubkey`. Returns once the airdrop is confirmed.
    async fn request_airdrop(&self, pubkey: &Pubkey, lamports: u64) -> Result<Signature>;

    /// Creates `program` owned by `loader_id`, writes `bytes` into it and finalizes it.
    async fn load_program(
        &self,
        payer: &Keypair,
        program: &Keypair,
        bytes: &[u8],
        loader_id: &Pubkey,
    ) -> Result<()>;
}
