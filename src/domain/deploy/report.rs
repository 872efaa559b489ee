use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use solana_sdk::pubkey::Pubkey;

/// Outcome of a successful deployment.
#[derive(Debug, Clone)]
pub struct DeployReport {
    /// Address of the freshly generated program account.
    pub program_id: Pubkey,
    pub payer: Pubkey,
    pub loader_id: Pubkey,
    /// Size of the loaded binary in bytes.
    pub program_len: usize,
    /// Hex-encoded SHA-256 of the loaded binary.
    pub program_sha256: String,
    /// Payer balance observed by the funding check.
    pub balance_before: u64,
    pub deployed_at: DateTime<Utc>,
}

impl DeployReport {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "program_id": self.program_id.to_string(),
            "payer": self.payer.to_string(),
            "loader_id": self.loader_id.to_string(),
            "program_len": self.program_len,
            "program_sha256": self.program_sha256,
            "balance_before": self.balance_before,
            "deployed_at": self.deployed_at.to_rfc3339(),
        })
    }
}

pub fn program_digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
