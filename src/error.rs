//! Error types for funding checks, deadlines and deployment.

use solana_client::client_error::ClientError;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Low lamports: payer balance {balance} is below the required {required}")]
    InsufficientFunds { balance: u64, required: u64 },

    #[error("{operation} did not complete within {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    #[error("Failed to read program binary {path:?}: {source}")]
    ReadProgram {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Program binary {path:?} is empty")]
    EmptyProgram { path: PathBuf },

    #[error("RPC error: {0}")]
    Rpc(#[from] Box<ClientError>),

    #[error("Keypair error: {0}")]
    Keypair(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ClientError> for DeployError {
    fn from(err: ClientError) -> Self {
        DeployError::Rpc(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, DeployError>;
