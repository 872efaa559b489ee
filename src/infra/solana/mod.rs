pub mod client;

pub use client::{read_payer, RpcCluster};
