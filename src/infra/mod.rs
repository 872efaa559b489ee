pub mod config;
pub mod logging;
pub mod solana;

pub use config::Config;
