pub mod app;
pub mod domain;
pub mod error;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::{Cluster, DeployEngine, DeployReport, EngineSettings, FundingPolicy};
pub use error::{DeployError, Result};
pub use infra::config::Config;
pub use infra::solana;
