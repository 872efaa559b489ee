pub mod cluster;
pub mod deploy;
pub mod funding;

pub use cluster::Cluster;
pub use deploy::{DeployEngine, DeployReport, EngineSettings};
pub use funding::FundingPolicy;
