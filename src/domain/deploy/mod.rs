//! Program deployment: funding check, program keypair, binary load.

pub mod engine;
pub mod report;

pub use engine::{DeployEngine, EngineSettings};
pub use report::DeployReport;
