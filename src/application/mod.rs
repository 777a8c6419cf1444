//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Runs a deployment plan (conflict policy, writes, settings merges)

pub mod deploy;

pub use deploy::{
    DeployOptions, DeployUseCase, FileDeployer, MissingSourcePolicy, RunOutcome, SettingsReport,
};
