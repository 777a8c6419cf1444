//! RPI Kit - idempotent installer for RPI workflow artifacts
//!
//! Deploys skills, prompt files, instructions and editor settings from a kit
//! checkout into user and project directories. Existing files are never
//! replaced silently: every write goes through a conflict policy, and
//! settings documents only ever gain the keys they are missing.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployUseCase, RunOutcome};
pub use config::KitConfig;
pub use domain::value_objects::{Agent, DeploymentMode, Tool};
pub use error::{KitError, KitResult};
