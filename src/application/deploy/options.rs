//! Deploy Options
//!
//! Configuration types for running a deployment plan.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DeploymentMode;

/// What to do when an artifact's source file is missing from the kit
///
/// Set from `missing_source` under `[install]` in `rpi-kit.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingSourcePolicy {
    /// Stop the run (a missing source is a packaging defect)
    #[default]
    Abort,
    /// Warn, count the artifact as skipped and continue
    Warn,
}

/// Options for the deploy use case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeployOptions {
    /// Conflict mode for existing destinations
    pub mode: DeploymentMode,
    /// Report decisions without touching the filesystem
    pub dry_run: bool,
    pub missing_source: MissingSourcePolicy,
}

impl DeployOptions {
    pub fn new(mode: DeploymentMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_missing_source(mut self, policy: MissingSourcePolicy) -> Self {
        self.missing_source = policy;
        self
    }
}
