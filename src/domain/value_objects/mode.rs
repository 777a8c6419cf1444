//! Deployment Mode Value Object
//!
//! Selects how an existing destination file is treated. Fixed for a run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KitError;

/// Conflict resolution mode for existing destination files
///
/// - `Skip`: keep the existing file (default)
/// - `Overwrite`: replace the existing file
/// - `Prompt`: ask on the terminal, replace only on "y"
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    #[default]
    Skip,
    Overwrite,
    Prompt,
}

impl DeploymentMode {
    pub const ALL: [DeploymentMode; 3] = [
        DeploymentMode::Skip,
        DeploymentMode::Overwrite,
        DeploymentMode::Prompt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentMode::Skip => "skip",
            DeploymentMode::Overwrite => "overwrite",
            DeploymentMode::Prompt => "prompt",
        }
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentMode {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|m| m.as_str()).collect();
                KitError::configuration(format!(
                    "Invalid --mode: {s}. Valid values: {}",
                    valid.join(", ")
                ))
            })
    }
}
