//! Configuration types

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

use crate::application::MissingSourcePolicy;
use crate::domain::entities::RequiredSettings;
use crate::domain::value_objects::{Agent, DeploymentMode};

/// Contents of `rpi-kit.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KitConfig {
    #[serde(default)]
    pub install: InstallConfig,

    #[serde(default)]
    pub vscode: VscodeConfig,
}

impl KitConfig {
    /// Built-in VS Code settings followed by the configured extras
    pub fn required_settings(&self) -> RequiredSettings {
        let mut settings = RequiredSettings::vscode_defaults();
        for (key, value) in &self.vscode.settings {
            settings = settings.with(key.clone(), value.clone());
        }
        settings
    }

    /// Conflict mode when no flag is given
    pub fn mode(&self) -> DeploymentMode {
        self.install.mode.unwrap_or_default()
    }

    /// How a missing kit source is handled during a run
    pub fn missing_source(&self) -> MissingSourcePolicy {
        self.install.missing_source.unwrap_or_default()
    }

    /// Agents for `rpi-kit user` when `--agents` is not given
    pub fn agents(&self) -> Vec<Agent> {
        self.install
            .agents
            .clone()
            .unwrap_or_else(|| Agent::ALL.to_vec())
    }
}

/// `[install]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallConfig {
    #[serde(default, deserialize_with = "deserialize_mode")]
    pub mode: Option<DeploymentMode>,

    #[serde(default, deserialize_with = "deserialize_agents")]
    pub agents: Option<Vec<Agent>>,

    /// `abort` (default) or `warn`
    #[serde(default)]
    pub missing_source: Option<MissingSourcePolicy>,
}

/// `[vscode]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VscodeConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Extra required settings, merged after the built-in ones
    #[serde(default)]
    pub settings: BTreeMap<String, serde_json::Value>,
}

impl Default for VscodeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            settings: BTreeMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Mode names are matched case-insensitively in config files
fn deserialize_mode<'de, D>(deserializer: D) -> Result<Option<DeploymentMode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    raw.map(|s| s.to_lowercase().parse().map_err(serde::de::Error::custom))
        .transpose()
}

fn deserialize_agents<'de, D>(deserializer: D) -> Result<Option<Vec<Agent>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<String>>::deserialize(deserializer)?;
    raw.map(|list| {
        list.iter()
            .map(|s| s.trim().parse().map_err(serde::de::Error::custom))
            .collect()
    })
    .transpose()
}

/// Non-fatal configuration warning surfaced to CLI users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key (last path segment)
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line, if the key could be located
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}
