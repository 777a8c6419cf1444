//! Tool and agent identities
//!
//! Both map an assistant name to a user-level skills directory. They are kept
//! apart because the two installers disagree on where Copilot skills live:
//! the skills installer shares `~/.agents/skills` with Codex, the user
//! installer uses Copilot's own `~/.copilot/skills`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KitError;

/// Tool selected by `rpi-kit skills --tool`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// GitHub Copilot
    Copilot,
    /// OpenAI Codex CLI
    Codex,
    /// Google Antigravity
    Antigravity,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Copilot, Tool::Codex, Tool::Antigravity];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Copilot => "copilot",
            Tool::Codex => "codex",
            Tool::Antigravity => "antigravity",
        }
    }

    /// Skills directory for this tool under `home`
    pub fn skills_dir(&self, home: &Path) -> PathBuf {
        match self {
            Tool::Antigravity => home.join(".gemini").join("antigravity").join("skills"),
            Tool::Copilot | Tool::Codex => default_skills_dir(home),
        }
    }
}

/// Destination used by the skills installer when neither `--tool` nor
/// `--target` is given
pub fn default_skills_dir(home: &Path) -> PathBuf {
    home.join(".agents").join("skills")
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Agent selected by `rpi-kit user --agents`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Agent {
    Copilot,
    Codex,
    Claude,
}

impl Agent {
    pub const ALL: [Agent; 3] = [Agent::Copilot, Agent::Codex, Agent::Claude];

    pub fn as_str(&self) -> &'static str {
        match self {
            Agent::Copilot => "copilot",
            Agent::Codex => "codex",
            Agent::Claude => "claude",
        }
    }

    pub fn skills_dir(&self, home: &Path) -> PathBuf {
        match self {
            Agent::Copilot => home.join(".copilot").join("skills"),
            Agent::Codex => home.join(".agents").join("skills"),
            Agent::Claude => home.join(".claude").join("skills"),
        }
    }

    /// Parse a comma-separated agent list, ignoring blanks.
    pub fn parse_list(list: &str) -> Result<Vec<Agent>, KitError> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Agent {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|agent| agent.as_str() == lowered)
            .ok_or_else(|| KitError::configuration(format!("Unknown agent ID: {s}")))
    }
}
