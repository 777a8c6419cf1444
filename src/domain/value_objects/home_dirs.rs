//! Resolved base directories
//!
//! The CLI resolves these once (home directory, VS Code user-data directory)
//! and hands them to planners, so the domain never inspects the environment.

use std::path::{Path, PathBuf};

/// Base directories that user-level destinations are computed from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeDirs {
    home: PathBuf,
    vscode_user: PathBuf,
}

impl HomeDirs {
    pub fn new(home: impl Into<PathBuf>, vscode_user: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            vscode_user: vscode_user.into(),
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// VS Code `User` directory (holds `settings.json`, `prompts/`, `profiles/`)
    pub fn vscode_user(&self) -> &Path {
        &self.vscode_user
    }
}
