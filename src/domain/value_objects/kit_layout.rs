//! Kit layout - where sources live inside an rpi-kit checkout

use std::path::{Path, PathBuf};

/// Config file looked up in the kit root
pub const CONFIG_FILE_NAME: &str = "rpi-kit.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitLayout {
    root: PathBuf,
}

impl KitLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `skills/` - one directory per skill
    pub fn skills_dir(&self) -> PathBuf {
        self.root.join("skills")
    }

    fn copilot_dir(&self) -> PathBuf {
        self.root.join("rpi-kit-copilot")
    }

    pub fn prompts_dir(&self) -> PathBuf {
        self.copilot_dir().join(".github").join("prompts")
    }

    pub fn instructions_dir(&self) -> PathBuf {
        self.copilot_dir().join(".github").join("instructions")
    }

    pub fn copilot_template(&self) -> PathBuf {
        self.copilot_dir()
            .join("templates")
            .join("copilot-instructions.rpi-template.md")
    }

    /// Workspace settings shipped for `project --copilot`
    pub fn project_vscode_settings(&self) -> PathBuf {
        self.copilot_dir().join(".vscode").join("settings.json")
    }

    pub fn project_agents_md(&self) -> PathBuf {
        self.root
            .join("rpi-kit-project")
            .join(".rpi")
            .join("AGENTS.md")
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }
}
