//! Deployment plan - what one run will touch, in order
//!
//! Order is part of the contract: it is the order status lines are emitted
//! in, so planners must produce it deterministically.

use std::path::{Path, PathBuf};

use super::artifact::ArtifactEntry;
use super::settings::RequiredSettings;

/// A settings document that must end up containing `required`
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsTarget {
    pub path: PathBuf,
    pub required: RequiredSettings,
}

/// One step of a run
#[derive(Debug, Clone, PartialEq)]
pub enum PlanItem {
    /// Start of a named group of steps (e.g. "Skills", "VS Code settings")
    Section(String),
    /// Copy or write one artifact under the conflict policy
    Artifact(ArtifactEntry),
    /// Inject missing keys into a settings document
    Settings(SettingsTarget),
    /// Non-fatal planning problem, e.g. an optional source directory is absent
    Warning(String),
    /// Informational line with no side effect
    Note(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeploymentPlan {
    items: Vec<PlanItem>,
}

impl DeploymentPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&mut self, title: impl Into<String>) {
        self.items.push(PlanItem::Section(title.into()));
    }

    pub fn artifact(&mut self, entry: ArtifactEntry) {
        self.items.push(PlanItem::Artifact(entry));
    }

    pub fn settings(&mut self, path: impl AsRef<Path>, required: RequiredSettings) {
        self.items.push(PlanItem::Settings(SettingsTarget {
            path: path.as_ref().to_path_buf(),
            required,
        }));
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.items.push(PlanItem::Warning(message.into()));
    }

    pub fn note(&mut self, message: impl Into<String>) {
        self.items.push(PlanItem::Note(message.into()));
    }

    pub fn items(&self) -> &[PlanItem] {
        &self.items
    }

    /// Artifacts in plan order
    pub fn artifacts(&self) -> impl Iterator<Item = &ArtifactEntry> {
        self.items.iter().filter_map(|item| match item {
            PlanItem::Artifact(entry) => Some(entry),
            _ => None,
        })
    }

    pub fn artifact_count(&self) -> usize {
        self.artifacts().count()
    }
}
