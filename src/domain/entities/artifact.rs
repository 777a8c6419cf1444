//! ArtifactEntry entity - a single deployable file
//!
//! Entries are created by a planner, consumed once by the deploy use case and
//! never persisted.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::DeploymentMode;

/// Where the bytes of an artifact come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactSource {
    /// Copy this file (content and permission bits)
    File(PathBuf),
    /// Write this text (template bodies, placeholders)
    Content(String),
}

/// A source paired with its destination and a label for status lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactEntry {
    source: ArtifactSource,
    destination: PathBuf,
    label: String,
    mode_override: Option<DeploymentMode>,
}

impl ArtifactEntry {
    /// Entry copied from a file in the kit
    pub fn file(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: ArtifactSource::File(source.into()),
            destination: destination.into(),
            label: label.into(),
            mode_override: None,
        }
    }

    /// Entry whose content is already in memory
    pub fn content(
        content: impl Into<String>,
        destination: impl Into<PathBuf>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: ArtifactSource::Content(content.into()),
            destination: destination.into(),
            label: label.into(),
            mode_override: None,
        }
    }

    /// Never replace an existing destination, whatever the run's mode is.
    pub fn create_only(mut self) -> Self {
        self.mode_override = Some(DeploymentMode::Skip);
        self
    }

    pub fn source(&self) -> &ArtifactSource {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Mode that applies to this entry in a run started with `run_mode`
    pub fn effective_mode(&self, run_mode: DeploymentMode) -> DeploymentMode {
        self.mode_override.unwrap_or(run_mode)
    }
}
