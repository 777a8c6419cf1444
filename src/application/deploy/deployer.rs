//! File Deployer
//!
//! Applies the conflict policy to one artifact and, on proceed, writes it:
//! parent directories first, then the bytes, then the source's permission
//! bits. Dry runs stop right after the decision.

use std::path::Path;

use tracing::debug;

use crate::domain::entities::{ArtifactEntry, ArtifactSource, RequiredSettings};
use crate::domain::policies::{ConflictPolicy, Resolution};
use crate::domain::ports::{Confirmer, FileSystem};
use crate::domain::services::settings_merger::{self, MergeOutcome};
use crate::error::{KitError, KitResult};

/// Result of merging required settings into one document
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsReport {
    pub outcome: MergeOutcome,
    /// The document existed before the merge
    pub existed: bool,
    /// The document was written (never in a dry run)
    pub written: bool,
}

pub struct FileDeployer<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
}

impl<'a, F: FileSystem + ?Sized> FileDeployer<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Decide for `entry` and write it when the decision is to proceed.
    ///
    /// A missing file source fails with `SourceNotFound`, in dry runs too.
    pub fn deploy(
        &self,
        entry: &ArtifactEntry,
        policy: &ConflictPolicy,
        confirmer: Option<&dyn Confirmer>,
    ) -> KitResult<Resolution> {
        if let ArtifactSource::File(source) = entry.source() {
            if !self.fs.exists(source) {
                return Err(KitError::SourceNotFound {
                    path: source.clone(),
                });
            }
        }

        let destination = entry.destination();
        let policy = policy.with_mode(entry.effective_mode(policy.mode()));
        let resolution = policy.resolve(self.fs.exists(destination), entry.label(), confirmer)?;

        debug!(
            label = entry.label(),
            action = resolution.action.as_str(),
            dry_run = policy.is_dry_run(),
            "artifact resolved"
        );

        if !resolution.should_write() || policy.is_dry_run() {
            return Ok(resolution);
        }

        self.ensure_parent(destination)?;
        match entry.source() {
            ArtifactSource::File(source) => {
                let content = self.fs.read(source)?;
                let mode = self.fs.mode(source)?;
                self.fs.write_atomic(destination, &content, Some(mode))?;
            }
            ArtifactSource::Content(text) => {
                self.fs.write_atomic(destination, text.as_bytes(), None)?;
            }
        }

        Ok(resolution)
    }

    /// Inject missing `required` pairs into the document at `path`.
    ///
    /// A missing document is treated as `{}`. The document is written once,
    /// and only when something was missing and this is not a dry run.
    pub fn merge_settings_file(
        &self,
        path: &Path,
        required: &RequiredSettings,
        dry_run: bool,
    ) -> KitResult<SettingsReport> {
        let existed = self.fs.exists(path);
        let existing = if existed {
            Some(self.fs.read_to_string(path)?)
        } else {
            None
        };

        let outcome = settings_merger::merge_document(existing.as_deref(), required);
        let written = !outcome.is_unchanged() && !dry_run;

        debug!(
            path = %path.display(),
            missing = outcome.inserted.len(),
            dry_run,
            "settings merged"
        );

        if written {
            self.ensure_parent(path)?;
            self.fs.write_atomic(path, outcome.text.as_bytes(), None)?;
        }

        Ok(SettingsReport {
            outcome,
            existed,
            written,
        })
    }

    fn ensure_parent(&self, path: &Path) -> KitResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.fs.create_dir_all(parent),
            _ => Ok(()),
        }
    }
}
