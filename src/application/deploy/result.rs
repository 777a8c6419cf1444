//! Deploy Result
//!
//! Observational summary of one run. Nothing here is persisted.

use crate::domain::policies::ArtifactAction;
use crate::domain::value_objects::DeploymentMode;

/// Outcome of one deployment run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub mode: DeploymentMode,
    pub dry_run: bool,
    /// Artifacts the conflict policy was consulted for (or whose source was missing)
    pub processed: usize,
    /// Artifacts written, or that would be written in a dry run
    pub written: usize,
    /// Artifacts left untouched
    pub skipped: usize,
    /// Settings pairs injected (or that would be) across all documents
    pub injected: usize,
}

impl RunOutcome {
    pub fn new(mode: DeploymentMode, dry_run: bool) -> Self {
        Self {
            mode,
            dry_run,
            processed: 0,
            written: 0,
            skipped: 0,
            injected: 0,
        }
    }

    pub(crate) fn record(&mut self, action: ArtifactAction) {
        self.processed += 1;
        if action.writes() {
            self.written += 1;
        } else {
            self.skipped += 1;
        }
    }

    pub(crate) fn record_missing_source(&mut self) {
        self.processed += 1;
        self.skipped += 1;
    }

    pub fn has_changes(&self) -> bool {
        !self.dry_run && (self.written > 0 || self.injected > 0)
    }
}
