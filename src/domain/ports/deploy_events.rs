//! Deploy Event Port
//!
//! Every decision the engine makes is reported through a [`DeployEventSink`].
//! The console sink turns these into the `<action> <label>` status lines, the
//! JSON sink into NDJSON records.

use std::path::PathBuf;

use crate::domain::policies::ArtifactAction;

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// A group of related artifacts begins
    SectionStarted { title: String },

    /// Conflict policy outcome for one artifact
    Artifact {
        label: String,
        action: ArtifactAction,
        dry_run: bool,
    },

    /// Settings document already contains every required pair
    SettingsUpToDate { path: PathBuf, dry_run: bool },

    /// A required pair is missing and will be (or was) inserted
    SettingInjected {
        path: PathBuf,
        setting: String,
        dry_run: bool,
    },

    /// Settings document written (never emitted in dry-run)
    SettingsWritten { path: PathBuf, created: bool },

    /// Non-fatal problem; the run continues
    Warning { message: String },

    /// Informational line
    Note { message: String },

    /// Run finished without a fatal error
    Completed {
        processed: usize,
        written: usize,
        skipped: usize,
        injected: usize,
        dry_run: bool,
    },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - ConsoleEventSink: status lines on stdout
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait DeployEventSink {
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}

/// Event sink that records every event, for tests
#[cfg(test)]
#[derive(Default)]
pub struct RecordingEventSink {
    pub events: std::cell::RefCell<Vec<DeployEvent>>,
}

#[cfg(test)]
impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<action> <label>` lines for artifact events, in order
    pub fn status_lines(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                DeployEvent::Artifact {
                    label,
                    action,
                    dry_run,
                } => Some(action.status_line(label, *dry_run)),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl DeployEventSink for RecordingEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.events.borrow_mut().push(event);
    }
}
