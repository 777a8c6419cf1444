//! Conflict Policy
//!
//! Decides, for one destination, whether a deployment writes or leaves the
//! existing file alone.
//!
//! | destination | mode      | apply                 | dry-run            |
//! |-------------|-----------|-----------------------|--------------------|
//! | missing     | any       | create                | report `create`    |
//! | exists      | skip      | skip                  | report `skip`      |
//! | exists      | overwrite | overwrite             | report `overwrite` |
//! | exists      | prompt    | ask, overwrite on yes | report `prompt`    |
//!
//! Dry-run never prompts, so a dry-run `prompt` is always a skip.

use std::fmt;

use serde::Serialize;

use crate::domain::ports::Confirmer;
use crate::domain::value_objects::DeploymentMode;
use crate::error::{KitError, KitResult};

/// Whether the deployer may touch the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Skip,
}

/// What happened (or would happen) to one artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactAction {
    Create,
    Overwrite,
    Skip,
    /// Dry-run only: apply mode would ask
    Prompt,
    /// Apply mode: the user answered no
    Declined,
}

impl ArtifactAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactAction::Create => "create",
            ArtifactAction::Overwrite => "overwrite",
            ArtifactAction::Skip => "skip",
            ArtifactAction::Prompt => "prompt",
            ArtifactAction::Declined => "declined",
        }
    }

    /// Verb for status lines: imperative in dry-run, past tense otherwise
    pub fn verb(&self, dry_run: bool) -> &'static str {
        if dry_run {
            return self.as_str();
        }
        match self {
            ArtifactAction::Create => "created",
            ArtifactAction::Overwrite => "overwritten",
            ArtifactAction::Skip => "skipped",
            ArtifactAction::Prompt => "prompt",
            ArtifactAction::Declined => "declined",
        }
    }

    /// `<action> <label>`
    pub fn status_line(&self, label: &str, dry_run: bool) -> String {
        format!("{} {}", self.verb(dry_run), label)
    }

    pub fn writes(&self) -> bool {
        matches!(self, ArtifactAction::Create | ArtifactAction::Overwrite)
    }
}

impl fmt::Display for ArtifactAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the policy for one artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub action: ArtifactAction,
    pub decision: Decision,
}

impl Resolution {
    fn proceed(action: ArtifactAction) -> Self {
        Self {
            action,
            decision: Decision::Proceed,
        }
    }

    fn skip(action: ArtifactAction) -> Self {
        Self {
            action,
            decision: Decision::Skip,
        }
    }

    pub fn should_write(&self) -> bool {
        self.decision == Decision::Proceed
    }
}

/// Conflict policy for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictPolicy {
    mode: DeploymentMode,
    dry_run: bool,
}

impl ConflictPolicy {
    pub fn new(mode: DeploymentMode, dry_run: bool) -> Self {
        Self { mode, dry_run }
    }

    pub fn mode(&self) -> DeploymentMode {
        self.mode
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Same run, different mode (per-artifact overrides)
    pub fn with_mode(&self, mode: DeploymentMode) -> Self {
        Self {
            mode,
            dry_run: self.dry_run,
        }
    }

    /// Decide for one destination.
    ///
    /// `confirmer` is only consulted for an existing destination in prompt
    /// mode outside dry-run; its absence there is a `NonInteractive` error.
    pub fn resolve(
        &self,
        destination_exists: bool,
        label: &str,
        confirmer: Option<&dyn Confirmer>,
    ) -> KitResult<Resolution> {
        if !destination_exists {
            return Ok(Resolution::proceed(ArtifactAction::Create));
        }

        match self.mode {
            DeploymentMode::Skip => Ok(Resolution::skip(ArtifactAction::Skip)),
            DeploymentMode::Overwrite => Ok(Resolution::proceed(ArtifactAction::Overwrite)),
            DeploymentMode::Prompt if self.dry_run => {
                Ok(Resolution::skip(ArtifactAction::Prompt))
            }
            DeploymentMode::Prompt => {
                let confirmer = confirmer.ok_or(KitError::NonInteractive)?;
                if confirmer.confirm(&format!("Overwrite {label}?"))? {
                    Ok(Resolution::proceed(ArtifactAction::Overwrite))
                } else {
                    Ok(Resolution::skip(ArtifactAction::Declined))
                }
            }
        }
    }
}
