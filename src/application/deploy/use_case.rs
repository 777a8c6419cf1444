//! Deploy Use Case
//!
//! Runs a [`DeploymentPlan`] item by item:
//! 1. artifacts go through the conflict policy and the file deployer
//! 2. settings documents get missing pairs injected, written once each
//! 3. sections, notes and warnings are forwarded to the event sink
//!
//! The first fatal error stops the run. Artifacts written before it stay on
//! disk.

use tracing::{info, warn};

use crate::domain::entities::{DeploymentPlan, PlanItem, SettingsTarget};
use crate::domain::policies::ConflictPolicy;
use crate::domain::ports::{Confirmer, DeployEvent, DeployEventSink, FileSystem, NoopEventSink};
use crate::error::{KitError, KitResult};

use super::deployer::FileDeployer;
use super::options::{DeployOptions, MissingSourcePolicy};
use super::result::RunOutcome;

/// Deploy use case, parameterized by the file system port
pub struct DeployUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
}

impl<FS> DeployUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    pub fn file_system(&self) -> &FS {
        &self.file_system
    }

    /// Run `plan` without reporting events
    pub fn execute(
        &self,
        plan: &DeploymentPlan,
        options: &DeployOptions,
        confirmer: Option<&dyn Confirmer>,
    ) -> KitResult<RunOutcome> {
        self.execute_with_events(plan, options, confirmer, &NoopEventSink)
    }

    /// Run `plan`, reporting every decision to `events`.
    ///
    /// `confirmer` is the interactive capability; without it, prompt mode
    /// fails on the first existing destination.
    pub fn execute_with_events(
        &self,
        plan: &DeploymentPlan,
        options: &DeployOptions,
        confirmer: Option<&dyn Confirmer>,
        events: &dyn DeployEventSink,
    ) -> KitResult<RunOutcome> {
        let policy = ConflictPolicy::new(options.mode, options.dry_run);
        let deployer = FileDeployer::new(&self.file_system);
        let mut outcome = RunOutcome::new(options.mode, options.dry_run);

        info!(
            mode = %options.mode,
            dry_run = options.dry_run,
            artifacts = plan.artifact_count(),
            "starting deployment"
        );

        for item in plan.items() {
            match item {
                PlanItem::Section(title) => events.on_event(DeployEvent::SectionStarted {
                    title: title.clone(),
                }),

                PlanItem::Note(message) => events.on_event(DeployEvent::Note {
                    message: message.clone(),
                }),

                PlanItem::Warning(message) => {
                    warn!("{message}");
                    events.on_event(DeployEvent::Warning {
                        message: message.clone(),
                    });
                }

                PlanItem::Artifact(entry) => match deployer.deploy(entry, &policy, confirmer) {
                    Ok(resolution) => {
                        outcome.record(resolution.action);
                        events.on_event(DeployEvent::Artifact {
                            label: entry.label().to_string(),
                            action: resolution.action,
                            dry_run: options.dry_run,
                        });
                    }
                    Err(KitError::SourceNotFound { path })
                        if options.missing_source == MissingSourcePolicy::Warn =>
                    {
                        warn!(path = %path.display(), "source not found, skipping");
                        outcome.record_missing_source();
                        events.on_event(DeployEvent::Warning {
                            message: format!("source not found: {}", path.display()),
                        });
                    }
                    Err(e) => return Err(e),
                },

                PlanItem::Settings(target) => {
                    outcome.injected += self.merge_settings(&deployer, target, options, events)?;
                }
            }
        }

        events.on_event(DeployEvent::Completed {
            processed: outcome.processed,
            written: outcome.written,
            skipped: outcome.skipped,
            injected: outcome.injected,
            dry_run: options.dry_run,
        });

        info!(
            processed = outcome.processed,
            written = outcome.written,
            skipped = outcome.skipped,
            injected = outcome.injected,
            "deployment finished"
        );

        Ok(outcome)
    }

    fn merge_settings(
        &self,
        deployer: &FileDeployer<'_, FS>,
        target: &SettingsTarget,
        options: &DeployOptions,
        events: &dyn DeployEventSink,
    ) -> KitResult<usize> {
        let report = deployer.merge_settings_file(&target.path, &target.required, options.dry_run)?;

        if report.outcome.is_unchanged() {
            events.on_event(DeployEvent::SettingsUpToDate {
                path: target.path.clone(),
                dry_run: options.dry_run,
            });
            return Ok(0);
        }

        for setting in &report.outcome.inserted {
            events.on_event(DeployEvent::SettingInjected {
                path: target.path.clone(),
                setting: setting.render(),
                dry_run: options.dry_run,
            });
        }

        if report.written {
            events.on_event(DeployEvent::SettingsWritten {
                path: target.path.clone(),
                created: !report.existed,
            });
        }

        Ok(report.outcome.inserted.len())
    }
}
