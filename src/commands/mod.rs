//! Command handlers
//!
//! Each installer resolves its settings, builds a plan and hands it to
//! [`run_plan`], which picks the event sink and the confirmer.

mod project;
mod skills;
mod user;

pub use project::cmd_project;
pub use skills::cmd_skills;
pub use user::cmd_user;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use rpi_kit::application::{DeployOptions, DeployUseCase, RunOutcome};
use rpi_kit::config::{self, KitConfig};
use rpi_kit::domain::entities::DeploymentPlan;
use rpi_kit::domain::ports::{Confirmer, DeployEventSink};
use rpi_kit::domain::value_objects::{DeploymentMode, KitLayout};
use rpi_kit::infrastructure::{ConsoleEventSink, JsonEventSink, LocalFs, TerminalConfirmer};
use rpi_kit::presentation::Cli;

/// Settings shared by every installer, resolved once per invocation
pub struct RunContext {
    pub kit: KitLayout,
    pub config: KitConfig,
    pub mode: DeploymentMode,
    pub dry_run: bool,
    pub json: bool,
    pub command: &'static str,
}

impl RunContext {
    /// Resolve flag > environment > config file > default
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let kit_root = absolute(&cli.kit_root)?;
        let (config, warnings) = config::load_or_default(&kit_root)?;

        for warning in &warnings {
            warn!("{warning}");
            if !cli.json {
                eprintln!("Warning: {warning}");
            }
        }

        let mode = cli.mode.unwrap_or_else(|| config.mode());

        Ok(Self {
            kit: KitLayout::new(kit_root),
            config,
            mode,
            dry_run: cli.dry_run,
            json: cli.json,
            command: cli.command_name(),
        })
    }

    /// Print a header or summary block; JSON runs stay machine-readable
    pub fn print(&self, text: &str) {
        if !self.json {
            print!("{text}");
        }
    }

    pub fn options(&self) -> DeployOptions {
        DeployOptions::new(self.mode)
            .with_dry_run(self.dry_run)
            .with_missing_source(self.config.missing_source())
    }
}

/// Execute `plan` on the local file system
pub fn run_plan(ctx: &RunContext, fs: LocalFs, plan: &DeploymentPlan) -> Result<RunOutcome> {
    let sink: Box<dyn DeployEventSink> = if ctx.json {
        Box::new(JsonEventSink::stdout(ctx.command))
    } else {
        Box::new(ConsoleEventSink::new())
    };

    let terminal = TerminalConfirmer::detect();
    let confirmer = terminal.as_ref().map(|c| c as &dyn Confirmer);

    let use_case = DeployUseCase::new(fs);
    let outcome = use_case.execute_with_events(plan, &ctx.options(), confirmer, sink.as_ref())?;
    Ok(outcome)
}

/// `path` resolved against the current directory
pub fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    Ok(normalize(&cwd.join(path)))
}

/// Drop `.` components so headers show `/repo` rather than `/repo/.`
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .collect()
}
