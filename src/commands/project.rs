//! Project command handler
//!
//! Installs the `.rpi` workspace into a repository and, with `--copilot`,
//! the Copilot instructions file and workspace settings.

use std::path::Path;

use anyhow::Result;

use rpi_kit::domain::services::{DeploymentPlanner, ProjectRequest};
use rpi_kit::infrastructure::LocalFs;
use rpi_kit::presentation::output::{render_project_next_steps, render_summary, RunHeader};

use super::{absolute, run_plan, RunContext};

/// Execute the project command
pub fn cmd_project(ctx: &RunContext, target: &Path, copilot: bool) -> Result<()> {
    let request = ProjectRequest {
        root: absolute(target)?,
        copilot,
    };

    let fs = LocalFs::new();
    let plan = DeploymentPlanner::new(&fs, &ctx.kit).plan_project(&request)?;

    let header = RunHeader::new("Project installation")
        .field("Kit root", ctx.kit.root().display().to_string())
        .field("Target", request.root.display().to_string())
        .field("Mode", ctx.mode.as_str())
        .field("Copilot", if copilot { "yes" } else { "no" });
    ctx.print(&header.render(ctx.dry_run));

    let outcome = run_plan(ctx, fs, &plan)?;
    ctx.print(&render_summary(&outcome));
    if !outcome.dry_run {
        ctx.print(&render_project_next_steps(copilot));
    }
    Ok(())
}
