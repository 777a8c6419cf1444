//! Skills command handler
//!
//! Copies `<kit>/skills/**` into one tool's skills directory.

use std::path::PathBuf;

use anyhow::Result;

use rpi_kit::domain::services::DeploymentPlanner;
use rpi_kit::domain::value_objects::{default_skills_dir, Tool};
use rpi_kit::infrastructure::{resolve_home_dirs, LocalFs};
use rpi_kit::presentation::output::{render_skills_summary, RunHeader};
use rpi_kit::KitError;

use super::{absolute, run_plan, RunContext};

/// Execute the skills command
pub fn cmd_skills(ctx: &RunContext, tool: Option<Tool>, target: Option<PathBuf>) -> Result<()> {
    if tool.is_some() && target.is_some() {
        return Err(
            KitError::configuration("Do not combine --tool with --target. Choose one.").into(),
        );
    }

    let target = match target {
        Some(target) => absolute(&target)?,
        None => {
            let homes = resolve_home_dirs()?;
            match tool {
                Some(tool) => tool.skills_dir(homes.home()),
                None => default_skills_dir(homes.home()),
            }
        }
    };

    let fs = LocalFs::new();
    let plan = DeploymentPlanner::new(&fs, &ctx.kit).plan_skills(&target)?;

    let mut header = RunHeader::new("Installation")
        .field("Source", ctx.kit.skills_dir().display().to_string());
    if let Some(tool) = tool {
        header = header.field("Tool", tool.as_str());
    }
    header = header
        .field("Target", target.display().to_string())
        .field("Mode", ctx.mode.as_str());
    ctx.print(&header.render(ctx.dry_run));

    let outcome = run_plan(ctx, fs, &plan)?;
    ctx.print(&render_skills_summary(&outcome, &target));
    Ok(())
}
