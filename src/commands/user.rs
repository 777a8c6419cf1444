//! User command handler
//!
//! Installs skills for each agent, then VS Code settings, prompts and
//! instructions for the user directory and every profile.

use anyhow::Result;

use rpi_kit::domain::services::{DeploymentPlanner, UserRequest};
use rpi_kit::domain::value_objects::Agent;
use rpi_kit::infrastructure::{resolve_home_dirs, LocalFs};
use rpi_kit::presentation::output::{render_summary, RunHeader};

use super::{run_plan, RunContext};

/// Execute the user command
pub fn cmd_user(ctx: &RunContext, agents: Option<&str>, no_vscode: bool) -> Result<()> {
    let agents = match agents.map(Agent::parse_list).transpose()? {
        Some(parsed) if !parsed.is_empty() => parsed,
        _ => ctx.config.agents(),
    };
    let vscode = !no_vscode && ctx.config.vscode.enabled;
    let homes = resolve_home_dirs()?;

    let request = UserRequest {
        agents,
        vscode,
        settings: ctx.config.required_settings(),
    };

    let fs = LocalFs::new();
    let plan = DeploymentPlanner::new(&fs, &ctx.kit).plan_user(&homes, &request)?;

    let agent_names: Vec<&str> = request.agents.iter().map(Agent::as_str).collect();
    let mut header = RunHeader::new("User-level installation")
        .field("Kit root", ctx.kit.root().display().to_string())
        .field("Agents", agent_names.join(", "))
        .field("Mode", ctx.mode.as_str());
    if vscode {
        header = header.field("VS Code", homes.vscode_user().display().to_string());
    }
    ctx.print(&header.render(ctx.dry_run));

    let outcome = run_plan(ctx, fs, &plan)?;
    ctx.print(&render_summary(&outcome));
    Ok(())
}
