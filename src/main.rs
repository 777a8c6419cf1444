//! RPI Kit CLI
//!
//! Usage: rpi-kit [OPTIONS] <COMMAND>
//!
//! Commands:
//!   skills   Install skills into one tool's skills directory
//!   user     Install skills for every agent plus VS Code artifacts
//!   project  Install the .rpi workspace into a repository

use std::process::exit;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rpi_kit::presentation::{Cli, Commands};

mod commands;

use commands::RunContext;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(error) = run(cli) {
        eprintln!("Error: {error}");
        exit(1);
    }
}

/// `RUST_LOG` wins; otherwise warn, `-v` info, `-vv` debug
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry().with(layer).with(filter).init();
}

fn run(cli: Cli) -> Result<()> {
    let ctx = RunContext::resolve(&cli)?;

    match cli.command {
        Commands::Skills { tool, target } => commands::cmd_skills(&ctx, tool, target),
        Commands::User { agents, no_vscode } => {
            commands::cmd_user(&ctx, agents.as_deref(), no_vscode)
        }
        Commands::Project { target, copilot } => commands::cmd_project(&ctx, &target, copilot),
    }
}
