//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --mode, --dry-run, --kit-root) are inherited by all subcommands
//! - `--mode` is optional here so the environment and config file can supply it

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::{DeploymentMode, Tool};

/// RPI Kit - installs RPI workflow skills, prompts and editor settings
#[derive(Parser, Debug)]
#[command(name = "rpi-kit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of status lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// What to do with files that already exist [default: skip]
    #[arg(long, global = true, value_enum)]
    pub mode: Option<DeploymentMode>,

    /// Show what would be done without touching the file system
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Root of the rpi-kit checkout to install from
    #[arg(long, global = true, default_value = ".")]
    pub kit_root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install skills into one tool's skills directory
    Skills {
        /// Tool whose skills directory receives the skills
        #[arg(long, value_enum, ignore_case = true)]
        tool: Option<Tool>,

        /// Explicit destination directory
        #[arg(long)]
        target: Option<PathBuf>,
    },

    /// Install skills for every agent plus VS Code prompts, instructions and settings
    User {
        /// Comma-separated agent IDs (copilot, codex, claude)
        #[arg(long)]
        agents: Option<String>,

        /// Skip VS Code settings, prompts and instructions
        #[arg(long)]
        no_vscode: bool,
    },

    /// Install the .rpi workspace (and optionally Copilot files) into a repository
    Project {
        /// Repository root
        #[arg(long, default_value = ".")]
        target: PathBuf,

        /// Also install Copilot instructions and workspace settings
        #[arg(long)]
        copilot: bool,
    },
}

impl Cli {
    /// Name used in JSON event records
    pub fn command_name(&self) -> &'static str {
        match self.command {
            Commands::Skills { .. } => "skills",
            Commands::User { .. } => "user",
            Commands::Project { .. } => "project",
        }
    }
}
