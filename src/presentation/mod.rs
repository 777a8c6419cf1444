//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Run headers and summaries around the event stream
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `output` - Header and summary rendering

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands};
pub use output::RunHeader;
