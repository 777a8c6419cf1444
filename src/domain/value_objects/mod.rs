//! Domain Value Objects
//!
//! Immutable value types that select where and how artifacts are deployed.

mod home_dirs;
mod kit_layout;
mod mode;
mod tool;

pub use home_dirs::HomeDirs;
pub use kit_layout::{KitLayout, CONFIG_FILE_NAME};
pub use mode::DeploymentMode;
pub use tool::{default_skills_dir, Agent, Tool};
