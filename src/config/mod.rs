//! Configuration for rpi-kit
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (`RPI_KIT_*`)
//! 3. Kit config (`<kit root>/rpi-kit.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{load_or_default, load_with_warnings, with_env_overrides, AGENTS_VAR, MODE_VAR};
pub use types::{ConfigWarning, InstallConfig, KitConfig, VscodeConfig};
