//! Home and VS Code directory resolution with test isolation support.
//!
//! On Windows, `dirs::home_dir()` uses the Windows system API
//! (`SHGetKnownFolderPath`) rather than environment variables, so setting
//! `HOME` or `USERPROFILE` in tests has no effect there. `kit_home_dir()`
//! checks `RPI_KIT_TEST_HOME` first and only then asks the system.
//!
//! These are the only environment lookups for destinations. The CLI resolves
//! them once into a [`HomeDirs`] and passes that down.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::HomeDirs;
use crate::error::{KitError, KitResult};

/// Overrides the home directory (integration tests, sandboxes)
pub const TEST_HOME_VAR: &str = "RPI_KIT_TEST_HOME";

/// Overrides the VS Code `User` directory
pub const VSCODE_USER_DIR_VAR: &str = "RPI_KIT_VSCODE_USER_DIR";

/// Home directory used for every user-level destination
pub fn kit_home_dir() -> Option<PathBuf> {
    non_empty_var(TEST_HOME_VAR)
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// VS Code `User` directory for `home`
pub fn vscode_user_dir(home: &Path) -> PathBuf {
    if let Some(dir) = non_empty_var(VSCODE_USER_DIR_VAR) {
        return PathBuf::from(dir);
    }
    platform_config_dir(home).join("Code").join("User")
}

/// Resolve both base directories
pub fn resolve_home_dirs() -> KitResult<HomeDirs> {
    let home = kit_home_dir()
        .ok_or_else(|| KitError::configuration("Could not determine home directory"))?;
    let vscode_user = vscode_user_dir(&home);
    Ok(HomeDirs::new(home, vscode_user))
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(target_os = "macos")]
fn platform_config_dir(home: &Path) -> PathBuf {
    home.join("Library").join("Application Support")
}

#[cfg(windows)]
fn platform_config_dir(home: &Path) -> PathBuf {
    non_empty_var("APPDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| home.join("AppData").join("Roaming"))
}

#[cfg(not(any(target_os = "macos", windows)))]
fn platform_config_dir(home: &Path) -> PathBuf {
    non_empty_var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| home.join(".config"))
}
