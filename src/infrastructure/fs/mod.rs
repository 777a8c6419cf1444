//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;

pub use home::{kit_home_dir, resolve_home_dirs, vscode_user_dir, TEST_HOME_VAR, VSCODE_USER_DIR_VAR};
pub use local::LocalFs;
