//! Custom assertion macros for integration tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}

/// Assert that a file exists at `$root/$path`.
///
/// # Example
/// ```ignore
/// assert_installed!(env.home.path(), ".agents/skills/rpi-workflow/SKILL.md");
/// ```
#[macro_export]
macro_rules! assert_installed {
    ($root:expr, $path:expr) => {
        let full_path = $root.join($path);
        assert!(
            full_path.exists(),
            "Expected file at '{}', but it doesn't exist.\n\
             Files found:\n  {}",
            full_path.display(),
            $crate::common::list_all_files($root).join("\n  ")
        );
    };
}

/// Assert that nothing exists at `$root/$path`.
#[macro_export]
macro_rules! assert_not_installed {
    ($root:expr, $path:expr) => {
        let full_path = $root.join($path);
        assert!(
            !full_path.exists(),
            "Expected '{}' to NOT exist, but it does.",
            full_path.display()
        );
    };
}

/// Assert that output (stdout or stderr) contains expected pattern.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "Installation complete");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}
