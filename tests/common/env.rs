//! Test environment for isolated rpi-kit runs.
//!
//! Provides `TestEnv` - temp directories for the kit checkout, the home
//! directory, the VS Code user directory and a working directory, plus
//! helpers to run the `rpi-kit` binary against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

use super::fixtures;

/// Result of running an rpi-kit command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Non-empty stdout lines, trimmed
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect()
    }
}

/// Isolated environment: nothing outside these temp dirs is touched
pub struct TestEnv {
    pub kit: TempDir,
    pub home: TempDir,
    pub vscode: TempDir,
    pub work: TempDir,
}

impl TestEnv {
    /// Empty kit, home and workspace
    pub fn empty() -> Self {
        Self {
            kit: TempDir::new().expect("Failed to create kit dir"),
            home: TempDir::new().expect("Failed to create home dir"),
            vscode: TempDir::new().expect("Failed to create vscode dir"),
            work: TempDir::new().expect("Failed to create work dir"),
        }
    }

    /// Kit populated with the standard fixture layout
    pub fn with_kit() -> Self {
        let env = Self::empty();
        env.write_kit_file("skills/rpi-workflow/SKILL.md", fixtures::SKILL_MD);
        env.write_kit_file("skills/rpi-workflow/scripts/rpi-new.sh", fixtures::SCRIPT_SH);
        env.write_kit_file(
            "rpi-kit-copilot/.github/prompts/rpikit.plan.prompt.md",
            fixtures::PROMPT_MD,
        );
        env.write_kit_file("rpi-kit-copilot/.github/prompts/USAGE.md", "# Usage\n");
        env.write_kit_file("rpi-kit-copilot/.github/prompts/notes.md", "ignored\n");
        env.write_kit_file(
            "rpi-kit-copilot/.github/instructions/rpi.instructions.md",
            fixtures::INSTRUCTIONS_MD,
        );
        env.write_kit_file(
            "rpi-kit-copilot/templates/copilot-instructions.rpi-template.md",
            fixtures::COPILOT_TEMPLATE,
        );
        env.write_kit_file("rpi-kit-copilot/.vscode/settings.json", fixtures::WORKSPACE_SETTINGS);
        env.write_kit_file("rpi-kit-project/.rpi/AGENTS.md", fixtures::AGENTS_MD);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let script = env.kit_path("skills/rpi-workflow/scripts/rpi-new.sh");
            std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to chmod script");
        }

        env
    }

    pub fn kit_path(&self, relative: &str) -> PathBuf {
        self.kit.path().join(relative)
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home.path().join(relative)
    }

    pub fn vscode_path(&self, relative: &str) -> PathBuf {
        self.vscode.path().join(relative)
    }

    pub fn work_path(&self, relative: &str) -> PathBuf {
        self.work.path().join(relative)
    }

    pub fn write_kit_file(&self, relative: &str, content: &str) {
        write_file(&self.kit_path(relative), content);
    }

    pub fn write_home_file(&self, relative: &str, content: &str) {
        write_file(&self.home_path(relative), content);
    }

    pub fn write_vscode_file(&self, relative: &str, content: &str) {
        write_file(&self.vscode_path(relative), content);
    }

    pub fn write_work_file(&self, relative: &str, content: &str) {
        write_file(&self.work_path(relative), content);
    }

    /// Run rpi-kit from the workspace with `--kit-root` pointing at the kit
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_rpi-kit"));
        cmd.current_dir(self.work.path())
            .arg("--kit-root")
            .arg(self.kit.path())
            .args(args)
            .env("RPI_KIT_TEST_HOME", self.home.path())
            .env("RPI_KIT_VSCODE_USER_DIR", self.vscode.path())
            .env_remove("RPI_KIT_MODE")
            .env_remove("RPI_KIT_AGENTS")
            .env_remove("RUST_LOG")
            .stdin(Stdio::null());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute rpi-kit");
        output_to_result(output)
    }

    /// Every file under the home, VS Code and work directories with its bytes
    pub fn snapshot_destinations(&self) -> Vec<(PathBuf, Vec<u8>)> {
        let mut files = Vec::new();
        for root in [self.home.path(), self.vscode.path(), self.work.path()] {
            for path in super::list_all_files(root) {
                let bytes = std::fs::read(&path).expect("Failed to read file");
                files.push((PathBuf::from(path), bytes));
            }
        }
        files.sort();
        files
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
