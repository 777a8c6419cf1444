//! Output Rendering
//!
//! Run headers and closing summaries around the status lines the console
//! event sink prints. JSON runs print none of this.

use std::fmt::Write as _;
use std::path::Path;

use crate::application::RunOutcome;

/// `RPI Kit — <title>` followed by aligned `key : value` lines
#[derive(Debug, Clone, Default)]
pub struct RunHeader {
    title: String,
    fields: Vec<(&'static str, String)>,
}

impl RunHeader {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((key, value.into()));
        self
    }

    pub fn render(&self, dry_run: bool) -> String {
        let mut out = format!("RPI Kit — {}", self.title);
        if dry_run {
            out.push_str(" (dry-run)");
        }
        out.push('\n');

        let width = self.fields.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        for (key, value) in &self.fields {
            let _ = writeln!(out, "  {key:<width$} : {value}");
        }
        out.push('\n');
        out
    }
}

/// Closing line of `rpi-kit skills`
pub fn render_skills_summary(outcome: &RunOutcome, target: &Path) -> String {
    if outcome.dry_run {
        format!(
            "\nDry-run complete. {} file(s) would be processed.\n",
            outcome.processed
        )
    } else {
        format!(
            "\nInstallation complete. {} file(s) processed → {}\n",
            outcome.processed,
            target.display()
        )
    }
}

/// Closing line of `rpi-kit user` and `rpi-kit project`
pub fn render_summary(outcome: &RunOutcome) -> String {
    if outcome.dry_run {
        "\nDry-run complete.\n".to_string()
    } else {
        "\nInstallation complete.\n".to_string()
    }
}

/// Follow-up hints printed after a real project installation
pub fn render_project_next_steps(copilot: bool) -> String {
    let mut out = String::from("\nNext steps:\n");
    out.push_str("  1. Run  rpi-kit user  to install skills user-wide (once).\n");
    out.push_str("  2. Use  bash .rpi/scripts -> rpi-new.sh  or the rpi-workflow skill to start.\n");
    if copilot {
        out.push_str("  3. Open VS Code and run 'Copilot Chat: Show Customization Diagnostics'\n");
        out.push_str("     to verify the RPI instructions and skills are loaded.\n");
    }
    out
}
