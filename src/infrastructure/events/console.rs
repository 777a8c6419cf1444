//! Console Event Sink
//!
//! Human-readable status lines. Artifact outcomes go to stdout as
//! `  dry-run: <action>  <label>` or `  <past-tense action>  <label>`;
//! warnings go to stderr.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{DeployEvent, DeployEventSink};

/// Width section rules are padded to
const RULE_WIDTH: usize = 52;

const DRY_RUN_PREFIX: &str = "dry-run: ";

pub struct ConsoleEventSink {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
    sections: Mutex<usize>,
}

impl ConsoleEventSink {
    pub fn new() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }

    /// Sink writing to custom writers (for testing)
    pub fn with_writers<O, E>(out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
            sections: Mutex::new(0),
        }
    }

    fn line(&self, text: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{text}");
            let _ = out.flush();
        }
    }

    fn warn(&self, text: &str) {
        if let Ok(mut err) = self.err.lock() {
            let _ = writeln!(err, "{text}");
            let _ = err.flush();
        }
    }

    fn section(&self, title: &str) {
        let first = match self.sections.lock() {
            Ok(mut count) => {
                *count += 1;
                *count == 1
            }
            Err(_) => false,
        };
        if !first {
            self.line("");
        }
        self.line(&section_rule(title));
    }
}

impl Default for ConsoleEventSink {
    fn default() -> Self {
        Self::new()
    }
}

/// `── Title ─────…` padded to a fixed width
pub fn section_rule(title: &str) -> String {
    let head = format!("── {title} ");
    let used = head.chars().count();
    let fill = RULE_WIDTH.saturating_sub(used).max(2);
    format!("{head}{}", "─".repeat(fill))
}

fn prefix(dry_run: bool) -> &'static str {
    if dry_run {
        DRY_RUN_PREFIX
    } else {
        ""
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::SectionStarted { title } => self.section(&title),

            DeployEvent::Artifact {
                label,
                action,
                dry_run,
            } => {
                self.line(&format!(
                    "  {}{}  {}",
                    prefix(dry_run),
                    action.verb(dry_run),
                    label
                ));
            }

            DeployEvent::SettingsUpToDate { path, dry_run } => {
                self.line(&format!(
                    "  {}up-to-date  {}",
                    prefix(dry_run),
                    path.display()
                ));
            }

            DeployEvent::SettingInjected {
                path,
                setting,
                dry_run,
            } => {
                let verb = if dry_run { "inject" } else { "injected" };
                self.line(&format!(
                    "  {}{verb}  {setting}  → {}",
                    prefix(dry_run),
                    path.display()
                ));
            }

            DeployEvent::SettingsWritten { path, created } => {
                let verb = if created { "created" } else { "merged" };
                self.line(&format!("  settings {verb} → {}", path.display()));
            }

            DeployEvent::Warning { message } => self.warn(&format!("  [warn] {message}")),

            DeployEvent::Note { message } => self.line(&format!("  {message}")),

            // The summary is rendered by the command layer
            DeployEvent::Completed { .. } => {}
        }
    }
}
