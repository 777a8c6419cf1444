//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{DeployEvent, DeployEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Installer name carried in every record
    command: &'static str,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let command = self.command;
        let json = match event {
            DeployEvent::SectionStarted { title } => {
                serde_json::json!({
                    "event": "section",
                    "command": command,
                    "title": title,
                })
            }

            DeployEvent::Artifact {
                label,
                action,
                dry_run,
            } => {
                serde_json::json!({
                    "event": "artifact",
                    "command": command,
                    "label": label,
                    "action": action,
                    "dry_run": dry_run,
                })
            }

            DeployEvent::SettingsUpToDate { path, dry_run } => {
                serde_json::json!({
                    "event": "settings_up_to_date",
                    "command": command,
                    "path": path.display().to_string(),
                    "dry_run": dry_run,
                })
            }

            DeployEvent::SettingInjected {
                path,
                setting,
                dry_run,
            } => {
                serde_json::json!({
                    "event": "setting_injected",
                    "command": command,
                    "path": path.display().to_string(),
                    "setting": setting,
                    "dry_run": dry_run,
                })
            }

            DeployEvent::SettingsWritten { path, created } => {
                serde_json::json!({
                    "event": "settings_written",
                    "command": command,
                    "path": path.display().to_string(),
                    "created": created,
                })
            }

            DeployEvent::Warning { message } => {
                serde_json::json!({
                    "event": "warning",
                    "command": command,
                    "message": message,
                })
            }

            DeployEvent::Note { message } => {
                serde_json::json!({
                    "event": "note",
                    "command": command,
                    "message": message,
                })
            }

            DeployEvent::Completed {
                processed,
                written,
                skipped,
                injected,
                dry_run,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": command,
                    "status": "success",
                    "processed": processed,
                    "written": written,
                    "skipped": skipped,
                    "injected": injected,
                    "dry_run": dry_run,
                })
            }
        };

        self.write_event(json);
    }
}
