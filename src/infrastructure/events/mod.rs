//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - ConsoleEventSink: human-readable status lines
//! - JsonEventSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::{section_rule, ConsoleEventSink};
pub use json::JsonEventSink;
