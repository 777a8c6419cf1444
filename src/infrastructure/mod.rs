//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and home directory resolution
//! - `conflict/` - Terminal confirmer for prompt mode
//! - `events/` - Console and JSON event sinks

pub mod conflict;
pub mod events;
pub mod fs;

// Re-export for convenience
pub use conflict::TerminalConfirmer;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::{resolve_home_dirs, LocalFs};
