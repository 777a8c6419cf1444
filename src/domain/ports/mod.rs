//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod confirmer;
pub mod deploy_events;
pub mod file_system;

pub use confirmer::Confirmer;
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use file_system::{FileMode, FileSystem};
