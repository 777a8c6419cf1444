//! Domain Layer
//!
//! The deployment engine itself: conflict policy, template extraction and
//! settings merging, plus the ports the engine talks through.
//!
//! ## Structure
//!
//! - `entities/` - Artifacts and required settings
//! - `value_objects/` - Deployment mode, tools and agents
//! - `services/` - Template extraction, settings merge, planning
//! - `policies/` - Conflict policy
//! - `ports/` - File system, confirmer and event sink traits
//!
//! Nothing in here reads the environment. Base directories are passed in.

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
