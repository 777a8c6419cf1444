//! Domain Policies
//!
//! Business rules applied uniformly to every write.

mod conflict_policy;

pub use conflict_policy::{ArtifactAction, ConflictPolicy, Decision, Resolution};
