//! Domain Entities
//!
//! - `ArtifactEntry` - One file (or in-memory blob) to deploy
//! - `DeploymentPlan` - Ordered artifacts and settings merges for one run
//! - `RequiredSettings` - Key/value pairs a settings document must contain

mod artifact;
mod plan;
mod settings;

pub use artifact::{ArtifactEntry, ArtifactSource};
pub use plan::{DeploymentPlan, PlanItem, SettingsTarget};
pub use settings::{RequiredSetting, RequiredSettings};
