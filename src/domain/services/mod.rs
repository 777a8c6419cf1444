//! Domain Services
//!
//! Pure business logic that operates on domain entities. Template and
//! settings handling work on text only; the planner reads through the
//! [`FileSystem`](crate::domain::ports::FileSystem) port.

mod planner;
pub mod settings_merger;
pub mod template;

pub use planner::{DeploymentPlanner, ProjectRequest, UserRequest};
pub use settings_merger::{merge, merge_document, MergeOutcome};
pub use template::{extract_section, extract_target, extract_template, ExtractedTemplate};
