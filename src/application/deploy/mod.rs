//! Deploy Module
//!
//! Executes deployment plans.
//!
//! ## Structure
//!
//! - `options` - Run configuration (`DeployOptions`, `MissingSourcePolicy`)
//! - `deployer` - One artifact or settings document (`FileDeployer`)
//! - `result` - Run summary (`RunOutcome`)
//! - `use_case` - Plan execution and event reporting (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use rpi_kit::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(LocalFs::new());
//! let outcome = use_case.execute(&plan, &DeployOptions::new(mode), None)?;
//! ```

mod deployer;
mod options;
mod result;
mod use_case;

pub use deployer::{FileDeployer, SettingsReport};
pub use options::{DeployOptions, MissingSourcePolicy};
pub use result::RunOutcome;
pub use use_case::DeployUseCase;
