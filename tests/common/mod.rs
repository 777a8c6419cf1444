//! Common test utilities for rpi-kit integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated kit, home and workspace directories
//! - Assertion macros: `assert_installed!`, `assert_output_contains!`
//! - Fixtures: Reusable kit content constants

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
