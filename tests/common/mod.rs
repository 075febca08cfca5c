//! Common test utilities for Bazaar CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and home directories plus a CLI runner
//! - Fixtures: reusable category trees and basket scripts

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
