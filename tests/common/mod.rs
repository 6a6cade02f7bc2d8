//! Common test utilities for bomcfg integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated environment with a local object store, a deployment
//!   file and a bomcfg.toml pointing at both
//! - Fixtures: Reusable BOM, deployment and profile content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
