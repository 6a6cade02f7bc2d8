//! Presentation Layer
//!
//! Wiring and output shapes shared by the CLI.

pub mod factory;
pub mod output;
