//! Use Case Factory
//!
//! Creates the assembler with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::ConfigAssembler;
use crate::config::Config;
use crate::infrastructure::{LocalObjectStore, YamlDeploymentRepository};

/// Type alias for the concrete ConfigAssembler used by the CLI
pub type ConcreteConfigAssembler = ConfigAssembler<YamlDeploymentRepository, LocalObjectStore>;

/// Create an assembler reading deployments and profiles from the configured locations
pub fn create_assembler(config: &Config) -> ConcreteConfigAssembler {
    let deployments = YamlDeploymentRepository::new(config.deployments_file());
    let store = LocalObjectStore::new(config.store_root());

    ConfigAssembler::new(deployments, store, config.store.bucket.clone())
}
