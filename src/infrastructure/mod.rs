//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `store/` - Object store implementations (InMemory, Local)
//! - `deployments/` - Deployment repository implementations (InMemory, Yaml)
//! - `components` - Registry of built-in component descriptors
//! - `fs` - Local output writing

pub mod components;
pub mod deployments;
pub mod fs;
pub mod store;

// Re-export for convenience
pub use components::{all_components, get_component};
pub use deployments::{InMemoryDeploymentRepository, YamlDeploymentRepository};
pub use fs::LocalFs;
pub use store::{InMemoryObjectStore, LocalObjectStore};
