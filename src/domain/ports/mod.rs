//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deployment_repository;
pub mod object_store;

pub use deployment_repository::{DeploymentError, DeploymentRepository};
pub use object_store::{ObjectStore, ObjectStoreError, ReadMode};
