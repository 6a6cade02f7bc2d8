//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod deployment_reference;
mod generation;
mod storage_key;

pub use deployment_reference::DeploymentReference;
pub use generation::{Generation, StoredObjectMetadata};
pub use storage_key::{bom_key, StorageKey};
