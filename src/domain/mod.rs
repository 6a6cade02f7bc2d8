//! Domain Layer
//!
//! This is the core of bomcfg - the version-pinned resolution rules without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (BillOfMaterials, DeploymentConfiguration,
//!   ComponentDescriptor, ConfigDocument)
//! - `value_objects/` - Immutable value types (StorageKey, Generation, DeploymentReference)
//! - `services/` - Pure domain services (artifact locator, edit banner)
//! - `ports/` - Interface definitions for infrastructure (object store, deployments)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
