//! bomcfg - version-pinned service configuration generator
//!
//! A deployment declares one version. The bill of materials (BOM) published
//! for that version pins every component to a component version, and each
//! component version has a base config stored under
//! `<component>/<componentVersion>/<configFileName>`. bomcfg resolves that
//! chain, fetches the base config, lets the component specialize it and
//! prepends a "generated, do not edit" banner.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{fetch_bom, resolve_version, ConfigAssembler};
pub use config::Config;
pub use domain::entities::{
    BillOfMaterials, ComponentDescriptor, ConfigDocument, DeploymentConfiguration, Specializer,
};
pub use domain::ports::{DeploymentError, DeploymentRepository, ObjectStore, ObjectStoreError};
pub use domain::services::{edit_warning, locate};
pub use domain::value_objects::{bom_key, DeploymentReference, Generation, StorageKey};
pub use error::{BomcfgError, BomcfgResult};
pub use infrastructure::{all_components, get_component};
