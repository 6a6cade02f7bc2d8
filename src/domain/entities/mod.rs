//! Domain Entities
//!
//! Core business objects of the resolution pipeline.

mod bill_of_materials;
mod component;
mod config_document;
mod deployment;

pub use bill_of_materials::BillOfMaterials;
pub use component::{ComponentDescriptor, Specializer};
pub use config_document::ConfigDocument;
pub use deployment::DeploymentConfiguration;
