//! Application Layer
//!
//! Use cases that orchestrate the resolution flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `resolve_version` - Read the declared version of a deployment
//! - `fetch_bom` - Retrieve and parse the BOM for a version
//! - `ConfigAssembler` - Full pipeline from deployment to generated config file

pub mod assembler;
pub mod bom_fetcher;
mod object_reader;
pub mod version_resolver;

pub use assembler::ConfigAssembler;
pub use bom_fetcher::fetch_bom;
pub use version_resolver::resolve_version;
