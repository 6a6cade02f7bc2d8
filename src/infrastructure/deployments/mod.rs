//! Deployment repository implementations

mod memory;
mod yaml;

pub use memory::InMemoryDeploymentRepository;
pub use yaml::YamlDeploymentRepository;
