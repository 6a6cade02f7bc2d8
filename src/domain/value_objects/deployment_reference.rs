//! Deployment Reference Value Object

use std::fmt;

/// Names one deployment inside the deployment configuration.
///
/// Opaque to the pipeline: it is only handed back to the deployment repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeploymentReference(String);

impl DeploymentReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeploymentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeploymentReference {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
