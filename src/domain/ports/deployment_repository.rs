//! DeploymentRepository port - abstracts where deployment configurations live.

use std::path::PathBuf;

use crate::domain::entities::DeploymentConfiguration;
use crate::domain::value_objects::DeploymentReference;

/// Source of deployment configurations.
///
/// Must be side-effect free: the assembler reads the same deployment more than
/// once per generated file.
pub trait DeploymentRepository: Send + Sync {
    /// Deployment selected as current by the user
    fn current_deployment(&self) -> Result<DeploymentReference, DeploymentError>;

    /// Configuration of the deployment named by `reference`
    fn deployment_configuration(
        &self,
        reference: &DeploymentReference,
    ) -> Result<DeploymentConfiguration, DeploymentError>;
}

impl<T: DeploymentRepository + ?Sized> DeploymentRepository for std::sync::Arc<T> {
    fn current_deployment(&self) -> Result<DeploymentReference, DeploymentError> {
        (**self).current_deployment()
    }

    fn deployment_configuration(
        &self,
        reference: &DeploymentReference,
    ) -> Result<DeploymentConfiguration, DeploymentError> {
        (**self).deployment_configuration(reference)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("failed to read deployment configuration {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid deployment configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("deployment '{name}' not found\n  → Fix: check the deployment name or add it to deploymentConfigurations")]
    NotFound { name: String },

    #[error("no current deployment is selected\n  → Fix: set currentDeployment or pass --deployment")]
    NoCurrentDeployment,
}
