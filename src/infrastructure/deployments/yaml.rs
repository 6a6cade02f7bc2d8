//! YAML deployment repository
//!
//! Reads the user's deployment file on every call:
//!
//! ```yaml
//! currentDeployment: default
//! deploymentConfigurations:
//!   - name: default
//!     version: 1.10.0
//! ```
//!
//! When `currentDeployment` is missing and exactly one deployment exists, that
//! deployment is current.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::DeploymentConfiguration;
use crate::domain::ports::{DeploymentError, DeploymentRepository};
use crate::domain::value_objects::DeploymentReference;

#[derive(Debug, Clone)]
pub struct YamlDeploymentRepository {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeploymentFile {
    #[serde(default)]
    current_deployment: Option<String>,
    #[serde(default)]
    deployment_configurations: Vec<DeploymentConfiguration>,
}

impl YamlDeploymentRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<DeploymentFile, DeploymentError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| DeploymentError::Io {
            path: self.path.clone(),
            source,
        })?;

        serde_yaml_ng::from_str(&content).map_err(|e| DeploymentError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

impl DeploymentRepository for YamlDeploymentRepository {
    fn current_deployment(&self) -> Result<DeploymentReference, DeploymentError> {
        let file = self.load()?;

        match (file.current_deployment, file.deployment_configurations.as_slice()) {
            (Some(name), _) if !name.trim().is_empty() => Ok(DeploymentReference::new(name)),
            (_, [only]) => Ok(only.reference()),
            _ => Err(DeploymentError::NoCurrentDeployment),
        }
    }

    fn deployment_configuration(
        &self,
        reference: &DeploymentReference,
    ) -> Result<DeploymentConfiguration, DeploymentError> {
        self.load()?
            .deployment_configurations
            .into_iter()
            .find(|d| d.name == reference.name())
            .ok_or_else(|| DeploymentError::NotFound {
                name: reference.name().to_string(),
            })
    }
}
