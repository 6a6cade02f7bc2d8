//! In-memory deployment repository

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::domain::entities::DeploymentConfiguration;
use crate::domain::ports::{DeploymentError, DeploymentRepository};
use crate::domain::value_objects::DeploymentReference;

#[derive(Debug, Default)]
pub struct InMemoryDeploymentRepository {
    deployments: RwLock<BTreeMap<String, DeploymentConfiguration>>,
    current: RwLock<Option<String>>,
}

impl InMemoryDeploymentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a deployment. The first one added becomes current.
    pub fn with_deployment(self, deployment: DeploymentConfiguration) -> Self {
        self.insert(deployment);
        self
    }

    pub fn with_current(self, name: impl Into<String>) -> Self {
        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(name.into());
        self
    }

    /// Add or replace a deployment
    pub fn insert(&self, deployment: DeploymentConfiguration) {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if current.is_none() {
            *current = Some(deployment.name.clone());
        }

        self.deployments
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(deployment.name.clone(), deployment);
    }
}

impl DeploymentRepository for InMemoryDeploymentRepository {
    fn current_deployment(&self) -> Result<DeploymentReference, DeploymentError> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .as_deref()
            .map(DeploymentReference::new)
            .ok_or(DeploymentError::NoCurrentDeployment)
    }

    fn deployment_configuration(
        &self,
        reference: &DeploymentReference,
    ) -> Result<DeploymentConfiguration, DeploymentError> {
        self.deployments
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(reference.name())
            .cloned()
            .ok_or_else(|| DeploymentError::NotFound {
                name: reference.name().to_string(),
            })
    }
}
