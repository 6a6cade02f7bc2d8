//! Version Resolver
//!
//! Reads the deployment-wide version every component version is pinned from.

use crate::domain::ports::DeploymentRepository;
use crate::domain::value_objects::DeploymentReference;
use crate::error::{BomcfgError, BomcfgResult};

/// Declared version of the deployment named by `reference`.
///
/// Fails with `MissingVersion` when the version is absent or blank.
pub fn resolve_version<D>(deployments: &D, reference: &DeploymentReference) -> BomcfgResult<String>
where
    D: DeploymentRepository + ?Sized,
{
    let deployment = deployments.deployment_configuration(reference)?;

    match deployment.declared_version() {
        Some(version) => {
            tracing::debug!(deployment = %reference, version, "resolved deployment version");
            Ok(version.to_string())
        }
        None => Err(BomcfgError::MissingVersion {
            deployment: reference.name().to_string(),
        }),
    }
}
