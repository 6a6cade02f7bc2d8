//! Config Assembler
//!
//! Orchestrates the generation of one component's config file:
//! 1. Resolve the deployment's version
//! 2. Fetch the BOM for that version
//! 3. Look up the component's version in the BOM
//! 4. Fetch the component's base config at that version (generation-pinned)
//! 5. Decode it as UTF-8
//! 6. Apply the component's specialization with the deployment configuration
//! 7. Prepend the edit warning banner
//!
//! Every step short-circuits on failure. Nothing is cached between calls, so a
//! version bump is picked up by the very next call.

use crate::domain::entities::{ComponentDescriptor, ConfigDocument};
use crate::domain::ports::{DeploymentRepository, ObjectStore};
use crate::domain::services::{locate, with_edit_warning};
use crate::domain::value_objects::DeploymentReference;
use crate::error::{BomcfgError, BomcfgResult};

use super::bom_fetcher::fetch_bom;
use super::object_reader::read_object;
use super::version_resolver::resolve_version;

/// Config assembler - generates final config files for components
///
/// Parameterized by its ports so tests can substitute in-memory stores.
pub struct ConfigAssembler<D, S>
where
    D: DeploymentRepository,
    S: ObjectStore,
{
    deployments: D,
    store: S,
    bucket: String,
}

impl<D, S> ConfigAssembler<D, S>
where
    D: DeploymentRepository,
    S: ObjectStore,
{
    pub fn new(deployments: D, store: S, bucket: impl Into<String>) -> Self {
        Self {
            deployments,
            store,
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn deployments(&self) -> &D {
        &self.deployments
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Full config text for `component`: banner followed by the specialized base config
    pub fn full_config(
        &self,
        component: &ComponentDescriptor,
        reference: &DeploymentReference,
    ) -> BomcfgResult<String> {
        self.document(component, reference)
            .map(ConfigDocument::into_content)
    }

    /// Generate the config document for `component`
    pub fn document(
        &self,
        component: &ComponentDescriptor,
        reference: &DeploymentReference,
    ) -> BomcfgResult<ConfigDocument> {
        let base_config = self.base_config(component, reference)?;

        // Read again: the hook needs the whole deployment, not just its version.
        let deployment = self.deployments.deployment_configuration(reference)?;
        let specialized = component.specialize(&base_config, &deployment);

        let content = with_edit_warning(component.comment_prefix(), &specialized);
        tracing::info!(
            component = component.name(),
            deployment = %reference,
            file = component.config_file_name(),
            bytes = content.len(),
            "generated config"
        );

        Ok(ConfigDocument::new(
            component.name(),
            component.config_file_name(),
            content,
        ))
    }

    /// Generate documents for several components of the same deployment.
    ///
    /// Each component is resolved on its own thread; results keep the order of
    /// `components`.
    pub fn documents(
        &self,
        components: &[ComponentDescriptor],
        reference: &DeploymentReference,
    ) -> Vec<BomcfgResult<ConfigDocument>> {
        std::thread::scope(|scope| {
            let handles: Vec<_> = components
                .iter()
                .map(|component| scope.spawn(move || self.document(component, reference)))
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        })
    }

    /// Unmodified base config of `component` at the version pinned for `reference`
    pub fn base_config(
        &self,
        component: &ComponentDescriptor,
        reference: &DeploymentReference,
    ) -> BomcfgResult<String> {
        let name = component.name();

        let version = resolve_version(&self.deployments, reference)?;
        let bom = fetch_bom(&self.store, &self.bucket, &version, name)?;
        let key = locate(&bom, name, component.config_file_name())?;

        let bytes = read_object(&self.store, &self.bucket, key.as_str())
            .map_err(|e| BomcfgError::artifact_fetch(name, e))?;

        String::from_utf8(bytes).map_err(|e| BomcfgError::artifact_fetch(name, e))
    }
}

#[cfg(test)]
mod tests;
