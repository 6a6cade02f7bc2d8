//! BOM Fetcher
//!
//! Retrieves `bom/<version>.yml` and maps it into a [`BillOfMaterials`].

use crate::domain::entities::BillOfMaterials;
use crate::domain::ports::ObjectStore;
use crate::domain::value_objects::StorageKey;
use crate::error::{BomcfgError, BomcfgResult};

use super::object_reader::read_object;

/// Fetch and parse the BOM for `version`.
///
/// `component` only names the component being resolved in error messages.
pub fn fetch_bom<S>(
    store: &S,
    bucket: &str,
    version: &str,
    component: &str,
) -> BomcfgResult<BillOfMaterials>
where
    S: ObjectStore + ?Sized,
{
    let key = StorageKey::for_bom(version);

    let bytes = read_object(store, bucket, key.as_str())
        .map_err(|e| BomcfgError::artifact_fetch(component, e))?;

    let tree: serde_yaml_ng::Value =
        serde_yaml_ng::from_slice(&bytes).map_err(|e| BomcfgError::artifact_fetch(component, e))?;
    let bom =
        BillOfMaterials::from_value(tree).map_err(|e| BomcfgError::artifact_fetch(component, e))?;

    tracing::debug!(%key, services = bom.services.len(), "loaded bill of materials");
    Ok(bom)
}
