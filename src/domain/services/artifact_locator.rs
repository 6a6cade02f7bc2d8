//! Artifact Locator
//!
//! Turns a BOM entry into the key of the component's base config object.

use crate::domain::entities::BillOfMaterials;
use crate::domain::value_objects::StorageKey;
use crate::error::BomcfgResult;

/// Key of `component`'s `config_file_name` at the version pinned by `bom`.
///
/// Fails with `UnknownComponent` if the BOM does not list the component.
pub fn locate(
    bom: &BillOfMaterials,
    component: &str,
    config_file_name: &str,
) -> BomcfgResult<StorageKey> {
    let component_version = bom.component_version(component)?;
    Ok(StorageKey::for_component(
        component,
        component_version,
        config_file_name,
    ))
}
