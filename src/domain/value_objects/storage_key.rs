//! Storage Key Value Object
//!
//! Object keys inside the profile bucket. Two shapes exist and both are part of
//! the on-disk contract with already published artifacts:
//!
//! - `bom/<version>.yml` - the bill of materials for a deployment version
//! - `<component>/<componentVersion>/<configFileName>` - a component's base config

use std::fmt;

/// Key of one object in the profile bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// Key of a component's base config for a given component version
    pub fn for_component(component: &str, component_version: &str, config_file_name: &str) -> Self {
        Self(format!(
            "{}/{}/{}",
            component, component_version, config_file_name
        ))
    }

    /// Key of the bill of materials for a deployment version
    pub fn for_bom(version: &str) -> Self {
        Self(bom_key(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Object key of the bill of materials for `version`
pub fn bom_key(version: &str) -> String {
    format!("bom/{}.yml", version)
}
