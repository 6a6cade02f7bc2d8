//! BillOfMaterials entity
//!
//! A BOM pins every component of a deployment version to a component version.
//! Published BOMs write a service either as a bare version or as a table:
//!
//! ```yaml
//! version: 1.10.0
//! services:
//!   clouddriver: 2.0.1
//!   echo:
//!     version: 2.1.0
//!     commit: 4f1c2e9
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml_ng::Value;

use crate::error::{BomcfgError, BomcfgResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillOfMaterials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(default, deserialize_with = "deserialize_services")]
    pub services: BTreeMap<String, String>,
}

impl BillOfMaterials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a service entry
    pub fn with_service(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.services.insert(name.into(), version.into());
        self
    }

    /// Map an already parsed YAML tree into a BOM
    pub fn from_value(value: Value) -> Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_value(value)
    }

    /// Version of `component` pinned by this BOM
    pub fn component_version(&self, component: &str) -> BomcfgResult<&str> {
        self.services
            .get(component)
            .map(String::as_str)
            .ok_or_else(|| BomcfgError::UnknownComponent {
                component: component.to_string(),
            })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ServiceEntryDe {
    Table { version: Value },
    Bare(Value),
}

fn deserialize_services<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, ServiceEntryDe>> = Option::deserialize(deserializer)?;

    let mut services = BTreeMap::new();
    for (name, entry) in raw.unwrap_or_default() {
        let value = match entry {
            ServiceEntryDe::Table { version } => version,
            ServiceEntryDe::Bare(value) => value,
        };
        let version = scalar_to_string(&value).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "service '{}' must have a string or numeric version",
                name
            ))
        })?;
        services.insert(name, version);
    }
    Ok(services)
}

// YAML reads `2.0` as a float, so numbers are accepted and rendered back.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
