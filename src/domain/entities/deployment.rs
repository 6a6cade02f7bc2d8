//! DeploymentConfiguration entity
//!
//! One named deployment from the user's deployment configuration. Only `name`
//! and `version` are read by the pipeline; every other key is kept as-is so
//! specialization hooks can look at it.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml_ng::Value;

use crate::domain::value_objects::DeploymentReference;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentConfiguration {
    pub name: String,

    #[serde(
        default,
        deserialize_with = "deserialize_version",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl DeploymentConfiguration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Declared version, or `None` when absent or blank. Non-blank versions are returned verbatim.
    pub fn declared_version(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.trim().is_empty())
    }

    pub fn reference(&self) -> DeploymentReference {
        DeploymentReference::new(self.name.clone())
    }

    /// Look up an opaque top-level key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

fn deserialize_version<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(serde::de::Error::custom("version must be a string")),
    }
}
