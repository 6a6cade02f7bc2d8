//! ComponentDescriptor entity
//!
//! A component is a service whose config file is generated by bomcfg. For
//! example, clouddriver is a component and bomcfg generates `clouddriver.yml`.
//!
//! Descriptors are values rather than a trait hierarchy: the only behavior that
//! varies per component is the specialization hook, carried as a strategy.

use std::fmt;
use std::sync::Arc;

use super::DeploymentConfiguration;

/// Component-specific transformation of the fetched base config.
pub type Specializer = Arc<dyn Fn(&str, &DeploymentConfiguration) -> String + Send + Sync>;

#[derive(Clone)]
pub struct ComponentDescriptor {
    name: String,
    config_file_name: String,
    comment_prefix: String,
    specializer: Option<Specializer>,
}

impl ComponentDescriptor {
    /// Create a descriptor with the identity specialization
    pub fn new(
        name: impl Into<String>,
        config_file_name: impl Into<String>,
        comment_prefix: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            config_file_name: config_file_name.into(),
            comment_prefix: comment_prefix.into(),
            specializer: None,
        }
    }

    /// Descriptor for a YAML-configured service: `<name>.yml`, `# ` comments
    pub fn yaml(name: impl Into<String>) -> Self {
        let name = name.into();
        let file = format!("{}.yml", name);
        Self::new(name, file, "# ")
    }

    pub fn with_specializer<F>(mut self, specializer: F) -> Self
    where
        F: Fn(&str, &DeploymentConfiguration) -> String + Send + Sync + 'static,
    {
        self.specializer = Some(Arc::new(specializer));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config_file_name(&self) -> &str {
        &self.config_file_name
    }

    pub fn comment_prefix(&self) -> &str {
        &self.comment_prefix
    }

    /// Apply the component's specialization to `base_config`
    pub fn specialize(&self, base_config: &str, deployment: &DeploymentConfiguration) -> String {
        match &self.specializer {
            Some(specializer) => specializer(base_config, deployment),
            None => base_config.to_string(),
        }
    }
}

impl fmt::Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDescriptor")
            .field("name", &self.name)
            .field("config_file_name", &self.config_file_name)
            .field("comment_prefix", &self.comment_prefix)
            .field("specialized", &self.specializer.is_some())
            .finish()
    }
}
