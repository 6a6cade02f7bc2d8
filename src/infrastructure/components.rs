//! Built-in component registry
//!
//! One descriptor per known service. All built-ins use the identity
//! specialization; callers needing a hook build their own descriptor.

use crate::domain::entities::ComponentDescriptor;

const YAML_COMPONENTS: &[&str] = &[
    "clouddriver",
    "echo",
    "fiat",
    "front50",
    "gate",
    "igor",
    "orca",
    "rosco",
];

/// Get all built-in components, sorted by name
pub fn all_components() -> Vec<ComponentDescriptor> {
    let mut components: Vec<ComponentDescriptor> = YAML_COMPONENTS
        .iter()
        .map(|name| ComponentDescriptor::yaml(*name))
        .collect();
    components.push(ComponentDescriptor::new("deck", "settings.js", "// "));
    components.sort_by(|a, b| a.name().cmp(b.name()));
    components
}

/// Get the built-in component named `name`
pub fn get_component(name: &str) -> Option<ComponentDescriptor> {
    all_components().into_iter().find(|c| c.name() == name)
}
