//! Object store implementations

mod local;
mod memory;

pub use local::LocalObjectStore;
pub use memory::InMemoryObjectStore;

use crate::domain::ports::ObjectStoreError;

/// Reject keys that could escape a bucket when mapped to a path
pub(crate) fn validate_key(key: &str) -> Result<(), ObjectStoreError> {
    let invalid = |reason: &str| ObjectStoreError::InvalidKey {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    if key.is_empty() {
        return Err(invalid("key is empty"));
    }
    if key.starts_with('/') || key.contains('\\') {
        return Err(invalid("key must be a relative '/'-separated path"));
    }
    if key.split('/').any(|segment| segment.is_empty() || segment == "." || segment == "..") {
        return Err(invalid("key contains an empty, '.' or '..' segment"));
    }
    Ok(())
}
