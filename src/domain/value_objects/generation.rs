//! Generation Value Object
//!
//! A generation names one immutable revision of a stored object. Reading the
//! metadata first and then the contents *at that generation* guarantees both
//! reads see the same revision even if the object is overwritten in between.

use std::fmt;

/// Store-assigned identifier of one immutable object revision
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Generation(String);

impl Generation {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for Generation {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

/// Metadata returned by an object store for one object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObjectMetadata {
    pub generation: Generation,
    /// Size in bytes of the revision named by `generation`
    pub size: u64,
}

impl StoredObjectMetadata {
    pub fn new(generation: Generation, size: u64) -> Self {
        Self { generation, size }
    }
}
