//! ObjectStore port - bucket-scoped blob storage with generation-pinned reads
//!
//! Callers read `metadata` first and then `contents` at the returned
//! generation, so the bytes always belong to the revision the metadata named.

use std::io::Read;

use crate::domain::value_objects::{Generation, StoredObjectMetadata};

/// How object contents are returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum ReadMode {
    /// The raw object bytes
    #[default]
    Media,
}

#[derive(Debug, thiserror::Error)]
pub enum ObjectStoreError {
    #[error("object not found: {bucket}/{key}")]
    NotFound { bucket: String, key: String },

    #[error("object {bucket}/{key} changed: expected generation {expected}, found {found}")]
    GenerationMismatch {
        bucket: String,
        key: String,
        expected: Generation,
        found: Generation,
    },

    #[error("invalid object key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("object store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("object store error: {0}")]
    Backend(String),
}

/// Blob store holding published BOMs and component base configs.
///
/// Implementations:
/// - `InMemoryObjectStore` - keeps every revision in memory
/// - `LocalObjectStore` - directory per bucket, content-addressed generations
pub trait ObjectStore: Send + Sync {
    /// Metadata of the current revision of `key`
    fn metadata(&self, bucket: &str, key: &str) -> Result<StoredObjectMetadata, ObjectStoreError>;

    /// Contents of `key` at exactly `generation`
    fn contents(
        &self,
        bucket: &str,
        key: &str,
        generation: &Generation,
        mode: ReadMode,
    ) -> Result<Box<dyn Read + Send>, ObjectStoreError>;
}

impl<T: ObjectStore + ?Sized> ObjectStore for std::sync::Arc<T> {
    fn metadata(&self, bucket: &str, key: &str) -> Result<StoredObjectMetadata, ObjectStoreError> {
        (**self).metadata(bucket, key)
    }

    fn contents(
        &self,
        bucket: &str,
        key: &str,
        generation: &Generation,
        mode: ReadMode,
    ) -> Result<Box<dyn Read + Send>, ObjectStoreError> {
        (**self).contents(bucket, key, generation, mode)
    }
}
