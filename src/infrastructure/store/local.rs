//! Local directory object store
//!
//! Layout: `<root>/<bucket>/<key>`. The generation of an object is the SHA256
//! of its bytes, so a file rewritten between `metadata` and `contents` is
//! detected instead of silently read.

use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use super::validate_key;
use crate::domain::ports::{ObjectStore, ObjectStoreError, ReadMode};
use crate::domain::value_objects::{Generation, StoredObjectMetadata};

#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    root: PathBuf,
}

impl LocalObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path backing `key` in `bucket`
    pub fn object_path(&self, bucket: &str, key: &str) -> Result<PathBuf, ObjectStoreError> {
        if bucket.is_empty() || bucket.contains('/') || bucket.contains('\\') || bucket == ".." {
            return Err(ObjectStoreError::InvalidKey {
                key: format!("{}/{}", bucket, key),
                reason: "bucket must be a single path segment".to_string(),
            });
        }
        validate_key(key)?;

        let mut path = self.root.join(bucket);
        for segment in key.split('/') {
            path.push(segment);
        }
        Ok(path)
    }

    fn read(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ObjectStoreError> {
        let path = self.object_path(bucket, key)?;
        std::fs::read(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ObjectStoreError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            },
            _ => ObjectStoreError::Io(e),
        })
    }
}

/// Content-addressed generation of `bytes`
pub fn content_generation(bytes: &[u8]) -> Generation {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    Generation::new(format!("sha256:{:x}", hasher.finalize()))
}

impl ObjectStore for LocalObjectStore {
    fn metadata(&self, bucket: &str, key: &str) -> Result<StoredObjectMetadata, ObjectStoreError> {
        let bytes = self.read(bucket, key)?;
        Ok(StoredObjectMetadata::new(
            content_generation(&bytes),
            bytes.len() as u64,
        ))
    }

    fn contents(
        &self,
        bucket: &str,
        key: &str,
        generation: &Generation,
        _mode: ReadMode,
    ) -> Result<Box<dyn Read + Send>, ObjectStoreError> {
        let bytes = self.read(bucket, key)?;
        let found = content_generation(&bytes);
        if &found != generation {
            return Err(ObjectStoreError::GenerationMismatch {
                bucket: bucket.to_string(),
                key: key.to_string(),
                expected: generation.clone(),
                found,
            });
        }
        Ok(Box::new(Cursor::new(bytes)))
    }
}
