//! In-memory object store
//!
//! Keeps every revision ever written, so a reader holding an older generation
//! still gets exactly the bytes that generation named.

use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::sync::RwLock;

use crate::domain::ports::{ObjectStore, ObjectStoreError, ReadMode};
use crate::domain::value_objects::{Generation, StoredObjectMetadata};

#[derive(Debug, Default)]
pub struct InMemoryObjectStore {
    objects: RwLock<Objects>,
}

// Generations are assigned under the same lock that appends revisions, so
// every revision list stays in generation order.
#[derive(Debug, Default)]
struct Objects {
    revisions: HashMap<(String, String), Vec<Revision>>,
    last_generation: u64,
}

#[derive(Debug, Clone)]
struct Revision {
    generation: Generation,
    bytes: Vec<u8>,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a new revision of `key` and return its generation
    pub fn put(&self, bucket: &str, key: &str, bytes: impl Into<Vec<u8>>) -> Generation {
        let mut objects = self
            .objects
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        objects.last_generation += 1;
        let generation = Generation::from(objects.last_generation);

        objects
            .revisions
            .entry((bucket.to_string(), key.to_string()))
            .or_default()
            .push(Revision {
                generation: generation.clone(),
                bytes: bytes.into(),
            });
        generation
    }

    pub fn contains(&self, bucket: &str, key: &str) -> bool {
        self.objects
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .revisions
            .contains_key(&(bucket.to_string(), key.to_string()))
    }

    fn not_found(bucket: &str, key: &str) -> ObjectStoreError {
        ObjectStoreError::NotFound {
            bucket: bucket.to_string(),
            key: key.to_string(),
        }
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn metadata(&self, bucket: &str, key: &str) -> Result<StoredObjectMetadata, ObjectStoreError> {
        let objects = self
            .objects
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let latest = objects
            .revisions
            .get(&(bucket.to_string(), key.to_string()))
            .and_then(|revisions| revisions.last())
            .ok_or_else(|| Self::not_found(bucket, key))?;

        Ok(StoredObjectMetadata::new(
            latest.generation.clone(),
            latest.bytes.len() as u64,
        ))
    }

    fn contents(
        &self,
        bucket: &str,
        key: &str,
        generation: &Generation,
        _mode: ReadMode,
    ) -> Result<Box<dyn Read + Send>, ObjectStoreError> {
        let objects = self
            .objects
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let revisions = objects
            .revisions
            .get(&(bucket.to_string(), key.to_string()))
            .ok_or_else(|| Self::not_found(bucket, key))?;

        let revision = revisions
            .iter()
            .find(|r| &r.generation == generation)
            .ok_or_else(|| ObjectStoreError::GenerationMismatch {
                bucket: bucket.to_string(),
                key: key.to_string(),
                expected: generation.clone(),
                found: revisions
                    .last()
                    .map(|r| r.generation.clone())
                    .unwrap_or_else(|| Generation::new("none")),
            })?;

        Ok(Box::new(Cursor::new(revision.bytes.clone())))
    }
}
