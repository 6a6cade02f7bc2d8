//! Generation-pinned object reads shared by the BOM fetcher and the assembler.

use std::io::Read;

use crate::domain::ports::{ObjectStore, ObjectStoreError, ReadMode};

/// Upper bound on the buffer reserved from a store-reported size
const MAX_PREALLOC: usize = 1 << 20;

/// Read `key` fully: metadata first, then the contents at that generation.
pub(crate) fn read_object<S>(store: &S, bucket: &str, key: &str) -> Result<Vec<u8>, ObjectStoreError>
where
    S: ObjectStore + ?Sized,
{
    let metadata = store.metadata(bucket, key)?;
    tracing::debug!(
        bucket,
        key,
        generation = %metadata.generation,
        size = metadata.size,
        "fetching object"
    );

    let mut reader = store.contents(bucket, key, &metadata.generation, ReadMode::Media)?;
    // Reported size is a hint only.
    let capacity = usize::try_from(metadata.size)
        .unwrap_or(MAX_PREALLOC)
        .min(MAX_PREALLOC);
    let mut bytes = Vec::with_capacity(capacity);
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}
