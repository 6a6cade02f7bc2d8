//! Local File System
//!
//! Writes generated documents with the tempfile + rename pattern so a
//! component never reads a half-written config.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::BomcfgResult;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }

    /// Write `content` to `path` atomically, creating parent directories
    pub fn write_atomic(&self, path: &Path, content: &str) -> BomcfgResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_home_dir(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
