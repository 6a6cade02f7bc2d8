//! ConfigDocument entity - a generated, non-editable config file
//!
//! Produced by the assembler and handed to the caller. bomcfg itself never
//! persists it; the CLI writes it to disk.

use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    component: String,
    file_name: String,
    content: String,
}

impl ConfigDocument {
    pub fn new(
        component: impl Into<String>,
        file_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            component: component.into(),
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    /// File name the component expects its config under
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Banner followed by the specialized config
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }

    /// SHA256 of the content, `sha256:<hex>`
    pub fn hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.content.as_bytes());
        format!("sha256:{:x}", hasher.finalize())
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
