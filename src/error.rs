//! Error types for bomcfg
//!
//! Uses `thiserror` for library errors. The binary wraps these with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::DeploymentError;

/// Result type alias for bomcfg operations
pub type BomcfgResult<T> = Result<T, BomcfgError>;

/// Main error type for bomcfg operations
///
/// Every variant is terminal for the call that produced it. Nothing here is
/// retried and there is no fallback to a previously generated file.
#[derive(Error, Debug)]
pub enum BomcfgError {
    /// The deployment has no version set
    #[error(
        "deployment '{deployment}' has no version set\n  → Fix: set `version` on the deployment in your deployment configuration"
    )]
    MissingVersion { deployment: String },

    /// Fetching or decoding the BOM or a base config failed
    #[error("unable to retrieve a profile for \"{component}\": {message}")]
    ArtifactFetch {
        component: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Component is not listed in the BOM's services
    #[error("component '{component}' is not listed in the bill of materials")]
    UnknownComponent { component: String },

    /// Deployment repository failure
    #[error(transparent)]
    Deployment(#[from] DeploymentError),

    /// Invalid bomcfg.toml
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BomcfgError {
    /// Wrap an underlying failure as an [`BomcfgError::ArtifactFetch`], keeping it as the source.
    pub fn artifact_fetch<E>(component: impl Into<String>, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ArtifactFetch {
            component: component.into(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
