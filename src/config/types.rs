//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::BomcfgResult;
use crate::infrastructure::fs::expand_home_dir;

use super::loader;

/// Object store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding one subdirectory per bucket
    #[serde(default = "default_store_root")]
    pub root: PathBuf,

    #[serde(default = "default_bucket")]
    pub bucket: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: default_store_root(),
            bucket: default_bucket(),
        }
    }
}

fn default_store_root() -> PathBuf {
    PathBuf::from("~/.bomcfg/store")
}

fn default_bucket() -> String {
    "bomcfg-profiles".to_string()
}

/// Deployment configuration source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentsConfig {
    #[serde(default = "default_deployments_file")]
    pub file: PathBuf,
}

impl Default for DeploymentsConfig {
    fn default() -> Self {
        Self {
            file: default_deployments_file(),
        }
    }
}

fn default_deployments_file() -> PathBuf {
    PathBuf::from("~/.bomcfg/deployments.yml")
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory generated files are written to
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    #[serde(default)]
    pub verbosity: Verbosity,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            verbosity: Verbosity::default(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse a verbosity name, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub deployments: DeploymentsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BomcfgResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Store root with `~` expanded
    pub fn store_root(&self) -> PathBuf {
        expand_home_dir(&self.store.root)
    }

    /// Deployment file with `~` expanded
    pub fn deployments_file(&self) -> PathBuf {
        expand_home_dir(&self.deployments.file)
    }

    /// Output directory with `~` expanded
    pub fn output_dir(&self) -> PathBuf {
        expand_home_dir(&self.output.dir)
    }
}
