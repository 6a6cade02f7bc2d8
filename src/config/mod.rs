//! Configuration module for bomcfg
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BOMCFG_*)
//! 3. Explicit `--config` file, else `./bomcfg.toml`
//! 4. User config (~/.config/bomcfg/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_or_default, load_with_warnings, with_env_overrides, ConfigWarning};
pub use types::{Config, DeploymentsConfig, OutputConfig, StoreConfig, Verbosity};
