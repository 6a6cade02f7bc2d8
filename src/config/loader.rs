//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BomcfgError, BomcfgResult};

use super::types::{Config, Verbosity};

/// Name of the project-local config file
pub const PROJECT_CONFIG_FILE: &str = "bomcfg.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BomcfgResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BomcfgError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit path, the project config, the user config, or defaults.
///
/// An explicit path must exist and parse. The implicit locations are skipped
/// when missing. Environment overrides are applied last.
pub fn load_or_default(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> BomcfgResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(dirs::config_dir().map(|dir| dir.join("bomcfg/config.toml")));

    for candidate in candidates {
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "loading configuration");
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (BOMCFG_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(root) = std::env::var("BOMCFG_STORE_ROOT") {
        if !root.is_empty() {
            config.store.root = PathBuf::from(root);
        }
    }

    if let Ok(bucket) = std::env::var("BOMCFG_BUCKET") {
        if !bucket.is_empty() {
            config.store.bucket = bucket;
        }
    }

    if let Ok(file) = std::env::var("BOMCFG_DEPLOYMENTS") {
        if !file.is_empty() {
            config.deployments.file = PathBuf::from(file);
        }
    }

    if let Ok(verbosity) = std::env::var("BOMCFG_VERBOSITY") {
        config.output.verbosity = Verbosity::parse(&verbosity).unwrap_or(Verbosity::Normal);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "store",
        "root",
        "bucket",
        "deployments",
        "file",
        "output",
        "dir",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
