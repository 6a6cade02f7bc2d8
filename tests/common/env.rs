//! Test environment builder for isolated bomcfg testing.
//!
//! Provides `TestEnv` - a temp directory holding a local object store, a
//! deployment file and a `bomcfg.toml`, plus helpers to run the CLI.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::*;

/// Result of running a bomcfg CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Isolated test environment
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    /// Empty environment: config file only, no objects, no deployments
    pub fn empty() -> Self {
        let root = tempfile::tempdir().unwrap();
        let env = Self { root };
        std::fs::create_dir_all(env.store_root().join(BUCKET)).unwrap();
        std::fs::write(
            env.path("bomcfg.toml"),
            format!(
                "[store]\nroot = {:?}\nbucket = {:?}\n\n[deployments]\nfile = {:?}\n\n[output]\ndir = {:?}\n",
                env.store_root().display().to_string(),
                BUCKET,
                env.path("deployments.yml").display().to_string(),
                env.path("out").display().to_string(),
            ),
        )
        .unwrap();
        env
    }

    /// Environment seeded with the standard fixtures
    pub fn seeded() -> Self {
        let env = Self::empty();
        env.put_object("bom/1.10.0.yml", BOM_1_10_0);
        env.put_object("clouddriver/2.0.1/clouddriver.yml", CLOUDDRIVER_BASE);
        env.put_object("deck/2.3.0/settings.js", DECK_BASE);
        env.write_deployments(DEPLOYMENTS);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn store_root(&self) -> PathBuf {
        self.path("store")
    }

    pub fn deployments_file(&self) -> PathBuf {
        self.path("deployments.yml")
    }

    pub fn put_object(&self, key: &str, content: &str) {
        let path = self.store_root().join(BUCKET).join(key);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    pub fn remove_object(&self, key: &str) {
        std::fs::remove_file(self.store_root().join(BUCKET).join(key)).unwrap();
    }

    pub fn write_deployments(&self, content: &str) {
        std::fs::write(self.deployments_file(), content).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap()
    }

    /// Run bomcfg with this environment's config
    pub fn run(&self, args: &[&str]) -> TestResult {
        bomcfg_command(self.root.path())
            .arg("--config")
            .arg(self.path("bomcfg.toml"))
            .args(args)
            .output()
            .unwrap()
            .into()
    }
}

/// bomcfg binary with a clean environment rooted at `cwd`
pub fn bomcfg_command(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bomcfg"));
    cmd.current_dir(cwd)
        .env("HOME", cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("BOMCFG_STORE_ROOT")
        .env_remove("BOMCFG_BUCKET")
        .env_remove("BOMCFG_DEPLOYMENTS")
        .env_remove("BOMCFG_VERBOSITY");
    cmd
}
