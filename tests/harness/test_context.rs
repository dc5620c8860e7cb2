//! Shared testing harness for `includable` integration tests.

use assert_cmd::Command;
use includable::{EnvironmentContext, EnvironmentSettings, ServerSettings};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) const ENVIRONMENT: &str = "production";

/// Isolated environmentpath with one environment and one global module directory.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a new isolated environment tree.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let ctx = Self { root };
        fs::create_dir_all(ctx.env_root()).expect("Failed to create environment directory");
        fs::create_dir_all(ctx.base_dir()).expect("Failed to create base module directory");
        ctx
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    /// Directory holding all environments.
    pub(crate) fn environmentpath(&self) -> PathBuf {
        self.root.path().join("environments")
    }

    /// Root of the environment under test.
    pub(crate) fn env_root(&self) -> PathBuf {
        self.environmentpath().join(ENVIRONMENT)
    }

    /// Global module directory passed as `basemodulepath`.
    pub(crate) fn base_dir(&self) -> PathBuf {
        self.root.path().join("base")
    }

    pub(crate) fn settings(&self) -> ServerSettings {
        ServerSettings {
            environmentpath: self.environmentpath(),
            environment: ENVIRONMENT.to_string(),
            basemodulepath: self.base_dir().display().to_string(),
        }
    }

    pub(crate) fn env_context(&self) -> EnvironmentContext {
        self.settings().environment_context()
    }

    /// Write `environment.conf` for the environment under test.
    pub(crate) fn write_environment_conf(&self, content: &str) {
        fs::write(self.env_root().join("environment.conf"), content)
            .expect("Failed to write environment.conf");
    }

    /// Write a manifest below a module directory, creating parents.
    pub(crate) fn write_manifest(
        &self,
        module_dir: &Path,
        relative: &str,
        content: &str,
    ) -> PathBuf {
        let path = module_dir.join(relative);
        fs::create_dir_all(path.parent().expect("manifest path has a parent"))
            .expect("Failed to create manifest directory");
        fs::write(&path, content).expect("Failed to write manifest");
        path
    }

    /// Build a command for the compiled `includable` binary pointed at this tree.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("includable").expect("Failed to locate includable binary");
        cmd.env_remove("RUST_LOG")
            .arg("--environmentpath")
            .arg(self.environmentpath())
            .arg("--environment")
            .arg(ENVIRONMENT)
            .arg("--basemodulepath")
            .arg(self.base_dir());
        cmd
    }
}
