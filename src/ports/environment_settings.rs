//! Settings provider for the environment being evaluated.

use std::path::PathBuf;

use crate::domain::EnvironmentContext;

/// Port supplying the environment root, global module directories, and the
/// optional per-environment config file.
pub trait EnvironmentSettings {
    /// Absolute root directory of the current environment.
    fn environment_root(&self) -> PathBuf;

    /// Global module directories, highest precedence first.
    fn default_module_directories(&self) -> Vec<String>;

    /// Per-environment config file, if the environment has one.
    fn config_file_path(&self) -> Option<PathBuf>;

    /// Snapshot the settings into a read-only context.
    fn environment_context(&self) -> EnvironmentContext {
        EnvironmentContext {
            root: self.environment_root(),
            default_module_dirs: self.default_module_directories(),
            config_file: self.config_file_path(),
        }
    }
}
