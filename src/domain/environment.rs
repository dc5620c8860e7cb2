use std::path::{Path, PathBuf};

use super::search_path::{PATH_DELIMITER, SearchPath};

/// Module directory inside every environment root.
pub const MODULES_DIR: &str = "modules";

/// Read-only description of the environment being evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentContext {
    /// Root directory of the environment; relative search entries resolve here.
    pub root: PathBuf,
    /// Global module directories (`basemodulepath`), in precedence order.
    pub default_module_dirs: Vec<String>,
    /// Optional per-environment config file (`environment.conf`).
    pub config_file: Option<PathBuf>,
}

/// How the module search path is obtained for an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPathStrategy<'a> {
    /// Read `modulepath` from the config file, falling back to defaults.
    EnvironmentConf(&'a Path),
    /// Use the environment modules directory followed by the global defaults.
    EngineDefaults,
}

impl EnvironmentContext {
    pub fn new(root: impl Into<PathBuf>, default_module_dirs: Vec<String>) -> Self {
        Self { root: root.into(), default_module_dirs, config_file: None }
    }

    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    pub fn modules_dir(&self) -> PathBuf {
        self.root.join(MODULES_DIR)
    }

    /// Global defaults joined with the module path delimiter.
    pub fn default_path_list(&self) -> String {
        self.default_module_dirs.join(PATH_DELIMITER.to_string().as_str())
    }

    /// `[root/modules, ...default_module_dirs]`
    pub fn fallback_search_path(&self) -> SearchPath {
        let mut entries = Vec::with_capacity(self.default_module_dirs.len() + 1);
        entries.push(self.modules_dir().to_string_lossy().into_owned());
        entries.extend(self.default_module_dirs.iter().cloned());
        SearchPath::new(entries)
    }

    pub fn strategy(&self) -> SearchPathStrategy<'_> {
        match &self.config_file {
            Some(path) => SearchPathStrategy::EnvironmentConf(path),
            None => SearchPathStrategy::EngineDefaults,
        }
    }
}
