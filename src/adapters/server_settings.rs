//! Server-style environment settings.
//!
//! Mirrors the three settings a configuration server exposes for
//! environments: `environmentpath`, `environment`, and `basemodulepath`.
//! They can be loaded from a TOML file whose keys match the field names.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{AppError, SearchPath};
use crate::ports::EnvironmentSettings;

pub const DEFAULT_ENVIRONMENTPATH: &str = "/etc/puppetlabs/code/environments";
pub const DEFAULT_ENVIRONMENT: &str = "production";
pub const DEFAULT_BASEMODULEPATH: &str =
    "/etc/puppetlabs/code/modules:/opt/puppetlabs/puppet/modules";

/// Per-environment config file name.
pub const ENVIRONMENT_CONF: &str = "environment.conf";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    /// Directory holding all environments.
    pub environmentpath: PathBuf,
    /// Name of the environment being evaluated.
    pub environment: String,
    /// Colon-delimited global module directories.
    pub basemodulepath: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            environmentpath: PathBuf::from(DEFAULT_ENVIRONMENTPATH),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            basemodulepath: DEFAULT_BASEMODULEPATH.to_string(),
        }
    }
}

impl ServerSettings {
    /// Parse and validate settings from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, AppError> {
        let settings: ServerSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::config_error(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.environment.trim().is_empty() {
            return Err(AppError::config_error("environment must not be empty"));
        }
        if self.environment.contains(['/', '\\']) || self.environment == ".." {
            return Err(AppError::config_error(format!(
                "environment '{}' must be a single directory name",
                self.environment
            )));
        }
        if !self.environmentpath.is_absolute() {
            return Err(AppError::config_error(format!(
                "environmentpath '{}' must be absolute",
                self.environmentpath.display()
            )));
        }
        Ok(())
    }
}

impl EnvironmentSettings for ServerSettings {
    fn environment_root(&self) -> PathBuf {
        self.environmentpath.join(&self.environment)
    }

    fn default_module_directories(&self) -> Vec<String> {
        SearchPath::parse(&self.basemodulepath)
            .entries()
            .iter()
            .filter(|entry| !entry.is_empty())
            .cloned()
            .collect()
    }

    fn config_file_path(&self) -> Option<PathBuf> {
        Some(self.environment_root().join(ENVIRONMENT_CONF))
    }
}
