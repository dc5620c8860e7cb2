//! Module search path resolution for an environment.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::warn;

use crate::domain::{
    EnvironmentContext, ModulePathError, SearchPath, SearchPathStrategy, expand_basemodulepath,
    find_modulepath,
};
use crate::ports::ManifestFilesystem;

/// Where a resolved search path came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchPathSource {
    /// `modulepath` read from the environment config file.
    EnvironmentConf { path: PathBuf },
    /// No config file configured; engine defaults used.
    Defaults,
    /// Config file could not be used; engine defaults used instead.
    Fallback { path: PathBuf, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub search_path: SearchPath,
    pub source: SearchPathSource,
}

impl Resolution {
    /// Advisory message when the config file had to be bypassed.
    pub fn advisory(&self) -> Option<String> {
        match &self.source {
            SearchPathSource::Fallback { path, reason } => {
                Some(format!("Error reading `modulepath` from {} ({})", path.display(), reason))
            }
            _ => None,
        }
    }
}

/// Build the ordered module search path for `env`.
///
/// Never fails: any problem with the config file yields
/// `[root/modules, ...default_module_dirs]` and a warning.
pub fn resolve_search_path(
    env: &EnvironmentContext,
    filesystem: &impl ManifestFilesystem,
) -> Resolution {
    let config_file = match env.strategy() {
        SearchPathStrategy::EnvironmentConf(path) => path,
        SearchPathStrategy::EngineDefaults => {
            return Resolution {
                search_path: env.fallback_search_path(),
                source: SearchPathSource::Defaults,
            };
        }
    };

    match read_modulepath(config_file, env, filesystem) {
        Ok(search_path) => Resolution {
            search_path,
            source: SearchPathSource::EnvironmentConf { path: config_file.to_path_buf() },
        },
        Err(err) => {
            let resolution = Resolution {
                search_path: env.fallback_search_path(),
                source: SearchPathSource::Fallback {
                    path: config_file.to_path_buf(),
                    reason: err.to_string(),
                },
            };
            if let Some(advisory) = resolution.advisory() {
                warn!("{advisory}");
            }
            resolution
        }
    }
}

fn read_modulepath(
    config_file: &Path,
    env: &EnvironmentContext,
    filesystem: &impl ManifestFilesystem,
) -> Result<SearchPath, ModulePathError> {
    let content = filesystem.read_to_string(config_file)?;
    let value = find_modulepath(&content)?;
    Ok(SearchPath::parse(&expand_basemodulepath(value, &env.default_path_list())))
}
