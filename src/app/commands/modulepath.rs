//! Report the module search path for an environment.

use std::path::PathBuf;

use serde::Serialize;

use crate::app::config::{Resolution, resolve_search_path};
use crate::domain::EnvironmentContext;
use crate::ports::ManifestFilesystem;

#[derive(Debug, Clone, Serialize)]
pub struct ModulepathOutcome {
    pub resolution: Resolution,
    /// Directories that would be probed, in order, with empty entries dropped.
    pub directories: Vec<PathBuf>,
}

pub fn execute(
    env: &EnvironmentContext,
    filesystem: &impl ManifestFilesystem,
) -> ModulepathOutcome {
    let resolution = resolve_search_path(env, filesystem);
    let directories = resolution.search_path.base_directories(&env.root).collect();
    ModulepathOutcome { resolution, directories }
}
