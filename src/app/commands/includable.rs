//! Search the module path for a class manifest.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::app::config::{Resolution, resolve_search_path};
use crate::app::services::ManifestProber;
use crate::domain::{AppError, EnvironmentContext, QualifiedName, manifest_path};
use crate::ports::ManifestFilesystem;

#[derive(Debug, Clone, Serialize)]
pub struct IncludableOutcome {
    pub name: QualifiedName,
    /// Manifest path relative to each module directory.
    pub manifest: PathBuf,
    /// First probed manifest that declares the class.
    pub found_at: Option<PathBuf>,
    pub resolution: Resolution,
}

impl IncludableOutcome {
    pub fn is_includable(&self) -> bool {
        self.found_at.is_some()
    }
}

/// Probe each module directory in order and stop at the first declaring manifest.
///
/// Missing directories and unreadable files only make that entry negative.
/// The sole error is a declaration pattern that cannot be compiled.
pub fn execute(
    name: &QualifiedName,
    env: &EnvironmentContext,
    filesystem: &impl ManifestFilesystem,
) -> Result<IncludableOutcome, AppError> {
    let prober = ManifestProber::new(name)?;
    let manifest = manifest_path(name);
    let resolution = resolve_search_path(env, filesystem);

    let found_at = resolution
        .search_path
        .base_directories(&env.root)
        .map(|base| base.join(&manifest))
        .find(|target| {
            debug!("includable checking for `{}` in `{}`", name, target.display());
            prober.probe(filesystem, target)
        });

    if let Some(target) = &found_at {
        debug!("includable found `{}` at `{}`", name, target.display());
    }

    Ok(IncludableOutcome { name: name.clone(), manifest, found_at, resolution })
}
