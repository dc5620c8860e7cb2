//! includable: decide whether a class manifest exists on an environment's
//! module path before it is referenced.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use tracing::warn;

use adapters::LocalFilesystem;

pub use adapters::ServerSettings;
pub use app::commands::includable::IncludableOutcome;
pub use app::commands::modulepath::ModulepathOutcome;
pub use app::config::{Resolution, SearchPathSource};
pub use domain::{AppError, EnvironmentContext, QualifiedName, SearchPath, manifest_path};
pub use ports::{EnvironmentSettings, ManifestFilesystem};

/// Whether `include <name>` should find a class file in `env`.
///
/// Never fails: config problems fall back to default module directories
/// and unreadable manifests count as absent.
pub fn includable(name: &QualifiedName, env: &EnvironmentContext) -> bool {
    match check(name, env) {
        Ok(outcome) => outcome.is_includable(),
        Err(e) => {
            warn!("includable could not check `{}`: {}", name, e);
            false
        }
    }
}

/// Search `env` for `name` and report where it was found.
pub fn check(
    name: &QualifiedName,
    env: &EnvironmentContext,
) -> Result<IncludableOutcome, AppError> {
    app::commands::includable::execute(name, env, &LocalFilesystem::new())
}

/// Resolve the module search path of `env`.
pub fn modulepath(env: &EnvironmentContext) -> ModulepathOutcome {
    app::commands::modulepath::execute(env, &LocalFilesystem::new())
}
