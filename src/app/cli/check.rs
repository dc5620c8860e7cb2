//! Check command implementation.

use super::OutputFormat;
use crate::adapters::{LocalFilesystem, ServerSettings};
use crate::app::commands::includable;
use crate::domain::{AppError, QualifiedName};
use crate::ports::EnvironmentSettings;

/// Prints `true`/`false`; exit code 0 when includable, 1 otherwise.
pub(crate) fn run_check(
    settings: &ServerSettings,
    name: &str,
    format: OutputFormat,
    verbose: bool,
) -> Result<i32, AppError> {
    let name = QualifiedName::new(name)?;
    let env = settings.environment_context();
    let outcome = includable::execute(&name, &env, &LocalFilesystem::new())?;

    match format {
        OutputFormat::Text => {
            println!("{}", outcome.is_includable());
            if verbose && let Some(found_at) = &outcome.found_at {
                println!("{}", found_at.display());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(if outcome.is_includable() { 0 } else { 1 })
}
