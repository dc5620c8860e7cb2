//! Modulepath command implementation.

use super::OutputFormat;
use crate::adapters::{LocalFilesystem, ServerSettings};
use crate::app::commands::modulepath;
use crate::domain::AppError;
use crate::ports::EnvironmentSettings;

pub(crate) fn run_modulepath(
    settings: &ServerSettings,
    format: OutputFormat,
) -> Result<(), AppError> {
    let env = settings.environment_context();
    let outcome = modulepath::execute(&env, &LocalFilesystem::new());

    match format {
        OutputFormat::Text => {
            for directory in &outcome.directories {
                println!("{}", directory.display());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }
    Ok(())
}
