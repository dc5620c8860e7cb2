//! Line-oriented parsing of `environment.conf`.
//!
//! Only the `modulepath` setting is read. The file is not TOML; a setting is
//! a `key = value` line with the key at the very start of the line.

use std::io;

use thiserror::Error;

/// Setting holding the environment's module search path.
pub const MODULEPATH_SETTING: &str = "modulepath";

/// Placeholder for the global default module path list.
pub const BASEMODULEPATH_PLACEHOLDER: &str = "$basemodulepath";

/// Reasons `modulepath` could not be read from a config file.
#[derive(Debug, Error)]
pub enum ModulePathError {
    #[error("{0}")]
    Unreadable(#[from] io::Error),

    #[error("no `modulepath` setting found")]
    MissingSetting,

    #[error("`modulepath` setting is empty")]
    EmptySetting,
}

/// Raw value of the last `modulepath` assignment in `content`.
pub fn find_modulepath(content: &str) -> Result<&str, ModulePathError> {
    let value =
        content.lines().filter_map(modulepath_value).last().ok_or(ModulePathError::MissingSetting)?;
    if value.is_empty() {
        return Err(ModulePathError::EmptySetting);
    }
    Ok(value)
}

/// Replace every `$basemodulepath` with the global default list.
pub fn expand_basemodulepath(value: &str, default_path_list: &str) -> String {
    value.replace(BASEMODULEPATH_PLACEHOLDER, default_path_list)
}

fn modulepath_value(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(MODULEPATH_SETTING)?.trim_start();
    rest.strip_prefix('=').map(str::trim)
}
