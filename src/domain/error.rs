use thiserror::Error;

/// Library-wide error type for includable operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Qualified name rejected by input validation.
    #[error("Invalid qualified name '{name}': {reason}")]
    InvalidQualifiedName { name: String, reason: String },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Settings file is not valid TOML or has unknown keys.
    #[error("Failed to parse settings file: {0}")]
    SettingsParse(#[from] toml::de::Error),

    /// Declaration pattern could not be compiled for a name.
    #[error("Failed to build declaration pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Output serialization failed.
    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn invalid_name<S: Into<String>>(name: &str, reason: S) -> Self {
        AppError::InvalidQualifiedName { name: name.to_string(), reason: reason.into() }
    }
}
