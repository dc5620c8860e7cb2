mod environment_settings;
mod manifest_filesystem;

pub use environment_settings::EnvironmentSettings;
pub use manifest_filesystem::ManifestFilesystem;
