pub mod local_filesystem;
pub mod server_settings;

pub use local_filesystem::LocalFilesystem;
pub use server_settings::ServerSettings;
