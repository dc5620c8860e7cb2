//! Read-only filesystem access for config and manifest files.

use std::io::{self, BufRead};
use std::path::Path;

/// Port for the reads performed while resolving and probing.
///
/// All paths are absolute.
pub trait ManifestFilesystem {
    /// Check whether a regular file exists at `path`.
    fn is_file(&self, path: &Path) -> bool;

    /// Read a small file (config) as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Open a file for streaming, line-by-line reads.
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + '_>>;
}
