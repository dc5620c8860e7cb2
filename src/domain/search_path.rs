use std::path::{Path, PathBuf};

use serde::Serialize;

/// Delimiter between entries of a module path list.
pub const PATH_DELIMITER: char = ':';

/// Ordered module directories; the first entry has the highest precedence.
///
/// Entries are kept verbatim: empty strings are preserved here and skipped
/// when base directories are derived.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SearchPath(Vec<String>);

impl SearchPath {
    pub fn new(entries: Vec<String>) -> Self {
        Self(entries)
    }

    /// Split a colon-delimited module path list.
    pub fn parse(value: &str) -> Self {
        Self(value.split(PATH_DELIMITER).map(str::to_string).collect())
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    /// Absolute base directories to probe, in precedence order.
    ///
    /// Empty entries are skipped; relative entries are joined onto `root`.
    pub fn base_directories<'a>(&'a self, root: &'a Path) -> impl Iterator<Item = PathBuf> + 'a {
        self.0.iter().filter(|entry| !entry.is_empty()).map(move |entry| {
            let entry = Path::new(entry);
            if entry.is_absolute() { entry.to_path_buf() } else { root.join(entry) }
        })
    }
}
