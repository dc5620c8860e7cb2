//! Existence and declaration check for a single manifest file.

use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, DeclarationPattern, QualifiedName};
use crate::ports::ManifestFilesystem;

/// Probes candidate manifests for a declaration of one qualified name.
#[derive(Debug, Clone)]
pub struct ManifestProber {
    pattern: DeclarationPattern,
}

impl ManifestProber {
    pub fn new(name: &QualifiedName) -> Result<Self, AppError> {
        Ok(Self { pattern: DeclarationPattern::new(name)? })
    }

    /// True when `target` is a regular file with a line declaring the name.
    ///
    /// Lines are streamed and scanning stops at the first match. Read errors
    /// count as a negative probe. Invalid UTF-8 is decoded lossily so a stray
    /// byte elsewhere in the file does not hide the declaration.
    pub fn probe(&self, filesystem: &impl ManifestFilesystem, target: &Path) -> bool {
        if !filesystem.is_file(target) {
            return false;
        }

        let mut reader = match filesystem.open(target) {
            Ok(reader) => reader,
            Err(err) => {
                debug!("includable could not open `{}`: {}", target.display(), err);
                return false;
            }
        };

        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => return false,
                Ok(_) => {
                    if self.pattern.is_match(&String::from_utf8_lossy(&buf)) {
                        return true;
                    }
                }
                Err(err) => {
                    debug!("includable could not read `{}`: {}", target.display(), err);
                    return false;
                }
            }
        }
    }
}
