use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::AppError;

/// Namespace delimiter between segments of a qualified name.
pub const NAMESPACE_DELIMITER: &str = "::";

/// A validated qualified class name such as `role::base`.
///
/// Guarantees:
/// - Non-blank
/// - No empty segments (`a::::b`, `a::`)
/// - A single leading `::` (top-scope anchor) is stripped
///
/// Character content is deliberately not validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct QualifiedName(String);

impl QualifiedName {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let name = raw.strip_prefix(NAMESPACE_DELIMITER).unwrap_or(raw);
        if name.trim().is_empty() {
            return Err(AppError::invalid_name(raw, "name must not be empty"));
        }
        if name.split(NAMESPACE_DELIMITER).any(str::is_empty) {
            return Err(AppError::invalid_name(raw, "segments must not be empty"));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Segments in declaration order; the first is the module name.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(NAMESPACE_DELIMITER)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for QualifiedName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
