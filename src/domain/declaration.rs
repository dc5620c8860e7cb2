use regex::Regex;

use super::{AppError, NAMESPACE_DELIMITER, QualifiedName};

/// Keyword that opens a class declaration.
pub const DECLARATION_KEYWORD: &str = "class";

/// Line-level test for a class declaration of one qualified name.
///
/// Matches optional leading whitespace, the keyword, at least one whitespace
/// character, an optional top-scope `::`, then the literal name. The name is
/// escaped, so regex metacharacters in it match themselves. Nothing after the
/// name is checked: `class role::base_v2` also matches `role::base`.
#[derive(Debug, Clone)]
pub struct DeclarationPattern {
    regex: Regex,
}

impl DeclarationPattern {
    pub fn new(name: &QualifiedName) -> Result<Self, AppError> {
        let pattern = format!(
            r"^\s*{}\s+(?:{})?{}",
            DECLARATION_KEYWORD,
            NAMESPACE_DELIMITER,
            regex::escape(name.as_str())
        );
        Ok(Self { regex: Regex::new(&pattern)? })
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}
