//! Identifier validation utilities for manifest parsing.

use miette::SourceSpan;

/// Python reserved keywords that cannot be imported or exported by name
/// Source: https://docs.python.org/3/reference/lexical_analysis.html#keywords
pub(crate) const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

/// Check if a name is a Python reserved keyword
pub(crate) fn is_python_keyword(name: &str) -> bool {
    PYTHON_KEYWORDS.contains(&name)
}

/// Why an identifier was rejected
pub(crate) struct InvalidReason {
    /// The name is a reserved keyword (reported as its own error kind)
    pub is_keyword: bool,
    pub message: &'static str,
}

impl InvalidReason {
    fn new(message: &'static str) -> Self {
        Self {
            is_keyword: false,
            message,
        }
    }
}

/// Validate that a name is a valid Python identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<InvalidReason> {
    if name.is_empty() {
        return Some(InvalidReason::new("name cannot be empty"));
    }

    if is_python_keyword(name) {
        return Some(InvalidReason {
            is_keyword: true,
            message: "name is a Python reserved keyword",
        });
    }

    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some(InvalidReason::new("name must start with a letter or underscore")),
        None => return Some(InvalidReason::new("name cannot be empty")),
    }

    // Remaining characters must be alphanumeric or underscore
    for c in chars {
        if !c.is_ascii_alphanumeric() && c != '_' {
            return Some(InvalidReason::new(
                "name must contain only letters, numbers, and underscores",
            ));
        }
    }

    None
}

/// Find the span of a name in the TOML source
/// Searches for key patterns like `name =` or `"name" =`, then quoted
/// occurrences inside arrays like `["name"]`
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    // Pattern 1: bare key, e.g. mod_b = ["..."]
    let key_pattern = format!("{} =", name);
    if let Some(pos) = src.find(&key_pattern) {
        return Some(SourceSpan::from((pos, name.len())));
    }

    // Pattern 2: quoted key or quoted array element
    let quoted_patterns = [format!("\"{}\"", name), format!("'{}'", name)];
    for pattern in &quoted_patterns {
        if let Some(pos) = src.find(pattern) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}
