//! Error types for graft-keys

/// Result type for graft-keys operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during key sanitization and label validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input is (or reduces to) a reserved filesystem token
    #[error("dangerous path: branch name {raw:?} is a reserved filesystem token")]
    DangerousPath { raw: String },

    /// The input contains a `..` sequence that cannot be safely collapsed
    #[error("path traversal: branch name {raw:?} contains an unsafe '..' sequence")]
    PathTraversal { raw: String },

    /// Sanitization stripped every character of the input
    #[error("branch name {raw:?} produces an empty key")]
    EmptyKey { raw: String },

    /// A label contains whitespace
    #[error("{field} must not contain whitespace (got {value:?})")]
    Whitespace { field: String, value: String },

    /// A label contains characters outside the allow-list
    #[error(
        "{field} may contain only letters, digits, and the characters \
         '-', '_', '.', '/' (got {value:?})"
    )]
    InvalidCharacters { field: String, value: String },
}
