//! Label validation
//!
//! Labels (tags, profile names, branch references in configuration) stay
//! human-readable and are never reshaped; they are only gated against a
//! character allow-list before being interpolated into paths or commands.

use crate::error::{Error, Result};

/// Validate that a label contains only allow-listed characters.
///
/// Allowed: ASCII letters, digits, `-`, `_`, `.`, `/`. The value is
/// checked, never modified. `field` names the offending setting in the
/// error message so callers can surface it verbatim.
pub fn validate_label(field: &str, value: &str) -> Result<()> {
    if value.chars().any(char::is_whitespace) {
        return Err(Error::Whitespace {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/');
    if !value.chars().all(allowed) {
        return Err(Error::InvalidCharacters {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}
