//! Branch name to filesystem key conversion
//!
//! Branch names are user- or attacker-controlled strings that end up as
//! directory and file name segments. `branch_to_key` reduces them to a
//! single flat segment and rejects anything that could still be
//! interpreted by the filesystem as a traversal or reserved token.

use crate::error::{Error, Result};

/// Convert a branch name into a filesystem-safe key.
///
/// The pipeline flattens hierarchy separators to hyphens, strips edge
/// dots and hyphens, and collapses long runs of dots, so that the
/// returned key is always a single path segment:
///
/// - `/` and `\` become `-`
/// - leading and trailing `.` and `-` are removed
/// - interior runs of three or more `.` collapse to a single `.`
///
/// An interior run of exactly two dots is the parent-directory token and
/// is rejected rather than collapsed, as are the reserved tokens `.`,
/// `..`, and `~` and inputs that strip down to nothing.
///
/// # Example
///
/// ```
/// use graft_keys::branch_to_key;
///
/// assert_eq!(branch_to_key("graft/demo").unwrap(), "graft-demo");
/// assert_eq!(branch_to_key("graft...demo").unwrap(), "graft.demo");
/// assert!(branch_to_key("foo..bar").is_err());
/// ```
pub fn branch_to_key(raw: &str) -> Result<String> {
    // Reserved tokens are rejected as written, before any rewriting
    // could disguise them.
    if matches!(raw, "." | ".." | "~") {
        return Err(Error::DangerousPath { raw: raw.to_string() });
    }

    let flat: String = raw
        .chars()
        .map(|c| if c == '/' || c == '\\' { '-' } else { c })
        .collect();
    let trimmed = flat.trim_matches(|c: char| c == '.' || c == '-');

    let mut key = String::with_capacity(trimmed.len());
    let mut dots = 0usize;
    for c in trimmed.chars() {
        if c == '.' {
            dots += 1;
            continue;
        }
        match dots {
            0 => {}
            // Exactly ".." between names is a traversal token, not a typo.
            2 => {
                return Err(Error::PathTraversal {
                    raw: raw.to_string(),
                });
            }
            _ => key.push('.'),
        }
        dots = 0;
        key.push(c);
    }
    // `trimmed` has no trailing dots, so no run is pending here.
    debug_assert_eq!(dots, 0);

    if key.is_empty() {
        return Err(Error::EmptyKey {
            raw: raw.to_string(),
        });
    }
    // Stripping can uncover a bare `~` (e.g. "-~-").
    if key == "~" {
        return Err(Error::DangerousPath {
            raw: raw.to_string(),
        });
    }

    Ok(key)
}
