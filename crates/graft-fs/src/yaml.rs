//! Atomic YAML persistence
//!
//! YAML artifacts (front matter, publish metadata) are meant to be read
//! and edited by humans, so the caller's key order is preserved as
//! written rather than canonicalized.

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result, io};

/// Serialize `value` to a YAML document and write it atomically to
/// `path`. Mapping keys keep the order the caller provided.
pub fn write_yaml<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_yaml::to_string(value).map_err(|e| Error::Yaml {
        path: path.to_path_buf(),
        source: e,
    })?;
    io::write_atomic(path, content.as_bytes())
}

/// Read and deserialize a YAML file.
pub fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = io::read_text(path)?;
    serde_yaml::from_str(&content).map_err(|e| Error::Yaml {
        path: path.to_path_buf(),
        source: e,
    })
}
