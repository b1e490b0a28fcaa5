//! Atomic JSON persistence with canonical key order
//!
//! JSON state files are compared byte-for-byte by callers to detect
//! changes between publishing runs, so identical logical state must
//! serialize to identical bytes. Object keys are therefore sorted
//! ascending at every nesting level before writing.

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{Error, Result, io};

/// Serialize `value` to pretty-printed JSON with sorted keys and write
/// it atomically to `path`.
///
/// Key order is a contract, not a formatting preference: callers diff
/// the written files to decide whether state changed.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let tree = serde_json::to_value(value).map_err(|e| Error::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut content = serde_json::to_string_pretty(&sort_keys(tree)).map_err(|e| Error::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    content.push('\n');
    io::write_atomic(path, content.as_bytes())
}

/// Read and deserialize a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = io::read_text(path)?;
    serde_json::from_str(&content).map_err(|e| Error::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Recursively order object keys ascending.
///
/// Kept explicit rather than relying on `serde_json`'s default BTreeMap
/// backing: a `preserve_order` feature enabled anywhere in the dependency
/// graph would otherwise silently break the byte-stability contract.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> =
                map.into_iter().map(|(k, v)| (k, sort_keys(v))).collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            Value::Object(entries.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        scalar => scalar,
    }
}
