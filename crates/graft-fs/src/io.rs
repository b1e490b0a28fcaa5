//! Atomic I/O primitives
//!
//! One shared mechanism backs every writer in this crate: serialize the
//! full content in memory, write it to a uniquely-named temporary file in
//! the target's own directory, flush, then rename over the target. The
//! rename is the only operation a reader can observe, so the target is
//! never seen half-written. On any failure the temporary file is removed
//! and the previous target content is left untouched.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Write raw bytes atomically to `path`, creating parent directories.
///
/// The temporary file is placed in the same directory as `path` so the
/// final rename stays within one filesystem. Concurrent writers to the
/// same target cannot collide on the temporary name; between them the
/// last rename wins, each rename remaining individually atomic.
///
/// # Errors
///
/// Returns [`Error::Io`] if a parent directory cannot be created, the
/// temporary file cannot be written, or the rename fails. Failures are
/// not retried.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());

    if let Some(parent) = parent {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let dir = parent.unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;

    temp.write_all(content)
        .map_err(|e| Error::io(temp.path(), e))?;

    // Flush to disk before the rename makes the content visible.
    temp.as_file()
        .sync_all()
        .map_err(|e| Error::io(temp.path(), e))?;

    // Atomic replace; dropping the temp guard on any earlier exit path
    // removes the file instead.
    temp.persist(path).map_err(|e| Error::io(path, e.error))?;

    tracing::trace!(path = %path.display(), bytes = content.len(), "atomic write complete");
    Ok(())
}

/// Write text content atomically to `path`, verbatim.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
