//! Atomic state persistence for Graft
//!
//! Writes branch artifacts (plain text, JSON state, YAML metadata) so
//! that a reader of the target path sees either the complete previous
//! content or the complete new content, never a partial write. All three
//! formats share one mechanism: serialize fully in memory, write to a
//! temporary file in the target's directory, then atomically rename over
//! the target.

pub mod error;
pub mod io;
pub mod json;
pub mod yaml;

pub use error::{Error, Result};
pub use io::{read_text, write_atomic, write_text};
pub use json::{read_json, write_json};
pub use yaml::{read_yaml, write_yaml};
