//! Branch key sanitization for Graft
//!
//! Turns untrusted branch names into filesystem-safe keys and gates
//! free-form labels against a character allow-list. Pure string
//! transformations only; nothing in this crate touches the filesystem.

pub mod branch;
pub mod error;
pub mod label;

pub use branch::branch_to_key;
pub use error::{Error, Result};
pub use label::validate_label;
