//! Pillar file scanning.
//!
//! Pillar files are never parsed: each line is stripped of its comment,
//! split on whitespace, and every token containing a category's search term
//! is collected as a key.

pub mod comment;
pub mod extract;
pub mod sort;

pub use comment::strip;
pub use extract::{KeySet, PillarFiles, extract_keys, extract_keys_from, list_pillar_files};
pub use sort::sort_keys;
