//! The path expansion engine.
//!
//! Turns a raw path expression into the ordered sequence of concrete,
//! symbol-free paths the document primitives operate on:
//!
//! ```text
//! expression -> range detection -> range expansion -> symbol rewriting
//! ```
//!
//! Expansion is a pure string transformation except for `[*]`, which reads
//! the live array length from the document.

pub mod range;
pub mod symbol;

pub use range::{locate, resolve, IndexSpec, RangeToken, SplitPath};
pub use symbol::{rewrite, APPEND_SEGMENT};

use serde_yaml_ng::Value;

use crate::error::Result;

/// Expand one path expression against `doc`.
///
/// A range-free expression passes through as its own one-element list;
/// symbol rewriting is left to the caller, per concrete path.
pub fn expand(path: &str, doc: &Value) -> Result<Vec<String>> {
    match range::locate(path)? {
        Some(split) => range::resolve(&split, doc),
        None => Ok(vec![path.to_string()]),
    }
}
