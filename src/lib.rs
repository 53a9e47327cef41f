//! Path-expression editor for YAML and JSON documents.
//!
//! Edits a structured document through dotted path expressions supplied on
//! the command line: `--set path=value`, `--insert path=value`, and
//! `--delete path`. A path may address array elements by index, by
//! inclusive range (`[0..2]`), by comma list (`[0,2..4]`), or all at once
//! (`[*]`), and may carry a prepend (`^`) or append (`$`) symbol.
//!
//! ## Layout
//! - [`expand`] - the path expansion engine (range tokens, symbols)
//! - [`document`] - set/get/delete primitives over the value tree
//! - [`ops`] - the ordered operation plan and its application
//! - [`codec`] - format inference, decode, re-encode
//! - [`cli`] - clap surface and dispatch

pub mod cli;
pub mod codec;
pub mod document;
pub mod error;
pub mod expand;
pub mod ops;

pub use error::{InjectorError, Result};
pub use ops::{Operation, OperationPlan};
