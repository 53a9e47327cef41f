//! The operation orchestrator.
//!
//! Parses the repeatable `--set`/`--insert`/`--delete` expressions into an
//! ordered plan and applies it to the document. Application order is fixed
//! regardless of how the flags were interleaved on the command line: every
//! `set` first, then every `insert`, then every `delete`, each group in
//! command-line order.

use serde_yaml_ng as serde_yaml;
use serde_yaml::Value;
use tracing::warn;

use crate::document;
use crate::error::{InjectorError, Result};
use crate::expand;

/// A single parsed edit operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Replace or create the value at each path the expression expands to.
    Set { path: String, value: String },
    /// Set the value only if the path does not already exist; an existing
    /// path degrades to a warning, the one non-fatal case in a run.
    Insert { path: String, value: String },
    /// Remove the value at the path; a missing path is an error.
    Delete { path: String },
}

fn split_assignment(kind: &str, expr: &str) -> Result<(String, String)> {
    let Some((path, value)) = expr.split_once('=') else {
        return Err(InjectorError::Parse(format!(
            "invalid {kind} format '{expr}', expected path=value"
        )));
    };
    Ok((path.trim().to_string(), value.trim().to_string()))
}

/// The ordered edit plan for one invocation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct OperationPlan {
    operations: Vec<Operation>,
}

impl OperationPlan {
    /// Build the plan from the raw flag values.
    pub fn parse(set: &[String], insert: &[String], delete: &[String]) -> Result<Self> {
        let mut operations = Vec::with_capacity(set.len() + insert.len() + delete.len());

        for expr in set {
            let (path, value) = split_assignment("set", expr)?;
            operations.push(Operation::Set { path, value });
        }
        for expr in insert {
            let (path, value) = split_assignment("insert", expr)?;
            operations.push(Operation::Insert { path, value });
        }
        for expr in delete {
            operations.push(Operation::Delete {
                path: expr.trim().to_string(),
            });
        }

        Ok(Self { operations })
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Apply every operation in plan order, mutating `doc` in place.
    ///
    /// The first failure aborts the run; operations already applied are not
    /// rolled back. The caller only serializes on success, so a failed run
    /// never reaches the output file.
    pub fn apply(&self, doc: &mut Value) -> Result<()> {
        for op in &self.operations {
            match op {
                Operation::Set { path, value } => apply_set(doc, path, value)?,
                Operation::Insert { path, value } => apply_insert(doc, path, value)?,
                Operation::Delete { path } => apply_delete(doc, path)?,
            }
        }
        Ok(())
    }
}

fn apply_set(doc: &mut Value, path: &str, value: &str) -> Result<()> {
    // Expansion reads the document as it stands now, so earlier operations
    // in the same run have already shifted any lengths [*] depends on.
    for concrete in expand::expand(path, doc)? {
        let target = expand::rewrite(&concrete);
        document::set(doc, &target, parse_value(value))?;
    }
    Ok(())
}

// Insert carries no range fan-out: one concrete path per expression.
fn apply_insert(doc: &mut Value, path: &str, value: &str) -> Result<()> {
    let target = expand::rewrite(path);
    if document::get(doc, &target).is_some() {
        warn!("path '{}' already exists, skipping insert", target);
        return Ok(());
    }
    document::set(doc, &target, parse_value(value))
}

fn apply_delete(doc: &mut Value, path: &str) -> Result<()> {
    let target = expand::rewrite(path);
    document::delete(doc, &target)
}

/// Interpret the literal value text.
///
/// Text that parses as structured data in the document's native notation
/// (number, boolean, null, sequence, mapping) is written as that value;
/// anything else, including text that fails strict parse, is written as a
/// string scalar. Callers never need to quote plain strings.
fn parse_value(text: &str) -> Value {
    if text.is_empty() {
        return Value::String(String::new());
    }
    serde_yaml::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
