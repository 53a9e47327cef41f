//! Tree primitives over the document model.
//!
//! Set, get, and delete keyed by concrete dotted paths. Mappings are
//! navigated by key and sequences by numeric index; the append sentinel `-`
//! means past-the-end (push on set, last element on get/delete). A segment
//! is interpreted against the container it lands on, so a numeric segment
//! is still an ordinary key when the container is a mapping.

use serde_yaml_ng as serde_yaml;
use serde_yaml::{Mapping, Value};

use crate::error::{InjectorError, Result};
use crate::expand::APPEND_SEGMENT;

/// Set the value at `path`, creating intermediate containers as needed.
///
/// Missing intermediates become a mapping for a name segment and a sequence
/// for a numeric or sentinel segment. Setting an index at or past a
/// sequence's length extends it, padding any gap with nulls.
pub fn set(doc: &mut Value, path: &str, new_value: Value) -> Result<()> {
    let parts: Vec<&str> = split_path(path);
    if parts.is_empty() {
        return Err(InjectorError::Document("empty path".to_string()));
    }
    set_recursive(doc, &parts, new_value)
}

fn set_recursive(value: &mut Value, parts: &[&str], new_value: Value) -> Result<()> {
    let part = parts[0];

    if parts.len() == 1 {
        return match value {
            Value::Mapping(map) => {
                map.insert(Value::String(part.to_string()), new_value);
                Ok(())
            }
            Value::Sequence(seq) => {
                if part == APPEND_SEGMENT {
                    seq.push(new_value);
                } else {
                    let index = parse_index(part)?;
                    if index >= seq.len() {
                        seq.resize(index + 1, Value::Null);
                    }
                    seq[index] = new_value;
                }
                Ok(())
            }
            Value::Null => {
                *value = empty_container(part);
                set_recursive(value, parts, new_value)
            }
            _ => Err(InjectorError::Document(format!(
                "cannot set field '{part}' on a scalar"
            ))),
        };
    }

    match value {
        Value::Mapping(map) => {
            let key = Value::String(part.to_string());
            match map.get_mut(&key) {
                Some(nested) => set_recursive(nested, &parts[1..], new_value)?,
                None => {
                    let mut nested = empty_container(parts[1]);
                    set_recursive(&mut nested, &parts[1..], new_value)?;
                    map.insert(key, nested);
                }
            }
        }
        Value::Sequence(seq) => {
            if part == APPEND_SEGMENT {
                let mut nested = empty_container(parts[1]);
                set_recursive(&mut nested, &parts[1..], new_value)?;
                seq.push(nested);
            } else {
                let index = parse_index(part)?;
                if index >= seq.len() {
                    seq.resize(index + 1, Value::Null);
                }
                set_recursive(&mut seq[index], &parts[1..], new_value)?;
            }
        }
        Value::Null => {
            *value = empty_container(part);
            set_recursive(value, parts, new_value)?;
        }
        _ => {
            return Err(InjectorError::Document(format!(
                "cannot navigate '{part}' on a scalar"
            )))
        }
    }

    Ok(())
}

/// Look up the value at `path`, or `None` when any segment is absent.
pub fn get<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = doc;

    for part in split_path(path) {
        current = match current {
            Value::Mapping(map) => map.get(Value::String(part.to_string()))?,
            Value::Sequence(seq) => {
                if part == APPEND_SEGMENT {
                    seq.last()?
                } else {
                    seq.get(part.parse::<usize>().ok()?)?
                }
            }
            _ => return None,
        };
    }

    Some(current)
}

/// Remove the value at `path`. A missing path is an error, not a no-op.
pub fn delete(doc: &mut Value, path: &str) -> Result<()> {
    let parts: Vec<&str> = split_path(path);
    if parts.is_empty() {
        return Err(InjectorError::Document("empty path".to_string()));
    }
    delete_recursive(doc, &parts, path)
}

fn delete_recursive(value: &mut Value, parts: &[&str], full_path: &str) -> Result<()> {
    let part = parts[0];

    if parts.len() == 1 {
        return match value {
            Value::Mapping(map) => {
                let key = Value::String(part.to_string());
                if map.remove(&key).is_none() {
                    return Err(not_found(full_path));
                }
                Ok(())
            }
            Value::Sequence(seq) => {
                if part == APPEND_SEGMENT {
                    if seq.pop().is_none() {
                        return Err(not_found(full_path));
                    }
                } else {
                    let index = parse_index(part)?;
                    if index >= seq.len() {
                        return Err(not_found(full_path));
                    }
                    seq.remove(index);
                }
                Ok(())
            }
            _ => Err(not_found(full_path)),
        };
    }

    match value {
        Value::Mapping(map) => {
            let key = Value::String(part.to_string());
            match map.get_mut(&key) {
                Some(nested) => delete_recursive(nested, &parts[1..], full_path),
                None => Err(not_found(full_path)),
            }
        }
        Value::Sequence(seq) => {
            let index = if part == APPEND_SEGMENT {
                seq.len().checked_sub(1).ok_or_else(|| not_found(full_path))?
            } else {
                parse_index(part)?
            };
            match seq.get_mut(index) {
                Some(nested) => delete_recursive(nested, &parts[1..], full_path),
                None => Err(not_found(full_path)),
            }
        }
        _ => Err(not_found(full_path)),
    }
}

fn split_path(path: &str) -> Vec<&str> {
    path.split('.').filter(|p| !p.is_empty()).collect()
}

fn parse_index(part: &str) -> Result<usize> {
    part.parse::<usize>().map_err(|_| {
        InjectorError::Document(format!("cannot index an array with '{part}'"))
    })
}

fn not_found(path: &str) -> InjectorError {
    InjectorError::Document(format!("path '{path}' not found"))
}

// The container a missing intermediate should become, judged by the segment
// that will index into it.
fn empty_container(next_part: &str) -> Value {
    if next_part == APPEND_SEGMENT || next_part.parse::<usize>().is_ok() {
        Value::Sequence(Vec::new())
    } else {
        Value::Mapping(Mapping::new())
    }
}
