use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InjectorError {
    /// Malformed path expression: bad bracket token, reversed range,
    /// missing `=` in an assignment.
    Parse(String),
    /// The document's shape does not match the path: missing segment,
    /// indexing into a non-array, setting a field on a scalar.
    Document(String),
    Serialization(String),
    Io(#[from] std::io::Error),
    Other(#[from] anyhow::Error),
}

impl Display for InjectorError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            InjectorError::Parse(s) => write!(f, "Path expression error: {}", s),
            InjectorError::Document(s) => write!(f, "Document error: {}", s),
            InjectorError::Serialization(s) => write!(f, "Serialization error: {}", s),
            InjectorError::Io(e) => write!(f, "I/O error: {}", e),
            InjectorError::Other(e) => write!(f, "Other error: {}", e),
        }
    }
}

impl From<serde_yaml_ng::Error> for InjectorError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        InjectorError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for InjectorError {
    fn from(err: serde_json::Error) -> Self {
        InjectorError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, InjectorError>;
