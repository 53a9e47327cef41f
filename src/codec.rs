//! Decoding, re-encoding, and format inference.
//!
//! Both YAML and JSON input decode into the same `serde_yaml_ng::Value`
//! model so the mutation code has one representation to work with. The
//! input format is inferred from the file extension; the output format is
//! the caller's choice.

use std::fs;
use std::path::Path;

use serde_yaml_ng as serde_yaml;
use serde_yaml::Value;

use crate::error::{InjectorError, Result};

/// Wire format of a document file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

/// Infer the format from the file extension: `.json` is JSON, anything
/// else (including `.yaml` and `.yml`) is YAML.
pub fn detect_format(file: &Path) -> DocumentFormat {
    match file.extension().and_then(|ext| ext.to_str()) {
        Some("json") => DocumentFormat::Json,
        _ => DocumentFormat::Yaml,
    }
}

/// Read and decode a document file into the value model.
pub fn load(file: &Path) -> Result<Value> {
    let content = fs::read_to_string(file)
        .map_err(|e| InjectorError::Io(std::io::Error::new(e.kind(), format!("{}: {e}", file.display()))))?;

    match detect_format(file) {
        DocumentFormat::Yaml => serde_yaml::from_str(&content)
            .map_err(|e| InjectorError::Serialization(format!("invalid YAML in {}: {e}", file.display()))),
        DocumentFormat::Json => {
            let json: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
                InjectorError::Serialization(format!("invalid JSON in {}: {e}", file.display()))
            })?;
            // Convert via string to avoid type compatibility issues between
            // the two value models.
            let yaml = serde_yaml::to_string(&json)?;
            serde_yaml::from_str(&yaml).map_err(|e| {
                InjectorError::Serialization(format!("failed to convert JSON document: {e}"))
            })
        }
    }
}

/// Encode the document in the requested wire format.
pub fn encode(doc: &Value, format: DocumentFormat) -> Result<String> {
    match format {
        DocumentFormat::Yaml => Ok(serde_yaml::to_string(doc)?),
        DocumentFormat::Json => {
            let mut json = serde_json::to_string_pretty(doc)?;
            json.push('\n');
            Ok(json)
        }
    }
}
