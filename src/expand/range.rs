//! Range-token parsing and expansion.
//!
//! A path expression may carry at most one bracketed range token: `[*]`,
//! `[N]`, `[N..M]`, or a comma-separated mixture of the last two. The
//! locator splits the expression around the first token; the resolver turns
//! the token into an ordered list of concrete paths, one per index. Only
//! `[*]` reads the document (it needs the live array length); every other
//! form expands from the expression text alone.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml_ng as serde_yaml;
use serde_yaml::Value;

use crate::error::{InjectorError, Result};

static RANGE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[(\*|\d+(?:\.\.\d+)?(?:,\d+(?:\.\.\d+)?)*)\]").expect("range token regex")
});

/// A parsed bracket body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeToken {
    /// `[*]` - every index of the array at the prefix path.
    Wildcard,
    /// Explicit indices and spans, in written order.
    Indices(Vec<IndexSpec>),
}

/// One comma-separated element of an explicit range token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSpec {
    Single(usize),
    /// Inclusive `start..end` span.
    Span(usize, usize),
}

/// A path expression split around its range token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPath {
    /// Segments before the bracket, without the adjoining dot. May be empty.
    pub prefix: String,
    pub token: RangeToken,
    /// Segments after the bracket, without the adjoining dot. May be empty,
    /// in which case concrete paths address the array element itself.
    pub suffix: String,
}

/// Locate the first range token in `path` and split around it.
///
/// Returns `Ok(None)` when the expression carries no bracket at all (it is
/// already concrete). Brackets that do not form a valid token are a parse
/// error rather than a literal segment.
pub fn locate(path: &str) -> Result<Option<SplitPath>> {
    let Some(caps) = RANGE_TOKEN.captures(path) else {
        if path.contains('[') || path.contains(']') {
            return Err(InjectorError::Parse(format!(
                "malformed range token in path '{path}'"
            )));
        }
        return Ok(None);
    };

    // captures() always has group 0, and group 1 is non-optional in the
    // pattern, so both lookups succeed whenever the regex matches.
    let (whole, body) = match (caps.get(0), caps.get(1)) {
        (Some(whole), Some(body)) => (whole, body),
        _ => {
            return Err(InjectorError::Parse(format!(
                "malformed range token in path '{path}'"
            )))
        }
    };

    let prefix = path[..whole.start()].trim_end_matches('.').to_string();
    let suffix = path[whole.end()..].trim_start_matches('.').to_string();
    let token = parse_body(body.as_str())?;

    Ok(Some(SplitPath {
        prefix,
        token,
        suffix,
    }))
}

fn parse_body(body: &str) -> Result<RangeToken> {
    if body == "*" {
        return Ok(RangeToken::Wildcard);
    }

    let mut specs = Vec::new();
    for part in body.split(',') {
        let part = part.trim();
        if let Some((start, end)) = part.split_once("..") {
            let start = parse_index(start)?;
            let end = parse_index(end)?;
            if start > end {
                return Err(InjectorError::Parse(format!(
                    "start index {start} is greater than end index {end}"
                )));
            }
            specs.push(IndexSpec::Span(start, end));
        } else {
            specs.push(IndexSpec::Single(parse_index(part)?));
        }
    }

    Ok(RangeToken::Indices(specs))
}

fn parse_index(text: &str) -> Result<usize> {
    text.parse::<usize>()
        .map_err(|_| InjectorError::Parse(format!("invalid array index '{text}'")))
}

/// Expand a split path into concrete paths, one per resolved index.
///
/// Explicit indices are emitted in written order, spans and `[*]` ascending.
/// Indices are not checked against the live array length here; an
/// out-of-range index surfaces later from the document primitive. Lengths
/// read for `[*]` are a snapshot: edits applied afterwards in the same run
/// do not renumber the remaining paths.
pub fn resolve(split: &SplitPath, doc: &Value) -> Result<Vec<String>> {
    let indices: Vec<usize> = match &split.token {
        RangeToken::Wildcard => (0..wildcard_len(doc, &split.prefix)?).collect(),
        RangeToken::Indices(specs) => specs
            .iter()
            .flat_map(|spec| match spec {
                IndexSpec::Single(i) => vec![*i],
                IndexSpec::Span(start, end) => (*start..=*end).collect(),
            })
            .collect(),
    };

    Ok(indices
        .into_iter()
        .map(|i| join_concrete(&split.prefix, i, &split.suffix))
        .collect())
}

fn join_concrete(prefix: &str, index: usize, suffix: &str) -> String {
    match (prefix.is_empty(), suffix.is_empty()) {
        (true, true) => index.to_string(),
        (true, false) => format!("{index}.{suffix}"),
        (false, true) => format!("{prefix}.{index}"),
        (false, false) => format!("{prefix}.{index}.{suffix}"),
    }
}

// Navigate the prefix with object-member lookups only and return the length
// of the array found there.
fn wildcard_len(doc: &Value, prefix: &str) -> Result<usize> {
    let mut current = doc;

    for part in prefix.split('.').filter(|p| !p.is_empty()) {
        match current {
            Value::Mapping(map) => {
                let key = Value::String(part.to_string());
                current = map.get(&key).ok_or_else(|| {
                    InjectorError::Document(format!("path '{prefix}' not found"))
                })?;
            }
            _ => {
                return Err(InjectorError::Document(format!(
                    "path '{prefix}' is not an object"
                )))
            }
        }
    }

    match current {
        Value::Sequence(seq) => Ok(seq.len()),
        _ => Err(InjectorError::Document(format!(
            "path '{prefix}' is not an array"
        ))),
    }
}
