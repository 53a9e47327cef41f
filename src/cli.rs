//! Command-line surface and dispatch.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};

use crate::codec::{self, DocumentFormat};
use crate::ops::OperationPlan;

/// Command-line arguments for the injector tool.
///
/// At least one operation flag is required; clap rejects an empty run with
/// the usage text and a non-zero exit, same as a missing input file.
#[derive(Parser, Debug)]
#[command(name = "injector")]
#[command(about = "Edit YAML/JSON documents with path expressions")]
#[command(version)]
#[command(group(
    ArgGroup::new("operations")
        .args(["set", "insert", "delete"])
        .required(true)
        .multiple(true)
))]
pub struct Args {
    /// Input YAML/JSON file
    #[arg(short = 'f', long)]
    pub file: PathBuf,

    /// Output format: yaml, json, or save (write back to the input file)
    #[arg(short = 'o', long = "output-format", default_value = "yaml")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Set a value: path=value (replace if present, create if not)
    #[arg(long, value_name = "PATH=VALUE")]
    pub set: Vec<String>,

    /// Insert a value only if the path does not already exist: path=value
    #[arg(long, value_name = "PATH=VALUE")]
    pub insert: Vec<String>,

    /// Delete the value at path
    #[arg(long, value_name = "PATH")]
    pub delete: Vec<String>,
}

/// Where and how the edited document is written.
#[derive(Clone, Debug)]
pub enum OutputFormat {
    Yaml,
    Json,
    /// Re-encode in the input's inferred format and write back to the
    /// input file.
    Save,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            "save" => Ok(OutputFormat::Save),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Run one invocation: load, apply the plan, serialize, route the output.
pub fn execute(args: Args) -> Result<()> {
    let mut doc = codec::load(&args.file)?;

    let plan = OperationPlan::parse(&args.set, &args.insert, &args.delete)?;
    plan.apply(&mut doc)?;

    let (text, destination) = match args.format {
        OutputFormat::Yaml => (codec::encode(&doc, DocumentFormat::Yaml)?, args.out),
        OutputFormat::Json => (codec::encode(&doc, DocumentFormat::Json)?, args.out),
        OutputFormat::Save => (
            codec::encode(&doc, codec::detect_format(&args.file))?,
            Some(args.file.clone()),
        ),
    };

    match destination {
        Some(path) => {
            fs::write(&path, text)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            println!("Saved changes to {}", path.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}
