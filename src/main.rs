use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use injector::cli::{self, Args};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    cli::execute(args)
}
