//! Blueprint extractor - command-line tool for discovering REST services in Java projects.
//!
//! Walks a project tree, finds JAX-RS annotated service classes and writes one blueprint per
//! endpoint for downstream code generators.
//!
//! # Usage
//!
//! ```bash
//! blueprints-from-source [OPTIONS] <PROJECT_PATH>
//! ```
//!
//! # Examples
//!
//! Print blueprints as YAML:
//! ```bash
//! blueprints-from-source ./my-service
//! ```
//!
//! Write JSON to a file:
//! ```bash
//! blueprints-from-source ./my-service -f json -o blueprints.json
//! ```
//!
//! Enable verbose logging:
//! ```bash
//! blueprints-from-source ./my-service -v
//! ```

use anyhow::Result;
use blueprints_from_source::cli;
use clap::Parser;
use log::info;

fn main() -> Result<()> {
    let args = cli::CliArgs::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Blueprint extractor starting...");

    let args = cli::parse_args_from_parsed(args)?;
    cli::run(args)?;

    info!("Blueprint extraction completed successfully");

    Ok(())
}
