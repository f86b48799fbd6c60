use crate::diagnostics::LogSink;
use crate::error::Error;
use crate::extractor::rest::RestServiceExtractor;
use crate::extractor::{BufferPolicy, ExtractorConfig};
use crate::serializer::{serialize_json, serialize_yaml, write_to_file};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::PathBuf;

/// Extract REST service blueprints from JAX-RS annotated Java projects
#[derive(Parser, Debug)]
#[command(name = "blueprints-from-source")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the Java project directory
    #[arg(value_name = "PROJECT_PATH")]
    pub project_path: PathBuf,

    /// Extension of the source files to scan
    #[arg(short = 'e', long = "extension", default_value = "java")]
    pub extension: String,

    /// Output format (yaml or json)
    #[arg(short = 'f', long = "format", value_enum, default_value = "yaml")]
    pub output_format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// How handlers are assigned to service classes when a file declares several
    #[arg(long = "buffer-policy", value_enum, default_value = "per-class")]
    pub buffer_policy: BufferPolicy,

    /// Import substring that marks a file as Spring based
    #[arg(long = "spring-marker", default_value = "org.springframework")]
    pub spring_marker: String,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// YAML format
    Yaml,
    /// JSON format
    Json,
}

impl CliArgs {
    /// Extractor settings selected by the flags.
    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig {
            extension: self.extension.trim_start_matches('.').to_string(),
            spring_marker: self.spring_marker.clone(),
            buffer_policy: self.buffer_policy,
        }
    }
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.project_path.exists() {
        return Err(Error::InvalidArgument(format!(
            "Project path does not exist: {}",
            args.project_path.display()
        ))
        .into());
    }

    if !args.project_path.is_dir() {
        return Err(Error::InvalidArgument(format!(
            "Project path is not a directory: {}",
            args.project_path.display()
        ))
        .into());
    }

    if args.extension.trim_start_matches('.').is_empty() {
        return Err(Error::InvalidArgument("File extension must not be empty".to_string()).into());
    }

    info!("Project path: {}", args.project_path.display());
    info!("Output format: {:?}", args.output_format);
    if let Some(ref output) = args.output_path {
        info!("Output file: {}", output.display());
    } else {
        info!("Output: stdout");
    }
    info!("Buffer policy: {:?}", args.buffer_policy);

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    let extractor = RestServiceExtractor::new(args.extractor_config());

    // Step 1: Walk, parse and extract
    let mut sink = LogSink::default();
    let blueprints = extractor.extract_with_diagnostics(&args.project_path, &mut sink);

    if blueprints.is_empty() {
        log::warn!("No REST services found in the project");
    }
    for blueprint in &blueprints {
        debug!(
            "{} -> {}#{}",
            blueprint.endpoint, blueprint.request_context.qualified_class, blueprint.handler.method_name
        );
    }

    // Step 2: Serialize to requested format
    info!("Serializing to {:?} format...", args.output_format);
    let content = match args.output_format {
        OutputFormat::Yaml => serialize_yaml(&blueprints)?,
        OutputFormat::Json => serialize_json(&blueprints)?,
    };

    // Step 3: Output to file or stdout
    if let Some(output_path) = &args.output_path {
        write_to_file(&content, output_path)?;
        info!("Wrote blueprints to {}", output_path.display());
    } else {
        println!("{}", content);
    }

    info!("Summary:");
    info!("  - Files extracted: {}", sink.extracted_files);
    info!("  - Files skipped: {}", sink.skipped_files);
    info!("  - Blueprints found: {}", blueprints.len());

    Ok(())
}
