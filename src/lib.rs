//! Blueprint extractor - discovers REST services in JAX-RS annotated Java projects.
//!
//! This library scans a Java project, parses every source file and produces one
//! [`ServiceBlueprint`](extractor::ServiceBlueprint) per REST endpoint: its path, HTTP verb,
//! parameters, handler method and source location. Blueprints are meant for downstream code
//! generators that expose the same endpoints over another transport.
//!
//! # Architecture
//!
//! 1. [`scanner`] - Recursively walks project directories for source files
//! 2. [`parser`] - Parses Java sources into tree-sitter syntax trees
//! 3. [`extractor`] - Recognizes service annotations and builds blueprints
//! 4. [`type_resolver`] - Qualifies parameter types through the file's imports
//! 5. [`detector`] - Classifies the web framework a file follows
//! 6. [`location`] - Derives source-root and output directories from file paths
//! 7. [`diagnostics`] - Reports which files were extracted or skipped
//! 8. [`serializer`] - Writes blueprints as YAML or JSON
//!
//! # Example Usage
//!
//! ```no_run
//! use blueprints_from_source::{
//!     diagnostics::FileOutcome,
//!     extractor::{rest::RestServiceExtractor, ExtractorConfig},
//!     serializer::serialize_yaml,
//! };
//! use std::path::Path;
//!
//! let extractor = RestServiceExtractor::new(ExtractorConfig::default());
//! let mut outcomes: Vec<FileOutcome> = Vec::new();
//! let blueprints = extractor.extract_with_diagnostics(Path::new("./my-service"), &mut outcomes);
//!
//! for skipped in outcomes.iter().filter(|o| o.is_skipped()) {
//!     eprintln!("skipped {}", skipped.path().display());
//! }
//! println!("{}", serialize_yaml(&blueprints).unwrap());
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module.

pub mod cli;
pub mod scanner;
pub mod parser;
pub mod detector;
pub mod extractor;
pub mod type_resolver;
pub mod location;
pub mod diagnostics;
pub mod serializer;
pub mod error;
