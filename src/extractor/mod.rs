//! Service extraction module for discovering REST endpoints in Java sources.
//!
//! This module defines the blueprint data model handed to downstream code generators, and the
//! [`ServiceExtractor`] interface implemented by [`rest::RestServiceExtractor`], which walks a
//! project tree and recognizes JAX-RS style annotations.
//!
//! # Example
//!
//! ```no_run
//! use blueprints_from_source::extractor::{ServiceExtractor, rest::RestServiceExtractor};
//! use std::path::Path;
//!
//! let extractor = RestServiceExtractor::default();
//! let blueprints = extractor.extract_blueprints(Path::new("./my-service"));
//! println!("Found {} endpoints", blueprints.len());
//! ```

pub mod annotations;
pub mod params;
pub mod rest;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Trait for extracting service blueprints from a project directory.
///
/// Implementations are total: any input directory yields a collection, possibly empty.
/// Problems with individual files are absorbed by the implementation.
pub trait ServiceExtractor {
    /// Extracts every blueprint found under `project_dir`.
    fn extract_blueprints(&self, project_dir: &Path) -> Vec<ServiceBlueprint>;
}

/// Complete description of a single discovered endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBlueprint {
    /// Class path, method path and verb joined together (e.g. "/users/{id}/GET")
    pub endpoint: String,
    /// The HTTP method for this endpoint
    pub method: HttpMethod,
    /// Simple name of the class declaring the handler
    pub class_name: String,
    /// Package of the declaring class, empty for the default package
    pub package_name: String,
    /// Inputs mapped from the handler's parameter list, in declaration order
    pub inputs: Vec<InputParam>,
    pub handler: RequestHandler,
    pub request_context: RequestContext,
    pub framework: Framework,
    /// Source root the declaring file belongs to
    pub source_dir: String,
    /// Directory generated code for this endpoint is written to
    pub output_dir: String,
}

impl ServiceBlueprint {
    /// Creates a candidate for a handler method. Class-level fields are filled in on merge.
    pub fn candidate(endpoint: String, handler: RequestHandler, inputs: Vec<InputParam>) -> Self {
        Self {
            endpoint,
            method: handler.method,
            class_name: String::new(),
            package_name: String::new(),
            inputs,
            handler,
            request_context: RequestContext::default(),
            framework: Framework::Default,
            source_dir: String::new(),
            output_dir: String::new(),
        }
    }
}

/// HTTP methods recognized as marker annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
    Patch,
}

impl HttpMethod {
    /// Looks up the verb for a marker annotation name. Names are matched exactly.
    pub fn from_annotation(name: &str) -> Option<Self> {
        match name {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "DELETE" => Some(HttpMethod::Delete),
            "HEAD" => Some(HttpMethod::Head),
            "OPTIONS" => Some(HttpMethod::Options),
            "PATCH" => Some(HttpMethod::Patch),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One handler parameter mapped to a wire input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputParam {
    /// Declared parameter name
    pub name: String,
    /// Key the value travels under on the wire
    pub key: String,
    /// Simple type name, or the qualified name once resolved through an import
    pub data_type: String,
    pub origin: ParamOrigin,
}

impl InputParam {
    pub fn new(name: String, key: String, data_type: String, origin: ParamOrigin) -> Self {
        Self {
            name,
            key,
            data_type,
            origin,
        }
    }
}

/// Where a parameter value is taken from in an HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParamOrigin {
    Path,
    Query,
    Header,
    Cookie,
    Form,
    Matrix,
    /// Request body, also used for unannotated parameters
    Body,
}

impl ParamOrigin {
    /// Looks up the origin for a parameter annotation name, falling back to `Body`.
    pub fn from_annotation(name: &str) -> Self {
        match name {
            "PathParam" | "PathVariable" => ParamOrigin::Path,
            "QueryParam" | "RequestParam" => ParamOrigin::Query,
            "HeaderParam" | "RequestHeader" => ParamOrigin::Header,
            "CookieParam" | "CookieValue" => ParamOrigin::Cookie,
            "FormParam" => ParamOrigin::Form,
            "MatrixParam" => ParamOrigin::Matrix,
            _ => ParamOrigin::Body,
        }
    }
}

/// Web framework idiom a source file follows, derived from its imports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Framework {
    #[default]
    Default,
    Spring,
}

/// The method invoked for a blueprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestHandler {
    pub method_name: String,
    pub method: HttpMethod,
    /// 1-based line where the method declaration starts, including its annotations
    pub line: usize,
}

/// The class a handler is invoked on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Fully-qualified class name (`package.Class`)
    pub qualified_class: String,
}

impl RequestContext {
    pub fn new(package_name: &str, class_name: &str) -> Self {
        let qualified_class = if package_name.is_empty() {
            class_name.to_string()
        } else {
            format!("{}.{}", package_name, class_name)
        };
        Self { qualified_class }
    }
}

/// How candidates buffered while walking a file are assigned to service classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum BufferPolicy {
    /// Each class owns the candidates of its own body. Candidates of a class without a root
    /// annotation are dropped when the class ends.
    #[default]
    PerClass,
    /// One buffer per file. Every root class re-prefixes and promotes the whole buffer, so a
    /// file with several root classes yields every handler once per class.
    SharedFile,
}

/// Settings for [`rest::RestServiceExtractor`].
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Extension of candidate source files, without the dot
    pub extension: String,
    /// Import substring marking a file as Spring based
    pub spring_marker: String,
    pub buffer_policy: BufferPolicy,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            extension: "java".to_string(),
            spring_marker: "org.springframework".to_string(),
            buffer_policy: BufferPolicy::default(),
        }
    }
}
