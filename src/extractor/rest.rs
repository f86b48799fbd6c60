use crate::detector::FrameworkDetector;
use crate::diagnostics::{DiagnosticsSink, FileOutcome, LogSink};
use crate::error::Result;
use crate::extractor::annotations::annotations_of;
use crate::extractor::params::{is_reference_type, map_parameters};
use crate::extractor::{
    BufferPolicy, ExtractorConfig, HttpMethod, RequestContext, RequestHandler, ServiceBlueprint,
    ServiceExtractor,
};
use crate::location::SourceLocation;
use crate::parser::{JavaParser, ParsedFile};
use crate::scanner::FileScanner;
use crate::type_resolver::TypeResolver;
use log::{debug, info};
use std::path::Path;
use tree_sitter::Node;

/// Annotation marking a service root on a class and a sub-path on a method.
const PATH_ANNOTATION: &str = "Path";

/// JAX-RS service extractor
#[derive(Debug, Clone, Default)]
pub struct RestServiceExtractor {
    config: ExtractorConfig,
}

impl ServiceExtractor for RestServiceExtractor {
    fn extract_blueprints(&self, project_dir: &Path) -> Vec<ServiceBlueprint> {
        let mut sink = LogSink::default();
        let blueprints = self.extract_with_diagnostics(project_dir, &mut sink);
        if sink.skipped_files > 0 {
            info!("Skipped {} unparsable files", sink.skipped_files);
        }
        blueprints
    }
}

/// Per-file traversal state, threaded through the walk by value.
#[derive(Debug)]
struct FileState {
    package_name: String,
    /// Path of the service root currently being merged
    class_root: Option<String>,
    /// Candidate buffers, innermost class last. The first entry belongs to the file itself.
    buffers: Vec<Vec<ServiceBlueprint>>,
    promoted: Vec<ServiceBlueprint>,
}

impl FileState {
    fn new() -> Self {
        Self {
            package_name: String::new(),
            class_root: None,
            buffers: vec![Vec::new()],
            promoted: Vec::new(),
        }
    }
}

impl RestServiceExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extracts blueprints from every matching file under `project_dir`, reporting the outcome
    /// of each file to `sink`.
    ///
    /// Files that cannot be read or parsed are skipped; this never fails.
    pub fn extract_with_diagnostics(
        &self,
        project_dir: &Path,
        sink: &mut dyn DiagnosticsSink,
    ) -> Vec<ServiceBlueprint> {
        info!("Extracting REST services from {}", project_dir.display());

        let mut result = Vec::new();
        let scanner =
            FileScanner::new(project_dir.to_path_buf()).with_extension(&self.config.extension);

        let warnings = scanner.explore(|depth, path, file| {
            debug!("Visiting {} (depth {})", path.display(), depth);
            match JavaParser::parse_reader(path, file) {
                Ok(parsed) => {
                    let blueprints = self.extract_parsed(&parsed);
                    sink.record(FileOutcome::Extracted {
                        path: path.to_path_buf(),
                        blueprints: blueprints.len(),
                    });
                    result.extend(blueprints);
                }
                Err(e) => sink.record(FileOutcome::Skipped {
                    path: path.to_path_buf(),
                    reason: e.into(),
                }),
            }
        });

        info!(
            "Extracted {} blueprints ({} walk warnings)",
            result.len(),
            warnings.len()
        );
        result
    }

    /// Extracts blueprints from one in-memory source file.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is not valid Java.
    pub fn extract_file(&self, path: &Path, source: &str) -> Result<Vec<ServiceBlueprint>> {
        let parsed = JavaParser::parse_source(path, source.to_string())?;
        Ok(self.extract_parsed(&parsed))
    }

    /// Walks one parsed file, then qualifies input types and tags the framework from the
    /// file's imports.
    pub fn extract_parsed(&self, file: &ParsedFile) -> Vec<ServiceBlueprint> {
        let state = self.visit_node(file, file.tree.root_node(), FileState::new());
        let mut blueprints = state.promoted;

        let resolver = TypeResolver::from_file(file);
        resolver.qualify_inputs(&mut blueprints);

        let framework = FrameworkDetector::new(&self.config.spring_marker).detect(resolver.imports());
        for blueprint in &mut blueprints {
            blueprint.framework = framework;
        }

        debug!(
            "Extracted {} blueprints from {}",
            blueprints.len(),
            file.path.display()
        );
        blueprints
    }

    fn visit_node(&self, file: &ParsedFile, node: Node<'_>, mut state: FileState) -> FileState {
        match node.kind() {
            "package_declaration" => {
                let mut cursor = node.walk();
                let name = node
                    .named_children(&mut cursor)
                    .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"));
                if let Some(name) = name {
                    state.package_name = file.text(name).to_string();
                }
                state
            }
            "class_declaration" | "interface_declaration" | "enum_declaration"
            | "record_declaration" => self.visit_type(file, node, state),
            // Bodies of named types are walked by `visit_type`, so this is an anonymous class
            "class_body" => self.visit_anonymous(file, node, state),
            "method_declaration" => {
                // Local and anonymous classes inside the body come first
                let state = self.visit_children(file, node, state);
                self.visit_method(file, node, state)
            }
            _ => self.visit_children(file, node, state),
        }
    }

    fn visit_children(&self, file: &ParsedFile, node: Node<'_>, state: FileState) -> FileState {
        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
        children
            .into_iter()
            .fold(state, |state, child| self.visit_node(file, child, state))
    }

    /// Buffers one candidate per HTTP verb annotation on a handler method.
    fn visit_method(&self, file: &ParsedFile, node: Node<'_>, mut state: FileState) -> FileState {
        let returns_reference = node
            .child_by_field_name("type")
            .is_some_and(is_reference_type);
        let Some(name_node) = node.child_by_field_name("name") else {
            return state;
        };
        if !returns_reference {
            return state;
        }

        let mut method_path = String::new();
        let mut verbs: Vec<HttpMethod> = Vec::new();
        for annotation in annotations_of(file, node) {
            if annotation.is_marker() {
                if let Some(verb) = HttpMethod::from_annotation(&annotation.name) {
                    if !verbs.contains(&verb) {
                        verbs.push(verb);
                    }
                }
            } else if annotation.name == PATH_ANNOTATION {
                if let Some(path) = annotation.single_string() {
                    method_path = path.to_string();
                }
            }
        }

        if verbs.is_empty() {
            return state;
        }

        let method_name = file.text(name_node).to_string();
        let line = node.start_position().row + 1;
        let inputs = node
            .child_by_field_name("parameters")
            .map(|params| map_parameters(file, params))
            .unwrap_or_default();

        let Some(buffer) = state.buffers.last_mut() else {
            return state;
        };
        for verb in verbs {
            let endpoint = format!("{}/{}", method_path, verb);
            debug!("Found handler {} -> {}", method_name, endpoint);
            let handler = RequestHandler {
                method_name: method_name.clone(),
                method: verb,
                line,
            };
            buffer.push(ServiceBlueprint::candidate(endpoint, handler, inputs.clone()));
        }

        state
    }

    /// Anonymous classes never carry a root annotation. Under the per-class policy their
    /// handlers are dropped like those of any other non-root class.
    fn visit_anonymous(
        &self,
        file: &ParsedFile,
        body: Node<'_>,
        mut state: FileState,
    ) -> FileState {
        if self.config.buffer_policy != BufferPolicy::PerClass {
            return self.visit_children(file, body, state);
        }

        state.buffers.push(Vec::new());
        state = self.visit_children(file, body, state);
        let dropped = state.buffers.pop().unwrap_or_default();
        if !dropped.is_empty() {
            debug!("Dropping {} handlers of an anonymous class", dropped.len());
        }
        state
    }

    /// Walks a class, interface, enum or record body, then merges the buffered candidates if the
    /// type carries a root `@Path("...")`.
    fn visit_type(&self, file: &ParsedFile, node: Node<'_>, mut state: FileState) -> FileState {
        let class_name = node
            .child_by_field_name("name")
            .map(|n| file.text(n).to_string())
            .unwrap_or_default();

        let root_path = annotations_of(file, node)
            .into_iter()
            .find(|a| a.name == PATH_ANNOTATION)
            .and_then(|a| a.single_string().map(str::to_string));

        let per_class = self.config.buffer_policy == BufferPolicy::PerClass;
        if per_class {
            state.buffers.push(Vec::new());
        }

        if let Some(body) = node.child_by_field_name("body") {
            state = self.visit_children(file, body, state);
        }

        let candidates = if per_class {
            state.buffers.pop().unwrap_or_default()
        } else {
            state.buffers.last().cloned().unwrap_or_default()
        };

        let Some(root_path) = root_path else {
            if !candidates.is_empty() && per_class {
                debug!(
                    "Dropping {} handlers of {}: no root @{} annotation",
                    candidates.len(),
                    class_name,
                    PATH_ANNOTATION
                );
            }
            return state;
        };

        let outer_root = state.class_root.replace(root_path);
        state = self.promote(file, &class_name, candidates, state);
        state.class_root = outer_root;
        state
    }

    /// Completes candidates with class-level data and moves them to the promoted list.
    fn promote(
        &self,
        file: &ParsedFile,
        class_name: &str,
        candidates: Vec<ServiceBlueprint>,
        mut state: FileState,
    ) -> FileState {
        let class_path = state.class_root.clone().unwrap_or_default();
        let location = SourceLocation::from_path(&file.path.to_string_lossy());

        debug!(
            "Service {} at {}: {} handlers",
            class_name,
            class_path,
            candidates.len()
        );

        for mut blueprint in candidates {
            blueprint.endpoint = format!("{}{}", class_path, blueprint.endpoint);
            blueprint.class_name = class_name.to_string();
            blueprint.package_name = state.package_name.clone();
            blueprint.request_context = RequestContext::new(&state.package_name, class_name);
            blueprint.source_dir = location.source_dir.clone();
            blueprint.output_dir = location.output_dir.clone();
            state.promoted.push(blueprint);
        }

        state
    }
}
