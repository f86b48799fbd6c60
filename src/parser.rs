use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser, Tree};

/// Syntax-tree parser for Java source files.
///
/// The `JavaParser` uses `tree-sitter` with the Java grammar to turn source text into a concrete
/// syntax tree exposing package, import, type and method declarations together with their
/// annotations.
///
/// tree-sitter recovers from syntax errors by inserting error nodes. A tree that contains any
/// error or missing node is rejected here, so a malformed file never contributes half-parsed
/// declarations.
///
/// # Example
///
/// ```no_run
/// use blueprints_from_source::parser::JavaParser;
/// use std::path::Path;
///
/// let parsed = JavaParser::parse_file(Path::new("src/main/java/Api.java")).unwrap();
/// println!("Root node: {}", parsed.tree.root_node().kind());
/// ```
pub struct JavaParser;

/// A successfully parsed Java file with its syntax tree.
///
/// The tree only stores byte ranges, so the source text is kept alongside it.
#[derive(Debug)]
pub struct ParsedFile {
    /// Path to the source file
    pub path: PathBuf,
    /// The original source text
    pub source: String,
    /// The parsed syntax tree
    pub tree: Tree,
}

impl ParsedFile {
    /// Text covered by `node`.
    pub fn text(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }
}

impl JavaParser {
    /// Reads and parses a single Java source file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read or is not valid UTF-8
    /// - The file contains invalid Java syntax
    pub fn parse_file(path: &Path) -> Result<ParsedFile> {
        debug!("Parsing file: {}", path.display());

        let source = fs::read_to_string(path).map_err(|source| Error::IoError {
            file: path.to_path_buf(),
            source,
        })?;

        Self::parse_source(path, source)
    }

    /// Parses source text read from an already opened handle.
    pub fn parse_reader<R: Read>(path: &Path, mut reader: R) -> Result<ParsedFile> {
        let mut source = String::new();
        reader
            .read_to_string(&mut source)
            .map_err(|source| Error::IoError {
                file: path.to_path_buf(),
                source,
            })?;

        Self::parse_source(path, source)
    }

    /// Parses in-memory source text. `path` is only used for reporting.
    pub fn parse_source(path: &Path, source: String) -> Result<ParsedFile> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|e| Error::ParseError {
                file: path.to_path_buf(),
                message: format!("failed to load Java grammar: {}", e),
            })?;

        let tree = parser.parse(&source, None).ok_or_else(|| Error::ParseError {
            file: path.to_path_buf(),
            message: "parser returned no tree".to_string(),
        })?;

        if let Some(bad) = first_error(tree.root_node()) {
            let position = bad.start_position();
            return Err(Error::ParseError {
                file: path.to_path_buf(),
                message: format!(
                    "syntax error at line {}, column {}",
                    position.row + 1,
                    position.column + 1
                ),
            });
        }

        debug!("Successfully parsed file: {}", path.display());

        Ok(ParsedFile {
            path: path.to_path_buf(),
            source,
            tree,
        })
    }
}

/// Depth-first search for the first error or missing node.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if !node.has_error() {
        return None;
    }
    if node.is_error() || node.is_missing() {
        return Some(node);
    }

    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .find_map(first_error)
        .or(Some(node))
}
