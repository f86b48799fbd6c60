//! Reading Java annotations off declaration nodes.

use crate::parser::ParsedFile;
use tree_sitter::Node;

/// An annotation as written on a declaration, e.g. `@Path("/users")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Simple name; `@javax.ws.rs.GET` yields `GET`
    pub name: String,
    pub args: AnnotationArgs,
}

/// Shape of an annotation's argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationArgs {
    /// No arguments
    Marker,
    /// Exactly one unnamed argument; holds its value when it is a string literal
    Single(Option<String>),
    /// Named pairs or several values
    Other,
}

impl Annotation {
    /// The string literal of a single-value annotation.
    pub fn single_string(&self) -> Option<&str> {
        match &self.args {
            AnnotationArgs::Single(Some(value)) => Some(value),
            _ => None,
        }
    }

    pub fn is_marker(&self) -> bool {
        self.args == AnnotationArgs::Marker
    }
}

/// Annotations attached to a class, interface, method or parameter declaration, in source order.
pub fn annotations_of(file: &ParsedFile, decl: Node<'_>) -> Vec<Annotation> {
    let mut cursor = decl.walk();
    let modifiers = decl
        .children(&mut cursor)
        .find(|child| child.kind() == "modifiers");

    let Some(modifiers) = modifiers else {
        return Vec::new();
    };

    let mut cursor = modifiers.walk();
    let annotations = modifiers
        .children(&mut cursor)
        .filter(|child| matches!(child.kind(), "marker_annotation" | "annotation"))
        .filter_map(|node| read_annotation(file, node))
        .collect();
    annotations
}

fn read_annotation(file: &ParsedFile, node: Node<'_>) -> Option<Annotation> {
    let name_node = node.child_by_field_name("name")?;
    let name = simple_name(file.text(name_node)).to_string();

    let args = match node.child_by_field_name("arguments") {
        None => AnnotationArgs::Marker,
        Some(list) => {
            let mut cursor = list.walk();
            let values: Vec<Node<'_>> = list
                .named_children(&mut cursor)
                .filter(|child| !child.kind().ends_with("comment"))
                .collect();
            match values.as_slice() {
                [] => AnnotationArgs::Marker,
                [value] if value.kind() != "element_value_pair" => {
                    AnnotationArgs::Single(string_literal(file, *value))
                }
                _ => AnnotationArgs::Other,
            }
        }
    };

    Some(Annotation { name, args })
}

/// Value of a string literal node with its quotes removed. Escapes are kept as written.
pub fn string_literal(file: &ParsedFile, node: Node<'_>) -> Option<String> {
    if node.kind() != "string_literal" {
        return None;
    }

    let text = file.text(node);
    let value = text
        .strip_prefix("\"\"\"")
        .and_then(|t| t.strip_suffix("\"\"\""))
        .or_else(|| text.strip_prefix('"').and_then(|t| t.strip_suffix('"')))?;
    Some(value.to_string())
}

/// Last dot-delimited segment of a possibly qualified name.
pub fn simple_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::JavaParser;
    use std::path::Path;

    fn parse(code: &str) -> ParsedFile {
        JavaParser::parse_source(Path::new("Test.java"), code.to_string())
            .expect("Failed to parse test code")
    }

    fn class_node(file: &ParsedFile) -> Node<'_> {
        file.tree.root_node().named_child(0).unwrap()
    }

    #[test]
    fn test_marker_and_single_value_annotations() {
        let file = parse(
            r#"
            @Path("/users")
            @Deprecated
            @javax.inject.Singleton
            public class Api {}
            "#,
        );

        let annotations = annotations_of(&file, class_node(&file));

        assert_eq!(annotations.len(), 3);
        assert_eq!(annotations[0].name, "Path");
        assert_eq!(annotations[0].single_string(), Some("/users"));
        assert!(annotations[1].is_marker());
        assert_eq!(annotations[2].name, "Singleton");
    }

    #[test]
    fn test_non_literal_and_named_arguments() {
        let file = parse(
            r#"
            @Path(Routes.USERS)
            @Produces(value = "application/json")
            @Consumes({"a", "b"})
            public class Api {}
            "#,
        );

        let annotations = annotations_of(&file, class_node(&file));

        assert_eq!(annotations[0].args, AnnotationArgs::Single(None));
        assert_eq!(annotations[0].single_string(), None);
        assert_eq!(annotations[1].args, AnnotationArgs::Other);
        assert_eq!(annotations[2].args, AnnotationArgs::Single(None));
    }

    #[test]
    fn test_empty_parentheses_count_as_marker() {
        let file = parse("@GET() class Api {}");
        let annotations = annotations_of(&file, class_node(&file));
        assert!(annotations[0].is_marker());
    }

    #[test]
    fn test_declaration_without_modifiers() {
        let file = parse("class Api {}");
        assert!(annotations_of(&file, class_node(&file)).is_empty());
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(simple_name("javax.ws.rs.Path"), "Path");
        assert_eq!(simple_name("GET"), "GET");
    }
}
