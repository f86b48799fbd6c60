//! Mapping handler parameter lists to wire inputs.

use super::annotations::annotations_of;
use super::{InputParam, ParamOrigin};
use crate::parser::ParsedFile;
use log::debug;
use tree_sitter::Node;

/// Maps the `formal_parameters` node of a method to its inputs, in declaration order.
///
/// A parameter with a single-value annotation carrying a string literal (for example
/// `@PathParam("id")`) takes its wire key from the literal and its origin from the annotation
/// name. Any other parameter is keyed by its own name and read from the body.
pub fn map_parameters(file: &ParsedFile, parameters: Node<'_>) -> Vec<InputParam> {
    let mut cursor = parameters.walk();
    let declared: Vec<Node<'_>> = parameters
        .named_children(&mut cursor)
        .filter(|p| matches!(p.kind(), "formal_parameter" | "spread_parameter"))
        .collect();

    declared
        .into_iter()
        .filter_map(|param| map_parameter(file, param))
        .collect()
}

fn map_parameter(file: &ParsedFile, param: Node<'_>) -> Option<InputParam> {
    let (type_node, name_node) = parameter_parts(param)?;
    let name = file.text(name_node).to_string();
    let data_type = simple_type_name(file, type_node);

    let keyed = annotations_of(file, param).into_iter().find_map(|annotation| {
        annotation
            .single_string()
            .map(|key| (key.to_string(), ParamOrigin::from_annotation(&annotation.name)))
    });

    let (key, origin) = keyed.unwrap_or_else(|| (name.clone(), ParamOrigin::Body));
    debug!("Mapped parameter {} -> {} ({:?}, {})", name, key, origin, data_type);

    Some(InputParam::new(name, key, data_type, origin))
}

/// Type and name nodes of a `formal_parameter` or varargs `spread_parameter`.
fn parameter_parts(param: Node<'_>) -> Option<(Node<'_>, Node<'_>)> {
    if param.kind() == "formal_parameter" {
        return Some((
            param.child_by_field_name("type")?,
            param.child_by_field_name("name")?,
        ));
    }

    let mut cursor = param.walk();
    let children: Vec<Node<'_>> = param.named_children(&mut cursor).collect();
    let type_node = children
        .iter()
        .find(|c| c.kind() != "modifiers" && c.kind() != "variable_declarator")?;
    let name_node = children
        .iter()
        .find(|c| c.kind() == "variable_declarator")?
        .child_by_field_name("name")?;
    Some((*type_node, name_node))
}

/// Name a declared type is reported under before import resolution.
///
/// Primitives keep their keyword, generic types their base name (`List` for `List<Foo>`).
/// Arrays and qualified types are passed through as written.
pub fn simple_type_name(file: &ParsedFile, type_node: Node<'_>) -> String {
    match type_node.kind() {
        "generic_type" => type_node
            .named_child(0)
            .map(|base| file.text(base).to_string())
            .unwrap_or_else(|| file.text(type_node).to_string()),
        _ => file.text(type_node).to_string(),
    }
}

/// Whether a declared type is a reference type, as opposed to a primitive or `void`.
pub fn is_reference_type(type_node: Node<'_>) -> bool {
    matches!(
        type_node.kind(),
        "type_identifier" | "scoped_type_identifier" | "generic_type" | "array_type"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::JavaParser;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn parse(code: &str) -> ParsedFile {
        JavaParser::parse_source(Path::new("Test.java"), code.to_string())
            .expect("Failed to parse test code")
    }

    fn inputs_of_first_method(code: &str) -> Vec<InputParam> {
        let file = parse(code);
        let class = file.tree.root_node().named_child(0).unwrap();
        let body = class.child_by_field_name("body").unwrap();
        let method = body.named_child(0).unwrap();
        let params = method.child_by_field_name("parameters").unwrap();
        map_parameters(&file, params)
    }

    fn input(name: &str, key: &str, data_type: &str, origin: ParamOrigin) -> InputParam {
        InputParam::new(name.to_string(), key.to_string(), data_type.to_string(), origin)
    }

    #[test]
    fn test_annotated_parameters_take_literal_key() {
        let inputs = inputs_of_first_method(
            r#"
            class Api {
                String find(@PathParam("id") long userId, @QueryParam("q") String query) { return null; }
            }
            "#,
        );

        assert_eq!(
            inputs,
            vec![
                input("userId", "id", "long", ParamOrigin::Path),
                input("query", "q", "String", ParamOrigin::Query),
            ]
        );
    }

    #[test]
    fn test_unannotated_parameter_is_body_keyed_by_name() {
        let inputs = inputs_of_first_method(
            "class Api { String create(User user, int count) { return null; } }",
        );

        assert_eq!(
            inputs,
            vec![
                input("user", "user", "User", ParamOrigin::Body),
                input("count", "count", "int", ParamOrigin::Body),
            ]
        );
    }

    #[test]
    fn test_unknown_annotation_falls_back_to_body_origin() {
        let inputs = inputs_of_first_method(
            r#"class Api { String x(@Named("token") String t) { return null; } }"#,
        );

        assert_eq!(inputs, vec![input("t", "token", "String", ParamOrigin::Body)]);
    }

    #[test]
    fn test_marker_annotation_does_not_supply_key() {
        let inputs = inputs_of_first_method(
            r#"class Api { String x(@Valid @HeaderParam("X-Trace") String trace, @Valid Order order) { return null; } }"#,
        );

        assert_eq!(
            inputs,
            vec![
                input("trace", "X-Trace", "String", ParamOrigin::Header),
                input("order", "order", "Order", ParamOrigin::Body),
            ]
        );
    }

    #[test]
    fn test_complex_types_pass_through_unresolved() {
        let inputs = inputs_of_first_method(
            "class Api { String x(List<Item> items, byte[] data, java.util.Date at, String... tags) { return null; } }",
        );

        let types: Vec<&str> = inputs.iter().map(|i| i.data_type.as_str()).collect();
        assert_eq!(types, vec!["List", "byte[]", "java.util.Date", "String"]);
        assert_eq!(inputs[3].name, "tags");
    }

    #[test]
    fn test_empty_parameter_list() {
        let inputs = inputs_of_first_method("class Api { String ping() { return null; } }");
        assert!(inputs.is_empty());
    }
}
