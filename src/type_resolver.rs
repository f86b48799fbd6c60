use crate::extractor::annotations::simple_name;
use crate::extractor::ServiceBlueprint;
use crate::parser::ParsedFile;
use log::debug;

/// A single `import` declaration of a Java file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// Qualified name as written, without `static` and without the trailing `.*`
    pub qualified_name: String,
    pub is_static: bool,
    pub is_wildcard: bool,
}

impl Import {
    /// Simple name this import makes visible, if it names a single type.
    pub fn simple_name(&self) -> Option<&str> {
        if self.is_static || self.is_wildcard {
            None
        } else {
            Some(simple_name(&self.qualified_name))
        }
    }
}

/// Import table of one file, used to qualify the short type names of handler inputs.
///
/// Resolution is deliberately shallow: only single-type imports are consulted. Types from the
/// same package, wildcard imports and `java.lang` keep their simple name.
#[derive(Debug, Clone, Default)]
pub struct TypeResolver {
    imports: Vec<Import>,
}

impl TypeResolver {
    pub fn new(imports: Vec<Import>) -> Self {
        Self { imports }
    }

    /// Builds the table from the top-level `import_declaration` nodes of a parsed file.
    pub fn from_file(file: &ParsedFile) -> Self {
        let root = file.tree.root_node();
        let mut cursor = root.walk();
        let imports: Vec<Import> = root
            .named_children(&mut cursor)
            .filter(|node| node.kind() == "import_declaration")
            .filter_map(|node| {
                let mut inner = node.walk();
                let mut name = None;
                let mut is_static = false;
                let mut is_wildcard = false;
                for child in node.children(&mut inner) {
                    match child.kind() {
                        "static" => is_static = true,
                        "asterisk" => is_wildcard = true,
                        "scoped_identifier" | "identifier" => {
                            name = Some(file.text(child).to_string())
                        }
                        _ => {}
                    }
                }
                name.map(|qualified_name| Import {
                    qualified_name,
                    is_static,
                    is_wildcard,
                })
            })
            .collect();

        debug!("Found {} imports in {}", imports.len(), file.path.display());
        Self { imports }
    }

    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    /// Qualified name for a simple type name, if a single-type import provides one.
    pub fn resolve(&self, type_name: &str) -> Option<&str> {
        self.imports
            .iter()
            .find(|import| import.simple_name() == Some(type_name))
            .map(|import| import.qualified_name.as_str())
    }

    /// Rewrites every input data type that matches an imported simple name.
    pub fn qualify_inputs(&self, blueprints: &mut [ServiceBlueprint]) {
        for blueprint in blueprints.iter_mut() {
            for input in &mut blueprint.inputs {
                if let Some(qualified) = self.resolve(&input.data_type) {
                    debug!("Resolved {} to {}", input.data_type, qualified);
                    input.data_type = qualified.to_string();
                }
            }
        }
    }
}
