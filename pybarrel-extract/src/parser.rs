//! Tree-sitter backed extraction of top-level Python declarations.

use pybarrel_core::Declarations;
use tree_sitter::{Node, Parser};

use crate::ExtractError;

/// Parser for Python modules.
///
/// Wraps a `tree_sitter::Parser` configured with the Python grammar. One
/// instance is reused across files within a run.
pub struct ModuleParser {
    parser: Parser,
}

impl ModuleParser {
    /// Create a parser for the Python grammar.
    pub fn new() -> Result<Self, ExtractError> {
        let mut parser = Parser::new();
        parser.set_language(tree_sitter_python::language())?;
        Ok(Self { parser })
    }

    /// Extract the top-level declarations from one module's source text.
    ///
    /// Only direct children of the root node are inspected, so nested
    /// definitions never qualify. Unparseable sources are an error the
    /// caller is expected to treat as "skip this file".
    pub fn extract(&mut self, source: &str) -> Result<Declarations, ExtractError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or(ExtractError::Unparseable)?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(ExtractError::Syntax);
        }

        let mut decls = Declarations::new();
        let mut cursor = root.walk();
        for node in root.named_children(&mut cursor) {
            collect(node, source, &mut decls);
        }
        Ok(decls)
    }
}

fn collect(node: Node, source: &str, decls: &mut Declarations) {
    match node.kind() {
        "function_definition" => {
            if let Some(name) = field_text(node, "name", source) {
                decls.functions.push(name);
            }
        }
        "class_definition" => {
            if let Some(name) = field_text(node, "name", source) {
                decls.classes.push(name);
            }
        }
        // Decorators wrap the definition node; the definition itself is
        // still top-level.
        "decorated_definition" => {
            if let Some(definition) = node.child_by_field_name("definition") {
                collect(definition, source, decls);
            }
        }
        "expression_statement" => {
            if let Some(name) = simple_assignment_target(node, source) {
                decls.globals.push(name);
            }
        }
        _ => {}
    }
}

/// The assignment target, when the statement is an assignment to a single
/// simple name.
///
/// Tuple, attribute and subscript targets are excluded, as are augmented
/// (`x += 1`) and annotated (`x: int = 1`) assignments. A chained
/// assignment `a = b = 1` yields its first target only.
fn simple_assignment_target(node: Node, source: &str) -> Option<String> {
    let expr = node.named_child(0)?;
    if expr.kind() != "assignment" {
        return None;
    }
    if expr.child_by_field_name("type").is_some() {
        return None;
    }

    let left = expr.child_by_field_name("left")?;
    if left.kind() != "identifier" {
        return None;
    }
    node_text(left, source)
}

fn field_text(node: Node, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)
        .and_then(|child| node_text(child, source))
}

fn node_text(node: Node, source: &str) -> Option<String> {
    node.utf8_text(source.as_bytes())
        .ok()
        .map(|text| text.to_string())
}
