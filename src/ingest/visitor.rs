//! Scope-tracking syntax tree visitor for Python source
//!
//! Recursive descent over a tree-sitter tree, dispatching on node kind and
//! emitting graph mutations in pre-order. Scope is an explicit two-slot frame
//! (current class, current function) passed by value, so leaving a class or
//! function body restores the previous scope without any bookkeeping and the
//! walk stays reentrant.

use tree_sitter::{Node, Tree};

use crate::error::{IngestError, ParseFailure};
use crate::graph::GraphMutation;

/// Parser for Python source code.
pub struct PythonParser {
    parser: tree_sitter::Parser,
}

impl PythonParser {
    /// Create a new parser with the Python grammar loaded.
    pub fn new() -> Result<Self, IngestError> {
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&tree_sitter_python::language())?;
        Ok(Self { parser })
    }

    /// Parse a source file to a syntax tree.
    ///
    /// # Arguments
    /// * `path` - Repo-relative path, used only for error context
    /// * `source` - Decoded source text
    ///
    /// # Returns
    /// The parse tree, or a file-scoped `Parse` error when tree-sitter
    /// reports a syntax error anywhere in the tree.
    pub fn parse(&mut self, path: &str, source: &str) -> Result<Tree, IngestError> {
        match self.parser.parse(source, None) {
            Some(tree) if !tree.root_node().has_error() => Ok(tree),
            _ => Err(IngestError::Parse {
                path: path.to_string(),
                reason: ParseFailure::Syntax,
            }),
        }
    }
}

/// Scope context while descending: the innermost enclosing class and
/// function, if any. `Copy` so each recursion level gets its own frame.
#[derive(Debug, Clone, Copy, Default)]
struct Scope<'s> {
    class: Option<&'s str>,
    function: Option<&'s str>,
}

/// Extract the graph mutations for one parsed file, in descent (pre-)order.
///
/// A definition's own mutations are emitted before its body is visited, so a
/// call inside a function can only link to callees whose nodes already exist
/// in the graph at the moment the call edge statement runs.
///
/// Pure function: no I/O, no shared state; same input produces same output.
pub fn extract_mutations(tree: &Tree, source: &str, file_path: &str) -> Vec<GraphMutation> {
    let visitor = SourceVisitor { source, file_path };
    let mut mutations = Vec::new();
    visitor.walk(tree.root_node(), Scope::default(), &mut mutations);
    mutations
}

struct SourceVisitor<'s> {
    source: &'s str,
    file_path: &'s str,
}

impl<'s> SourceVisitor<'s> {
    fn walk(&self, node: Node<'_>, scope: Scope<'s>, out: &mut Vec<GraphMutation>) {
        match node.kind() {
            "import_from_statement" => {
                if let Some(module) = self.imported_module(&node) {
                    out.push(GraphMutation::Import {
                        file_path: self.file_path.to_string(),
                        module: module.to_string(),
                    });
                }
                self.walk_children(node, scope, out);
            }
            "class_definition" => match self.definition_name(&node) {
                Some(name) => {
                    out.push(GraphMutation::Class {
                        file_path: self.file_path.to_string(),
                        name: name.to_string(),
                    });
                    for parent in self.simple_bases(&node) {
                        out.push(GraphMutation::Inherits {
                            file_path: self.file_path.to_string(),
                            child: name.to_string(),
                            parent: parent.to_string(),
                        });
                    }
                    let inner = Scope {
                        class: Some(name),
                        function: scope.function,
                    };
                    self.walk_children(node, inner, out);
                }
                None => self.walk_children(node, scope, out),
            },
            "function_definition" => match self.definition_name(&node) {
                Some(name) => {
                    out.push(GraphMutation::Function {
                        file_path: self.file_path.to_string(),
                        name: name.to_string(),
                        parent_class: scope.class.map(str::to_string),
                    });
                    let inner = Scope {
                        class: scope.class,
                        function: Some(name),
                    };
                    self.walk_children(node, inner, out);
                }
                None => self.walk_children(node, scope, out),
            },
            "call" => {
                // Only bare-name calls made from inside a function body are
                // linkable; method calls and computed callables are not.
                if let (Some(caller), Some(callee)) = (scope.function, self.bare_callee(&node)) {
                    out.push(GraphMutation::Call {
                        file_path: self.file_path.to_string(),
                        caller: caller.to_string(),
                        callee: callee.to_string(),
                    });
                }
                self.walk_children(node, scope, out);
            }
            _ => self.walk_children(node, scope, out),
        }
    }

    fn walk_children(&self, node: Node<'_>, scope: Scope<'s>, out: &mut Vec<GraphMutation>) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.walk(child, scope, out);
        }
    }

    fn text(&self, node: &Node<'_>) -> Option<&'s str> {
        node.utf8_text(self.source.as_bytes()).ok()
    }

    /// Name of a class or function definition node.
    fn definition_name(&self, node: &Node<'_>) -> Option<&'s str> {
        node.child_by_field_name("name")
            .filter(|name| name.kind() == "identifier")
            .and_then(|name| self.text(&name))
    }

    /// Module named by an import-from statement.
    ///
    /// `from pkg.mod import x` names `pkg.mod`; `from .mod import x` names
    /// `mod`; a bare relative import (`from . import x`) names nothing.
    fn imported_module(&self, node: &Node<'_>) -> Option<&'s str> {
        let module = node.child_by_field_name("module_name")?;
        match module.kind() {
            "dotted_name" => self.text(&module),
            "relative_import" => {
                let mut cursor = module.walk();
                let name = module
                    .children(&mut cursor)
                    .find(|child| child.kind() == "dotted_name")
                    .and_then(|name| self.text(&name));
                name
            }
            _ => None,
        }
    }

    /// Direct base classes that are simple identifiers.
    ///
    /// Attribute-form bases (`pkg.Base`), subscripted generics, and keyword
    /// arguments (`metaclass=...`) are skipped.
    fn simple_bases(&self, node: &Node<'_>) -> Vec<&'s str> {
        let Some(superclasses) = node.child_by_field_name("superclasses") else {
            return Vec::new();
        };
        let mut cursor = superclasses.walk();
        superclasses
            .named_children(&mut cursor)
            .filter(|base| base.kind() == "identifier")
            .filter_map(|base| self.text(&base))
            .collect()
    }

    /// Callee of a call expression, only when it is a plain identifier.
    fn bare_callee(&self, node: &Node<'_>) -> Option<&'s str> {
        node.child_by_field_name("function")
            .filter(|callee| callee.kind() == "identifier")
            .and_then(|callee| self.text(&callee))
    }
}
