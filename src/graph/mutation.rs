//! Graph mutations emitted by the tree visitor
//!
//! A closed tagged union over the fact kinds the ingestion pipeline can
//! record. Each variant resolves to exactly one statement-catalog template
//! plus its string parameters, so the visitor never touches Cypher directly.

use serde::{Deserialize, Serialize};

use super::statements;

/// One graph write, in the order the visitor emitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphMutation {
    /// Upsert a File node. Emitted by the walker, once per parsed file,
    /// before any of the file's other mutations.
    File { path: String },
    /// Upsert a Module node and a File-IMPORTS-Module edge.
    Import { file_path: String, module: String },
    /// Upsert a Class node and a File-DEFINES_CLASS-Class edge.
    Class { file_path: String, name: String },
    /// Upsert a Function node and a DEFINES_FUNCTION edge from the innermost
    /// enclosing class, or from the File when `parent_class` is `None`.
    Function {
        file_path: String,
        name: String,
        parent_class: Option<String>,
    },
    /// Upsert a CALLS edge from a caller in this file to every function
    /// sharing the callee name (global name match, best-effort).
    Call {
        file_path: String,
        caller: String,
        callee: String,
    },
    /// Upsert an INHERITS_FROM edge from a class in this file to every class
    /// sharing the parent name.
    Inherits {
        file_path: String,
        child: String,
        parent: String,
    },
}

impl GraphMutation {
    /// Resolve this mutation to its catalog template and parameters.
    ///
    /// Parameters are all strings; the absent parent of a top-level function
    /// is encoded as the empty string (see [`statements::CREATE_FUNCTION`]).
    pub fn statement(&self) -> (&'static str, Vec<(&'static str, String)>) {
        match self {
            GraphMutation::File { path } => {
                (statements::CREATE_FILE, vec![("path", path.clone())])
            }
            GraphMutation::Import { file_path, module } => (
                statements::CREATE_IMPORT,
                vec![
                    ("file_path", file_path.clone()),
                    ("module_name", module.clone()),
                ],
            ),
            GraphMutation::Class { file_path, name } => (
                statements::CREATE_CLASS,
                vec![("file_path", file_path.clone()), ("class_name", name.clone())],
            ),
            GraphMutation::Function {
                file_path,
                name,
                parent_class,
            } => (
                statements::CREATE_FUNCTION,
                vec![
                    ("file_path", file_path.clone()),
                    ("function_name", name.clone()),
                    ("parent_name", parent_class.clone().unwrap_or_default()),
                ],
            ),
            GraphMutation::Call {
                file_path,
                caller,
                callee,
            } => (
                statements::CREATE_CALL,
                vec![
                    ("file_path", file_path.clone()),
                    ("caller_name", caller.clone()),
                    ("callee_name", callee.clone()),
                ],
            ),
            GraphMutation::Inherits {
                file_path,
                child,
                parent,
            } => (
                statements::CREATE_INHERITANCE,
                vec![
                    ("file_path", file_path.clone()),
                    ("child_class", child.clone()),
                    ("parent_class", parent.clone()),
                ],
            ),
        }
    }
}
