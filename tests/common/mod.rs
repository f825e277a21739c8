#![allow(dead_code)]

//! In-memory model of the statement catalog's merge semantics.
//!
//! Implements `GraphSink` the way the Cypher templates behave against a real
//! engine: node creation is merge-by-key, edge creation is
//! merge-by-endpoint-pair, and a statement whose MATCH finds nothing writes
//! nothing. Lets walker tests assert on resulting graph state without a
//! running Neo4j server.

use std::collections::BTreeSet;
use std::sync::Mutex;

use compass::{GraphMutation, GraphSink, IngestError};

/// A DEFINES_FUNCTION parent: the file itself or a class within it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Parent {
    File(String),
    Class { name: String, file_path: String },
}

#[derive(Debug, Default)]
struct State {
    files: BTreeSet<String>,
    modules: BTreeSet<String>,
    /// (name, file_path)
    classes: BTreeSet<(String, String)>,
    /// (name, file_path)
    functions: BTreeSet<(String, String)>,
    /// (file_path, module)
    imports: BTreeSet<(String, String)>,
    /// (file_path, (class name, file_path))
    defines_class: BTreeSet<(String, (String, String))>,
    /// (parent, (function name, file_path))
    defines_function: BTreeSet<(Parent, (String, String))>,
    /// ((caller name, caller file), (callee name, callee file))
    calls: BTreeSet<((String, String), (String, String))>,
    /// ((child name, child file), (parent name, parent file))
    inherits: BTreeSet<((String, String), (String, String))>,
    /// Every File mutation applied, in order, including re-upserts
    file_log: Vec<String>,
}

#[derive(Debug, Default)]
pub struct MemoryGraph {
    state: Mutex<State>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_count(&self) -> usize {
        self.state.lock().unwrap().files.len()
    }

    pub fn has_file(&self, path: &str) -> bool {
        self.state.lock().unwrap().files.contains(path)
    }

    pub fn module_count(&self) -> usize {
        self.state.lock().unwrap().modules.len()
    }

    pub fn class_count(&self) -> usize {
        self.state.lock().unwrap().classes.len()
    }

    pub fn has_class(&self, name: &str, file_path: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .classes
            .contains(&(name.to_string(), file_path.to_string()))
    }

    pub fn function_count(&self) -> usize {
        self.state.lock().unwrap().functions.len()
    }

    pub fn has_function(&self, name: &str, file_path: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .functions
            .contains(&(name.to_string(), file_path.to_string()))
    }

    pub fn has_import(&self, file_path: &str, module: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .imports
            .contains(&(file_path.to_string(), module.to_string()))
    }

    /// The parent a function's DEFINES_FUNCTION edge comes from, if any.
    pub fn defining_parent(&self, name: &str, file_path: &str) -> Option<Parent> {
        let key = (name.to_string(), file_path.to_string());
        self.state
            .lock()
            .unwrap()
            .defines_function
            .iter()
            .find(|(_, function)| *function == key)
            .map(|(parent, _)| parent.clone())
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    /// CALLS edges from a caller name to a callee name, across all files.
    pub fn calls_by_name(&self, caller: &str, callee: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|((caller_name, _), (callee_name, _))| {
                caller_name == caller && callee_name == callee
            })
            .count()
    }

    pub fn inherits_count(&self) -> usize {
        self.state.lock().unwrap().inherits.len()
    }

    pub fn has_inheritance(&self, child: &str, parent: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .inherits
            .iter()
            .any(|((child_name, _), (parent_name, _))| {
                child_name == child && parent_name == parent
            })
    }

    /// (files, modules, classes, functions, imports, calls, inherits)
    pub fn counts(&self) -> (usize, usize, usize, usize, usize, usize, usize) {
        let state = self.state.lock().unwrap();
        (
            state.files.len(),
            state.modules.len(),
            state.classes.len(),
            state.functions.len(),
            state.imports.len(),
            state.calls.len(),
            state.inherits.len(),
        )
    }

    /// Order in which File mutations were applied (re-upserts included).
    pub fn file_log(&self) -> Vec<String> {
        self.state.lock().unwrap().file_log.clone()
    }
}

impl GraphSink for MemoryGraph {
    async fn apply(&self, mutation: &GraphMutation) -> Result<(), IngestError> {
        let mut state = self.state.lock().unwrap();
        match mutation {
            GraphMutation::File { path } => {
                state.files.insert(path.clone());
                state.file_log.push(path.clone());
            }
            GraphMutation::Import { file_path, module } => {
                if state.files.contains(file_path) {
                    state.modules.insert(module.clone());
                    state.imports.insert((file_path.clone(), module.clone()));
                }
            }
            GraphMutation::Class { file_path, name } => {
                if state.files.contains(file_path) {
                    let class = (name.clone(), file_path.clone());
                    state.classes.insert(class.clone());
                    state.defines_class.insert((file_path.clone(), class));
                }
            }
            GraphMutation::Function {
                file_path,
                name,
                parent_class,
            } => {
                let parent = match parent_class {
                    None => state
                        .files
                        .contains(file_path)
                        .then(|| Parent::File(file_path.clone())),
                    Some(class) => state
                        .classes
                        .contains(&(class.clone(), file_path.clone()))
                        .then(|| Parent::Class {
                            name: class.clone(),
                            file_path: file_path.clone(),
                        }),
                };
                if let Some(parent) = parent {
                    let function = (name.clone(), file_path.clone());
                    state.functions.insert(function.clone());
                    state.defines_function.insert((parent, function));
                }
            }
            GraphMutation::Call {
                file_path,
                caller,
                callee,
            } => {
                let caller_key = (caller.clone(), file_path.clone());
                if state.functions.contains(&caller_key) {
                    let callees: Vec<(String, String)> = state
                        .functions
                        .iter()
                        .filter(|(name, _)| name == callee)
                        .cloned()
                        .collect();
                    for callee_key in callees {
                        state.calls.insert((caller_key.clone(), callee_key));
                    }
                }
            }
            GraphMutation::Inherits {
                file_path,
                child,
                parent,
            } => {
                let child_key = (child.clone(), file_path.clone());
                if state.classes.contains(&child_key) {
                    let parents: Vec<(String, String)> = state
                        .classes
                        .iter()
                        .filter(|(name, _)| name == parent)
                        .cloned()
                        .collect();
                    for parent_key in parents {
                        state.inherits.insert((child_key.clone(), parent_key));
                    }
                }
            }
        }
        Ok(())
    }
}
