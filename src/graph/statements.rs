//! The statement catalog: fixed parameterized Cypher templates
//!
//! Every template is idempotent. Node creation is MERGE-by-key; edge creation
//! is MERGE-by-endpoint-pair, so re-running a statement with the same
//! parameters leaves the graph unchanged. Templates take only primitive
//! string parameters.
//!
//! Adding a new fact type means adding one template here, one variant to
//! [`GraphMutation`](super::GraphMutation), and one dispatch case in the
//! tree visitor.

/// Upsert a File node keyed by repo-relative path.
pub const CREATE_FILE: &str = "\
MERGE (f:File {path: $path})";

/// Upsert a Module node and an IMPORTS edge from an existing File.
///
/// The Module node is created lazily on first reference; if the File does
/// not exist the statement matches nothing and writes nothing.
pub const CREATE_IMPORT: &str = "\
MATCH (f:File {path: $file_path})
MERGE (m:Module {name: $module_name})
MERGE (f)-[:IMPORTS]->(m)";

/// Upsert a Class node keyed by (name, file_path) and its DEFINES_CLASS edge.
pub const CREATE_CLASS: &str = "\
MATCH (f:File {path: $file_path})
MERGE (c:Class {name: $class_name, file_path: $file_path})
MERGE (f)-[:DEFINES_CLASS]->(c)";

/// Upsert a Function node keyed by (name, file_path) and its DEFINES_FUNCTION
/// edge from the enclosing scope.
///
/// `$parent_name` selects the parent: a class name attaches the function to
/// that Class in the same file; the empty string attaches it to the File.
/// The empty string is never a valid Python identifier, so the encoding is
/// unambiguous.
pub const CREATE_FUNCTION: &str = "\
MATCH (parent)
WHERE ($parent_name = '' AND parent:File AND parent.path = $file_path)
   OR ($parent_name <> '' AND parent:Class AND parent.name = $parent_name AND parent.file_path = $file_path)
MERGE (func:Function {name: $function_name, file_path: $file_path})
MERGE (parent)-[:DEFINES_FUNCTION]->(func)";

/// Upsert a CALLS edge from a caller in this file to every Function sharing
/// the callee name, in any file.
///
/// The callee match is by name alone. If no Function with that name exists
/// yet, the statement matches nothing and writes nothing; the edge is not
/// retried later.
pub const CREATE_CALL: &str = "\
MATCH (caller:Function {name: $caller_name, file_path: $file_path})
MATCH (callee:Function {name: $callee_name})
MERGE (caller)-[:CALLS]->(callee)";

/// Upsert an INHERITS_FROM edge from a class in this file to every Class
/// sharing the parent name, in any file.
pub const CREATE_INHERITANCE: &str = "\
MATCH (child:Class {name: $child_class, file_path: $file_path})
MATCH (parent:Class {name: $parent_class})
MERGE (child)-[:INHERITS_FROM]->(parent)";

/// Human-readable schema reference printed by `compass schema`.
pub const GRAPH_SCHEMA: &str = "\
Node Labels and Properties:
- File: {path: string}
- Module: {name: string}
- Class: {name: string, file_path: string}
- Function: {name: string, file_path: string}

Relationship Types:
- IMPORTS: (File)-[:IMPORTS]->(Module)
- DEFINES_CLASS: (File)-[:DEFINES_CLASS]->(Class)
- DEFINES_FUNCTION: (File or Class)-[:DEFINES_FUNCTION]->(Function)
- CALLS: (Function)-[:CALLS]->(Function)
- INHERITS_FROM: (Class)-[:INHERITS_FROM]->(Class)";
