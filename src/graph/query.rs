//! Read-side query boundary
//!
//! Executes arbitrary Cypher statements on behalf of callers that must never
//! see an error propagate: a failure becomes a single record carrying an
//! `error` field instead.

use serde_json::Value;

use super::CodeGraph;

/// One result record: an ordered mapping from declared result field name to
/// value, one per matched pattern instance.
pub type Record = serde_json::Map<String, Value>;

/// Execute a read statement and return its records.
///
/// Never fails: a malformed statement, a missing parameter, or a connection
/// error is converted into a single `{"error": message}` record.
pub async fn run_read_query(graph: &CodeGraph, statement: &str) -> Vec<Record> {
    match graph.execute(statement).await {
        Ok(records) => records,
        Err(err) => {
            let mut marker = Record::new();
            marker.insert(
                "error".to_string(),
                Value::String(format!("query failed to execute: {err}")),
            );
            vec![marker]
        }
    }
}
