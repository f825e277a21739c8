//! Compass: codebase knowledge graph builder
//!
//! Compass obtains a working copy of a repository, walks each Python file's
//! syntax tree, and persists files, classes, functions, imports, inheritance,
//! and call relationships as nodes and edges in a Neo4j graph.
//!
//! # Ingestion Model
//!
//! All graph writes are forward-only upserts keyed by natural identity
//! (File by path, Class and Function by name plus file path), so re-ingesting
//! identical input is safe and leaves node counts unchanged. Nothing is ever
//! updated or deleted: re-ingesting after files were removed does not prune
//! their stale nodes. That is a documented limitation of the batch-load
//! design, not a bug.
//!
//! # Call Linking
//!
//! CALLS edges are a best-effort heuristic, not a resolved call graph: a
//! bare-name call links to every Function node sharing the callee's name,
//! in any file, provided such a node exists when the edge statement runs.
//! Method calls through an object and computed callables produce no edge.

pub mod error;
pub mod graph;
pub mod ingest;

pub use error::{IngestError, ParseFailure};
pub use graph::{
    run_read_query, CodeGraph, GraphConfig, GraphMutation, GraphSink, Record, GRAPH_SCHEMA,
};
pub use ingest::{
    extract_mutations, fetch_repository, ingest_directory, ingest_repository,
    remove_working_copy, working_copy_path, IngestReport, PythonParser,
};
