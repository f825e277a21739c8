//! Repository walker
//!
//! Enumerates the Python source files of a working copy in deterministic
//! order and drives the tree visitor over each one, applying the resulting
//! mutations through the graph sink. One undecodable or unparseable file is
//! skipped with a diagnostic; any other failure aborts the batch.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::IngestError;
use crate::graph::{GraphMutation, GraphSink};

use super::visitor::{extract_mutations, PythonParser};

/// Outcome of one ingestion batch.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct IngestReport {
    /// Files parsed and written to the graph
    pub files_indexed: usize,
    /// Files skipped for decode or syntax errors
    pub files_skipped: usize,
}

/// Ingest every Python source file under `root` into the graph.
///
/// # Behavior
/// 1. Collect all `.py` files and sort them for deterministic ordering
/// 2. Per file: decode, parse, then upsert the File node and apply the
///    visitor's mutations in descent order
/// 3. A decode or syntax failure skips the file (logged, counted); graph
///    writes already made for earlier files are kept
///
/// A file that fails to parse contributes nothing to the graph, not even a
/// File node. Each mutation is its own immediately-executed statement; there
/// is no batching or rollback across a file.
///
/// # Errors
/// I/O failures and graph write failures propagate and abort the walk.
pub async fn ingest_directory<S: GraphSink>(
    sink: &S,
    root: &Path,
) -> Result<IngestReport, IngestError> {
    let mut source_files: Vec<PathBuf> = Vec::new();
    for entry in walkdir::WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        let path = entry.path();
        if entry.file_type().is_file()
            && path.extension().and_then(|ext| ext.to_str()) == Some("py")
        {
            source_files.push(path.to_path_buf());
        }
    }

    // Sort for deterministic ordering
    source_files.sort();

    let mut parser = PythonParser::new()?;
    let mut report = IngestReport::default();

    for path in &source_files {
        let relative = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let bytes = std::fs::read(path)?;
        let source = match String::from_utf8(bytes) {
            Ok(source) => source,
            Err(_) => {
                warn!(path = %relative, "skipping file: invalid utf-8");
                report.files_skipped += 1;
                continue;
            }
        };

        let tree = match parser.parse(&relative, &source) {
            Ok(tree) => tree,
            Err(err) => {
                warn!(path = %relative, %err, "skipping file: parse failure");
                report.files_skipped += 1;
                continue;
            }
        };

        // The File node must exist before any edge referencing it
        sink.apply(&GraphMutation::File {
            path: relative.clone(),
        })
        .await?;

        let mutations = extract_mutations(&tree, &source, &relative);
        debug!(path = %relative, mutations = mutations.len(), "indexed file");
        for mutation in &mutations {
            sink.apply(mutation).await?;
        }

        report.files_indexed += 1;
    }

    Ok(report)
}
