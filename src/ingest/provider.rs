//! Repository provider
//!
//! Obtains a working copy of a Git repository on local storage and removes
//! it again once ingestion finishes. The walker itself only requires that a
//! directory tree of files exists at the given path; everything here is
//! replaceable by any other means of producing one.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::IngestError;
use crate::graph::GraphSink;

use super::walker::{ingest_directory, IngestReport};

/// Clone a repository to `path`.
///
/// Fails with a `Provider` error before any walking begins.
pub fn fetch_repository(url: &str, path: &Path) -> Result<(), IngestError> {
    git2::Repository::clone(url, path).map_err(|source| IngestError::Provider {
        url: url.to_string(),
        source,
    })?;
    Ok(())
}

/// Remove a working copy from local storage. A missing directory is fine.
pub fn remove_working_copy(path: &Path) -> Result<(), IngestError> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

/// Default working-copy location for a repository URL, derived from its last
/// path segment.
pub fn working_copy_path(url: &str) -> PathBuf {
    let name = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(url)
        .trim_end_matches(".git");
    std::env::temp_dir().join("compass-repos").join(name)
}

/// Clone `url` into `workdir` and ingest it.
///
/// # Behavior
/// 1. Remove any stale leftover at `workdir`
/// 2. Clone the repository
/// 3. Walk the working copy into the graph
/// 4. Remove the working copy again, whether the walk succeeded or not
///
/// The final cleanup is best-effort: a removal failure is logged and the
/// walk's own result is returned.
pub async fn ingest_repository<S: GraphSink>(
    sink: &S,
    url: &str,
    workdir: &Path,
) -> Result<IngestReport, IngestError> {
    remove_working_copy(workdir)?;
    fetch_repository(url, workdir)?;

    let result = ingest_directory(sink, workdir).await;

    if let Err(err) = remove_working_copy(workdir) {
        warn!(path = %workdir.display(), %err, "failed to remove working copy");
    }

    result
}
