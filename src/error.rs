//! Error taxonomy for the ingestion pipeline
//!
//! Four outcomes matter to callers:
//! - `Config` and `Provider` are fatal and surface before any graph write.
//! - `Parse` is file-scoped; the walker catches it and skips the file.
//! - Everything else (I/O, graph writes) propagates and aborts the batch.

/// Why a source file could not be turned into a syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    /// File contents are not valid UTF-8
    #[error("invalid utf-8")]
    Decode,
    /// tree-sitter reported an error in the parse tree
    #[error("syntax error")]
    Syntax,
}

/// Errors produced by the ingestion pipeline and the graph store adapter.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// A required graph connection setting is missing from the environment.
    #[error("{variable} must be set (graph connection settings)")]
    Config { variable: &'static str },

    /// A source file could not be decoded or parsed.
    ///
    /// Recoverable: the walker logs this and continues with the next file.
    #[error("cannot parse {path}: {reason}")]
    Parse { path: String, reason: ParseFailure },

    /// A graph statement failed to execute.
    ///
    /// Not caught per-statement during ingestion; aborts the remaining walk.
    #[error("graph statement failed: {0}")]
    Query(#[from] neo4rs::Error),

    /// A record returned by a read statement could not be decoded.
    #[error("cannot decode graph record: {0}")]
    RecordDecode(String),

    /// A working copy of the repository could not be obtained.
    #[error("cannot obtain working copy of {url}")]
    Provider {
        url: String,
        #[source]
        source: git2::Error,
    },

    /// The tree-sitter grammar failed to load.
    #[error("grammar failed to load: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
