//! Graph persistence layer backed by Neo4j
//!
//! [`CodeGraph`] owns the Bolt connection and provides deterministic,
//! idempotent operations for persisting code facts. Constructing it opens
//! the connection, dropping it closes the pool; the instance is passed
//! explicitly to every component that writes or reads (no global state).

mod config;
mod mutation;
mod query;
mod statements;

pub use config::{GraphConfig, PASSWORD_VAR, URI_VAR, USER_VAR};
pub use mutation::GraphMutation;
pub use query::{run_read_query, Record};
pub use statements::GRAPH_SCHEMA;

use crate::error::IngestError;

/// Write seam between the ingestion pipeline and the graph engine.
///
/// Implemented by [`CodeGraph`] for Neo4j and by in-memory models in tests,
/// so the walker can be exercised without a running graph server.
#[allow(async_fn_in_trait)]
pub trait GraphSink {
    /// Apply one mutation as an independent, immediately-executed statement.
    async fn apply(&self, mutation: &GraphMutation) -> Result<(), IngestError>;
}

/// Graph database wrapper for Compass.
///
/// Each `run`/`execute` call checks a connection out of the client's internal
/// pool, preserving session-level isolation per statement. Writes block until
/// the engine acknowledges them; there is no pipelining.
pub struct CodeGraph {
    graph: neo4rs::Graph,
}

impl CodeGraph {
    /// Open a connection to the graph engine.
    ///
    /// # Arguments
    /// * `config` - Endpoint URI, principal, and credential
    ///
    /// # Returns
    /// A connected CodeGraph instance, or a `Query` error if the engine is
    /// unreachable or rejects the credentials.
    pub async fn connect(config: &GraphConfig) -> Result<Self, IngestError> {
        let graph = neo4rs::Graph::new(
            config.uri.as_str(),
            config.user.as_str(),
            config.password.as_str(),
        )
        .await?;
        Ok(Self { graph })
    }

    /// Execute a read statement and collect its records.
    ///
    /// # Arguments
    /// * `statement` - Arbitrary Cypher read statement
    ///
    /// # Returns
    /// Zero or more records, each an ordered field-name to value mapping,
    /// one per matched pattern instance. Write statements return no records.
    pub async fn execute(&self, statement: &str) -> Result<Vec<Record>, IngestError> {
        let mut rows = self.graph.execute(neo4rs::query(statement)).await?;
        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            let record = row
                .to::<Record>()
                .map_err(|err| IngestError::RecordDecode(err.to_string()))?;
            records.push(record);
        }
        Ok(records)
    }
}

impl GraphSink for CodeGraph {
    async fn apply(&self, mutation: &GraphMutation) -> Result<(), IngestError> {
        let (template, params) = mutation.statement();
        let mut statement = neo4rs::query(template);
        for (key, value) in params {
            statement = statement.param(key, value);
        }
        self.graph.run(statement).await?;
        Ok(())
    }
}
