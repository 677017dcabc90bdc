//! Embedding-based graph deduplication collaborator.

use async_trait::async_trait;

use crate::error::KgResult;
use crate::types::Graph;

/// External "semantic hash" deduplication step.
///
/// Implementations merge labels their embedding model deems identical and
/// must return a graph whose relations only reference its own label sets.
/// The orchestrator prunes dangling relations from the result regardless.
#[async_trait]
pub trait SemanticDeduplicator: Send + Sync {
    /// Deduplicate a whole graph.
    async fn deduplicate_graph(&self, graph: Graph) -> KgResult<Graph>;
}
