use std::sync::Arc;

use tracing::{debug, info};

use crate::cluster::{ClusterEngine, ClusterOutcome, ClusterStats};
use crate::config::{DedupStrategy, PipelineConfig};
use crate::dedup::Deduplicator;
use crate::error::{KgError, KgResult};
use crate::oracle::LlmOracle;
use crate::relabel::GraphRelabeler;
use crate::traits::{Llm, Oracle, SemanticDeduplicator};
use crate::types::{Graph, LabelKind};

/// Counters from one orchestrated run.
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    /// Strategy used for the initial dedup stage.
    pub strategy: DedupStrategy,
    /// Entities before and after the whole run.
    pub entities: (usize, usize),
    /// Edges before and after the whole run.
    pub edges: (usize, usize),
    /// Relations before and after the whole run.
    pub relations: (usize, usize),
    /// Entity clustering counters.
    pub entity_stats: ClusterStats,
    /// Edge clustering counters.
    pub edge_stats: ClusterStats,
}

/// Composes deduplication, clustering and relabeling over a whole graph.
pub struct DedupOrchestrator {
    config: PipelineConfig,
    engine: ClusterEngine,
    semantic: Option<Arc<dyn SemanticDeduplicator>>,
}

impl DedupOrchestrator {
    /// Create a new orchestrator.
    ///
    /// Fails if the configuration is invalid or names a strategy that needs
    /// a semantic collaborator when none is given.
    pub fn new(
        config: PipelineConfig,
        oracle: Arc<dyn Oracle>,
        semantic: Option<Arc<dyn SemanticDeduplicator>>,
    ) -> KgResult<Self> {
        config.validate()?;

        if config.dedup_strategy.needs_semantic() && semantic.is_none() {
            return Err(KgError::configuration(format!(
                "Dedup strategy '{}' requires a semantic deduplicator",
                config.dedup_strategy
            )));
        }

        let engine = ClusterEngine::new(oracle, config.cluster.clone());
        Ok(Self {
            config,
            engine,
            semantic,
        })
    }

    /// Create an orchestrator whose oracle is an [`LlmOracle`] over `llm`.
    pub fn with_llm(config: PipelineConfig, llm: Arc<dyn Llm>) -> KgResult<Self> {
        Self::new(config, Arc::new(LlmOracle::new(llm)), None)
    }

    /// Start building an orchestrator.
    pub fn builder() -> DedupOrchestratorBuilder {
        DedupOrchestratorBuilder::default()
    }

    /// Get the configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Deduplicate and cluster `graph`.
    pub async fn run(&self, graph: Graph) -> KgResult<Graph> {
        self.run_with_report(graph).await.map(|(graph, _)| graph)
    }

    /// Like [`run`](Self::run), also returning run counters.
    pub async fn run_with_report(&self, graph: Graph) -> KgResult<(Graph, PipelineReport)> {
        let mut report = PipelineReport {
            strategy: self.config.dedup_strategy,
            entities: (graph.entities.len(), 0),
            edges: (graph.edges.len(), 0),
            relations: (graph.relations.len(), 0),
            ..Default::default()
        };

        if graph.is_empty() {
            debug!("Empty graph; skipping deduplication");
            return Ok((Graph::default(), report));
        }

        info!(
            strategy = %self.config.dedup_strategy,
            entities = graph.entities.len(),
            edges = graph.edges.len(),
            relations = graph.relations.len(),
            "Deduplicating graph"
        );

        let deduped = self.deduplicate(graph).await?;
        info!(
            entities = deduped.entities.len(),
            edges = deduped.edges.len(),
            relations = deduped.relations.len(),
            "Initial deduplication finished"
        );

        let context = self.config.cluster.context.clone();
        let (clustered, entity_stats, edge_stats) = self.cluster(&deduped, &context).await;

        report.entities.1 = clustered.entities.len();
        report.edges.1 = clustered.edges.len();
        report.relations.1 = clustered.relations.len();
        report.entity_stats = entity_stats;
        report.edge_stats = edge_stats;

        info!(
            entities = clustered.entities.len(),
            edges = clustered.edges.len(),
            relations = clustered.relations.len(),
            "Graph deduplicated"
        );

        Ok((clustered, report))
    }

    /// Cluster and relabel `graph` without the dedup stage.
    ///
    /// `context` is appended to every oracle query instead of the configured
    /// cluster context.
    pub async fn cluster_graph(&self, graph: &Graph, context: &str) -> Graph {
        if graph.is_empty() {
            return Graph::default();
        }
        self.cluster(graph, context).await.0
    }

    async fn deduplicate(&self, graph: Graph) -> KgResult<Graph> {
        let deterministic = Deduplicator::deterministic(&self.config.dedup);

        match self.config.dedup_strategy {
            DedupStrategy::Deterministic => Ok(deterministic.deduplicate_graph(&graph)),
            DedupStrategy::SemanticHash => self.semantic_pass(graph).await,
            DedupStrategy::Both => {
                let graph = deterministic.deduplicate_graph(&graph);
                self.semantic_pass(graph).await
            }
        }
    }

    async fn semantic_pass(&self, graph: Graph) -> KgResult<Graph> {
        let semantic = self.semantic.as_ref().ok_or_else(|| {
            KgError::configuration(
                "Semantic deduplication requested but no deduplicator is installed",
            )
        })?;

        let deduped = semantic.deduplicate_graph(graph).await?;
        Ok(deduped.prune_dangling())
    }

    async fn cluster(&self, graph: &Graph, context: &str) -> (Graph, ClusterStats, ClusterStats) {
        let (entities, edges): (ClusterOutcome, ClusterOutcome) = tokio::join!(
            self.engine
                .cluster_items(&graph.entities, LabelKind::Entities, context),
            self.engine.cluster_items(&graph.edges, LabelKind::Edges, context),
        );

        let relabeled = GraphRelabeler::with_clusters(
            graph,
            &entities.representatives,
            &entities.clusters,
            &edges.representatives,
            &edges.clusters,
        );

        (relabeled, entities.stats, edges.stats)
    }
}

/// Builder for [`DedupOrchestrator`].
#[derive(Default)]
pub struct DedupOrchestratorBuilder {
    config: PipelineConfig,
    oracle: Option<Arc<dyn Oracle>>,
    semantic: Option<Arc<dyn SemanticDeduplicator>>,
}

impl DedupOrchestratorBuilder {
    /// Set the pipeline configuration.
    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the oracle consulted during clustering.
    pub fn oracle(mut self, oracle: Arc<dyn Oracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Use an [`LlmOracle`] over `llm`.
    pub fn llm(self, llm: Arc<dyn Llm>) -> Self {
        self.oracle(Arc::new(LlmOracle::new(llm)))
    }

    /// Install the semantic-hash collaborator.
    pub fn semantic(mut self, semantic: Arc<dyn SemanticDeduplicator>) -> Self {
        self.semantic = Some(semantic);
        self
    }

    /// Build the orchestrator.
    pub fn build(self) -> KgResult<DedupOrchestrator> {
        let oracle = self
            .oracle
            .ok_or_else(|| KgError::configuration("An oracle or LLM is required"))?;
        DedupOrchestrator::new(self.config, oracle, self.semantic)
    }
}
