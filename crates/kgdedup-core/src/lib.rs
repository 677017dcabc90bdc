//! kgdedup-core - Core library for kgdedup.
//!
//! This crate provides the graph model, deterministic label deduplication,
//! oracle-assisted clustering and the orchestrator that composes them.
//!
//! # Example
//!
//! ```ignore
//! use kgdedup_core::{DedupOrchestrator, PipelineConfig};
//! use kgdedup_core::export::{load_graph, save_graph};
//!
//! let config = PipelineConfig::from_env()?;
//! let orchestrator = DedupOrchestrator::builder()
//!     .config(config)
//!     .llm(llm)
//!     .build()?;
//!
//! let graph = load_graph("extracted.json").await?;
//! let deduped = orchestrator.run(graph).await?;
//! save_graph(&deduped, "graph.json").await?;
//! ```

pub mod cluster;
pub mod config;
pub mod dedup;
pub mod error;
pub mod export;
pub mod oracle;
pub mod pipeline;
pub mod relabel;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use cluster::{ClusterEngine, ClusterOutcome, ClusterStats};
pub use config::{
    ClusterConfig, DedupConfig, DedupStrategy, DeduplicationMethod, LlmProvider,
    LlmProviderConfig, PipelineConfig,
};
pub use dedup::{Deduplicated, Deduplicator, DuplicateMap, HashAlgorithm};
pub use error::{ErrorCode, KgError, KgResult};
pub use oracle::LlmOracle;
pub use pipeline::{DedupOrchestrator, PipelineReport};
pub use relabel::{CanonicalIndex, GraphRelabeler};
pub use traits::{Llm, LlmConfig, Oracle, SemanticDeduplicator};
pub use types::{Cluster, ClusterMap, Graph, LabelKind, Message, MessageRole, Relation};
