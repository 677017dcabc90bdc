//! End-to-end graph deduplication.
//!
//! The orchestrator runs the configured dedup strategy, clusters entity and
//! edge labels concurrently, and relabels relations onto the representatives.

mod orchestrator;

pub use orchestrator::{DedupOrchestrator, DedupOrchestratorBuilder, PipelineReport};
