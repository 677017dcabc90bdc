//! Graph persistence.
//!
//! Graphs are stored as a single JSON object with `entities`, `edges` and
//! `relations` (3-element arrays), plus `entity_clusters` / `edge_clusters`
//! when they are non-empty.
//!
//! # Example
//!
//! ```ignore
//! use kgdedup_core::export::{load_graph, save_graph};
//!
//! let graph = load_graph("extracted.json").await?;
//! let deduped = orchestrator.run(graph).await?;
//! save_graph(&deduped, "graph.json").await?;
//! ```

pub mod json;

pub use json::{from_json_str, load_graph, save_graph, to_json_string, write_graph};
