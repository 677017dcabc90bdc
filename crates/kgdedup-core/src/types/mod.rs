//! Core types for kgdedup.

mod cluster;
mod graph;
mod message;

pub use cluster::{Cluster, ClusterMap, LabelKind};
pub use graph::{Graph, Relation};
pub use message::{Message, MessageRole};
