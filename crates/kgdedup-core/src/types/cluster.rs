//! Cluster types shared by the cluster engine, the oracle and the relabeler.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use strum::{Display, EnumString};

/// Mapping from representative label to the labels it stands for.
pub type ClusterMap = BTreeMap<String, BTreeSet<String>>;

/// Which label set of a graph is being clustered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LabelKind {
    /// Entity (node) labels.
    Entities,
    /// Edge (predicate) labels.
    Edges,
}

impl LabelKind {
    /// Build the context string handed to the oracle for this kind.
    ///
    /// The caller's context is appended verbatim after the kind description.
    pub fn oracle_context(&self, extra: &str) -> String {
        format!("{} of a graph extracted from source text.{}", self, extra)
    }
}

/// A representative label plus the labels judged equivalent to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// The canonical label standing for the cluster.
    pub representative: String,
    /// Member labels (never empty).
    pub members: BTreeSet<String>,
}

impl Cluster {
    /// Create a cluster from a representative and its members.
    pub fn new(representative: impl Into<String>, members: BTreeSet<String>) -> Self {
        Self {
            representative: representative.into(),
            members,
        }
    }

    /// Create a cluster containing only `label`, which is also its representative.
    pub fn singleton(label: impl Into<String>) -> Self {
        let label = label.into();
        let members = BTreeSet::from([label.clone()]);
        Self {
            representative: label,
            members,
        }
    }

    /// Whether `label` is this cluster's representative or one of its members.
    pub fn covers(&self, label: &str) -> bool {
        self.representative == label || self.members.contains(label)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the cluster has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
