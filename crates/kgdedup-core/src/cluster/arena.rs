//! Append-only cluster storage indexed by representative.

use std::collections::HashMap;

use crate::types::{Cluster, ClusterMap};

/// Clusters formed during one clustering run.
///
/// Clusters are never removed or reordered; a cluster can only gain
/// members. Lookups by representative and by member are kept current on
/// every insertion, so items of the same batch targeting the same cluster
/// see each other's merges.
#[derive(Debug, Clone, Default)]
pub struct ClusterArena {
    clusters: Vec<Cluster>,
    by_rep: HashMap<String, usize>,
    member_of: HashMap<String, usize>,
}

impl ClusterArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cluster and return its slot.
    ///
    /// If a cluster with the same representative already exists the members
    /// are folded into it instead.
    pub fn push(&mut self, cluster: Cluster) -> usize {
        let slot = match self.by_rep.get(&cluster.representative) {
            Some(&slot) => slot,
            None => {
                let slot = self.clusters.len();
                self.by_rep.insert(cluster.representative.clone(), slot);
                self.clusters.push(Cluster::new(
                    cluster.representative.clone(),
                    Default::default(),
                ));
                slot
            }
        };

        for member in cluster.members {
            self.member_of.entry(member.clone()).or_insert(slot);
            self.clusters[slot].members.insert(member);
        }

        slot
    }

    /// Add `member` to the cluster represented by `representative`.
    ///
    /// Returns false if no such cluster exists.
    pub fn add_member(&mut self, representative: &str, member: &str) -> bool {
        let Some(&slot) = self.by_rep.get(representative) else {
            return false;
        };
        self.member_of.entry(member.to_string()).or_insert(slot);
        self.clusters[slot].members.insert(member.to_string());
        true
    }

    /// Cluster represented by `representative`.
    pub fn get(&self, representative: &str) -> Option<&Cluster> {
        self.by_rep
            .get(representative)
            .and_then(|&slot| self.clusters.get(slot))
    }

    /// Whether `label` represents a cluster.
    pub fn has_representative(&self, label: &str) -> bool {
        self.by_rep.contains_key(label)
    }

    /// Whether `label` represents or belongs to any cluster.
    pub fn covers(&self, label: &str) -> bool {
        self.by_rep.contains_key(label) || self.member_of.contains_key(label)
    }

    /// Clusters in creation order.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Number of clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Whether no cluster has been formed yet.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Representative -> members map.
    pub fn into_map(self) -> ClusterMap {
        self.clusters
            .into_iter()
            .map(|c| (c.representative, c.members))
            .collect()
    }
}
