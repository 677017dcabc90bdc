//! Rewriting relations onto canonical labels.
//!
//! Both the deterministic path (duplicate maps) and the clustering path
//! (representative -> members maps) end here. A relation survives only if
//! its subject, predicate and object all resolve to a label in the final
//! label sets, so the output graph is always consistent even when a
//! clustering pass was partial.

use std::collections::{BTreeSet, HashMap};

use crate::dedup::Deduplicated;
use crate::types::{ClusterMap, Graph, Relation};

/// Resolves any known label to its canonical form.
#[derive(Debug, Clone, Default)]
pub struct CanonicalIndex {
    canonical: BTreeSet<String>,
    aliases: HashMap<String, String>,
}

impl CanonicalIndex {
    /// Index a deterministic deduplication result.
    pub fn from_duplicates(dedup: &Deduplicated) -> Self {
        Self {
            canonical: dedup.unique_set(),
            aliases: dedup
                .duplicates
                .iter()
                .map(|(dup, canonical)| (dup.clone(), canonical.clone()))
                .collect(),
        }
    }

    /// Index a cluster map.
    ///
    /// A label listed under several representatives resolves to the first
    /// one in map order.
    pub fn from_clusters(representatives: &BTreeSet<String>, clusters: &ClusterMap) -> Self {
        let mut aliases = HashMap::new();
        for (rep, members) in clusters {
            for member in members {
                aliases.entry(member.clone()).or_insert_with(|| rep.clone());
            }
        }

        Self {
            canonical: representatives.clone(),
            aliases,
        }
    }

    /// Canonical form of `label`, or `None` if it does not resolve into the
    /// canonical set.
    pub fn resolve<'a>(&'a self, label: &'a str) -> Option<&'a str> {
        if self.canonical.contains(label) {
            return Some(label);
        }
        self.aliases
            .get(label)
            .map(String::as_str)
            .filter(|c| self.canonical.contains(*c))
    }

    /// The canonical label set.
    pub fn canonical(&self) -> &BTreeSet<String> {
        &self.canonical
    }
}

/// Builds relabeled graphs from canonicalization maps.
pub struct GraphRelabeler;

impl GraphRelabeler {
    /// Relabel through deterministic duplicate maps.
    ///
    /// Cluster maps already present on `graph` are carried over.
    pub fn with_duplicates(graph: &Graph, entities: &Deduplicated, edges: &Deduplicated) -> Graph {
        let entity_index = CanonicalIndex::from_duplicates(entities);
        let edge_index = CanonicalIndex::from_duplicates(edges);

        Graph {
            relations: Self::rewrite(&graph.relations, &entity_index, &edge_index),
            entities: entity_index.canonical,
            edges: edge_index.canonical,
            entity_clusters: graph.entity_clusters.clone(),
            edge_clusters: graph.edge_clusters.clone(),
        }
    }

    /// Relabel through cluster maps; the output graph carries the maps.
    pub fn with_clusters(
        graph: &Graph,
        entities: &BTreeSet<String>,
        entity_clusters: &ClusterMap,
        edges: &BTreeSet<String>,
        edge_clusters: &ClusterMap,
    ) -> Graph {
        let entity_index = CanonicalIndex::from_clusters(entities, entity_clusters);
        let edge_index = CanonicalIndex::from_clusters(edges, edge_clusters);

        Graph {
            relations: Self::rewrite(&graph.relations, &entity_index, &edge_index),
            entities: entity_index.canonical,
            edges: edge_index.canonical,
            entity_clusters: entity_clusters.clone(),
            edge_clusters: edge_clusters.clone(),
        }
    }

    fn rewrite(
        relations: &BTreeSet<Relation>,
        entities: &CanonicalIndex,
        edges: &CanonicalIndex,
    ) -> BTreeSet<Relation> {
        let mut dropped = 0usize;
        let mut out = BTreeSet::new();

        for rel in relations {
            let resolved = (
                entities.resolve(&rel.subject),
                edges.resolve(&rel.predicate),
                entities.resolve(&rel.object),
            );

            match resolved {
                (Some(s), Some(p), Some(o)) => {
                    out.insert(Relation::new(s, p, o));
                }
                _ => {
                    dropped += 1;
                    tracing::debug!(
                        subject = %rel.subject,
                        predicate = %rel.predicate,
                        object = %rel.object,
                        "Dropping relation with unresolved label"
                    );
                }
            }
        }

        if dropped > 0 {
            tracing::debug!(dropped, kept = out.len(), "Relabeled relations");
        }

        out
    }
}
