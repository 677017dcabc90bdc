//! Knowledge graph value type.
//!
//! A [`Graph`] is a plain value: every pipeline stage consumes one and
//! returns a new one. The referential invariant is that every relation's
//! subject and object are in `entities` and its predicate is in `edges`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::cluster::ClusterMap;

/// A subject-predicate-object triple.
///
/// Serializes as a 3-element array `[subject, predicate, object]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(String, String, String)", into = "(String, String, String)")]
pub struct Relation {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl Relation {
    /// Create a new relation.
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl From<(String, String, String)> for Relation {
    fn from((subject, predicate, object): (String, String, String)) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

impl From<Relation> for (String, String, String) {
    fn from(rel: Relation) -> Self {
        (rel.subject, rel.predicate, rel.object)
    }
}

/// Extracted knowledge graph with optional cluster maps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Entity labels.
    #[serde(default)]
    pub entities: BTreeSet<String>,
    /// Edge (predicate) labels.
    #[serde(default)]
    pub edges: BTreeSet<String>,
    /// Relation triples.
    #[serde(default)]
    pub relations: BTreeSet<Relation>,
    /// Entity representative -> members.
    #[serde(default, skip_serializing_if = "ClusterMap::is_empty")]
    pub entity_clusters: ClusterMap,
    /// Edge representative -> members.
    #[serde(default, skip_serializing_if = "ClusterMap::is_empty")]
    pub edge_clusters: ClusterMap,
}

impl Graph {
    /// Create a graph from its label and relation sets, with no clusters.
    pub fn new(
        entities: BTreeSet<String>,
        edges: BTreeSet<String>,
        relations: BTreeSet<Relation>,
    ) -> Self {
        Self {
            entities,
            edges,
            relations,
            ..Default::default()
        }
    }

    /// Build a graph whose edge set is the set of predicates used by `relations`.
    pub fn from_relations(entities: BTreeSet<String>, relations: BTreeSet<Relation>) -> Self {
        let edges = relations.iter().map(|r| r.predicate.clone()).collect();
        Self::new(entities, edges, relations)
    }

    /// Union of many partial graphs.
    ///
    /// Only labels and relations are merged; cluster maps are not carried.
    pub fn aggregate<I>(graphs: I) -> Self
    where
        I: IntoIterator<Item = Graph>,
    {
        graphs.into_iter().fold(Self::default(), |mut acc, g| {
            acc.entities.extend(g.entities);
            acc.edges.extend(g.edges);
            acc.relations.extend(g.relations);
            acc
        })
    }

    /// Whether the graph has neither entities nor edges.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.edges.is_empty()
    }

    /// Relations that reference a label missing from `entities` or `edges`.
    pub fn dangling_relations(&self) -> impl Iterator<Item = &Relation> + '_ {
        self.relations.iter().filter(move |r| !self.resolves(r))
    }

    /// Whether every relation references known labels.
    pub fn is_consistent(&self) -> bool {
        self.dangling_relations().next().is_none()
    }

    /// Return a copy of the graph without relations that break the invariant.
    pub fn prune_dangling(self) -> Self {
        let Graph {
            entities,
            edges,
            relations,
            entity_clusters,
            edge_clusters,
        } = self;

        let before = relations.len();
        let relations: BTreeSet<Relation> = relations
            .into_iter()
            .filter(|r| {
                entities.contains(&r.subject)
                    && entities.contains(&r.object)
                    && edges.contains(&r.predicate)
            })
            .collect();

        if relations.len() < before {
            tracing::debug!(
                dropped = before - relations.len(),
                "Pruned dangling relations"
            );
        }

        Self {
            entities,
            edges,
            relations,
            entity_clusters,
            edge_clusters,
        }
    }

    fn resolves(&self, r: &Relation) -> bool {
        self.entities.contains(&r.subject)
            && self.entities.contains(&r.object)
            && self.edges.contains(&r.predicate)
    }
}
