//! Hash-based label deduplication.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::config::{DedupConfig, DeduplicationMethod};
use crate::relabel::GraphRelabeler;
use crate::types::Graph;

use super::normalize::Normalizer;

/// Non-canonical label -> canonical label. Canonical labels are never keys.
pub type DuplicateMap = BTreeMap<String, String>;

/// Result of deduplicating a label list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deduplicated {
    /// Canonical labels in first-occurrence order, original spelling.
    pub unique: Vec<String>,
    /// Duplicates keyed by their original spelling.
    pub duplicates: DuplicateMap,
}

impl Deduplicated {
    /// Canonical labels as a set.
    pub fn unique_set(&self) -> BTreeSet<String> {
        self.unique.iter().cloned().collect()
    }

    /// Number of labels removed.
    pub fn removed(&self) -> usize {
        self.duplicates.len()
    }
}

/// Label deduplicator with configurable method, digest and normalization.
#[derive(Debug, Clone, Default)]
pub struct Deduplicator {
    config: DedupConfig,
}

impl Deduplicator {
    /// Create a new deduplicator with the given configuration.
    pub fn new(config: DedupConfig) -> Self {
        Self { config }
    }

    /// Deterministic deduplicator with the given digest and normalization,
    /// whatever method `config` names.
    pub fn deterministic(config: &DedupConfig) -> Self {
        Self::new(DedupConfig {
            method: DeduplicationMethod::Deterministic,
            ..config.clone()
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &DedupConfig {
        &self.config
    }

    /// Deduplicate an ordered list of labels.
    pub fn deduplicate<I, S>(&self, labels: I) -> Deduplicated
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.config.method {
            DeduplicationMethod::Deterministic => self.deduplicate_deterministic(labels),
            DeduplicationMethod::Semantic => {
                let unique: Vec<String> = labels
                    .into_iter()
                    .map(|l| l.as_ref().to_string())
                    .collect();
                tracing::warn!(
                    count = unique.len(),
                    "Semantic label deduplication is not available here; returning labels unchanged"
                );
                Deduplicated {
                    unique,
                    duplicates: DuplicateMap::new(),
                }
            }
        }
    }

    fn deduplicate_deterministic<I, S>(&self, labels: I) -> Deduplicated
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalizer = Normalizer::from(&self.config);
        let algorithm = self.config.hash_algorithm;

        // digest -> canonical label
        let mut seen: HashMap<String, String> = HashMap::new();
        let mut result = Deduplicated::default();
        let mut total = 0usize;

        for label in labels {
            let label = label.as_ref();
            total += 1;

            let digest = algorithm.digest(&normalizer.normalize(label));

            match seen.get(&digest) {
                Some(canonical) => {
                    if canonical != label {
                        tracing::debug!("Found duplicate: '{}' -> '{}'", label, canonical);
                        result
                            .duplicates
                            .insert(label.to_string(), canonical.clone());
                    }
                }
                None => {
                    seen.insert(digest, label.to_string());
                    result.unique.push(label.to_string());
                }
            }
        }

        tracing::info!(
            algorithm = %algorithm,
            "Deterministic deduplication: {} -> {} ({} duplicates removed)",
            total,
            result.unique.len(),
            result.removed()
        );

        result
    }

    /// Deduplicate the entity and edge labels of a graph and rewrite its
    /// relations onto the canonical labels.
    ///
    /// Relations that no longer resolve are dropped. Cluster maps already on
    /// the graph are carried over unchanged.
    pub fn deduplicate_graph(&self, graph: &Graph) -> Graph {
        let entities = self.deduplicate(&graph.entities);
        let edges = self.deduplicate(&graph.edges);
        GraphRelabeler::with_duplicates(graph, &entities, &edges)
    }
}
