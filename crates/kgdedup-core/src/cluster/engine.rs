//! Two-phase clustering driven by an [`Oracle`].

use std::collections::BTreeSet;
use std::future::Future;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::ClusterConfig;
use crate::error::{KgError, KgResult};
use crate::traits::Oracle;
use crate::types::{Cluster, ClusterMap, LabelKind};

use super::arena::ClusterArena;

/// Counters for one clustering run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterStats {
    /// Oracle queries issued.
    pub oracle_calls: usize,
    /// Queries that failed, timed out or returned an unusable answer.
    pub oracle_failures: usize,
    /// Discovery rounds run.
    pub discovery_rounds: usize,
    /// Multi-member clusters found during discovery.
    pub discovered: usize,
    /// Reconciliation batches processed.
    pub batches: usize,
    /// Leftover items merged into an existing cluster.
    pub merges_accepted: usize,
    /// Merges the re-validation refused.
    pub merges_rejected: usize,
    /// Singleton clusters created.
    pub singletons: usize,
}

/// Output of [`ClusterEngine::cluster_items`].
#[derive(Debug, Clone, Default)]
pub struct ClusterOutcome {
    /// The canonical labels (keys of `clusters`).
    pub representatives: BTreeSet<String>,
    /// Representative -> members.
    pub clusters: ClusterMap,
    /// Run counters.
    pub stats: ClusterStats,
}

/// Clusters a homogeneous label set with the help of an oracle.
///
/// A run is sequential: every oracle answer decides the next query. Runs
/// over disjoint label sets (entities vs. edges) may execute concurrently
/// on the same engine.
pub struct ClusterEngine {
    oracle: Arc<dyn Oracle>,
    config: ClusterConfig,
}

impl ClusterEngine {
    /// Create a new engine.
    pub fn new(oracle: Arc<dyn Oracle>, config: ClusterConfig) -> Self {
        Self { oracle, config }
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    /// Cluster `items`, returning representatives and the cluster map.
    ///
    /// Never fails: oracle errors and timeouts count as "no answer".
    pub async fn cluster_items(
        &self,
        items: &BTreeSet<String>,
        kind: LabelKind,
        context: &str,
    ) -> ClusterOutcome {
        let context = kind.oracle_context(context);
        let mut stats = ClusterStats::default();
        let mut arena = ClusterArena::new();

        let leftovers = self.discover(items, &context, &mut arena, &mut stats).await;
        debug!(
            kind = %kind,
            discovered = stats.discovered,
            leftovers = leftovers.len(),
            "Discovery phase finished"
        );

        self.reconcile(leftovers, &context, &mut arena, &mut stats)
            .await;

        let clusters = arena.into_map();
        let representatives: BTreeSet<String> = clusters.keys().cloned().collect();

        info!(
            kind = %kind,
            items = items.len(),
            clusters = clusters.len(),
            oracle_calls = stats.oracle_calls,
            oracle_failures = stats.oracle_failures,
            "Clustered labels"
        );

        ClusterOutcome {
            representatives,
            clusters,
            stats,
        }
    }

    /// Phase 1: greedy discovery. Returns the labels left unclustered.
    async fn discover(
        &self,
        items: &BTreeSet<String>,
        context: &str,
        arena: &mut ClusterArena,
        stats: &mut ClusterStats,
    ) -> BTreeSet<String> {
        let mut remaining = items.clone();
        let mut stall = 0usize;

        while !remaining.is_empty() && stall < self.config.patience {
            stats.discovery_rounds += 1;

            let proposal = self
                .ask(
                    "propose_cluster",
                    stats,
                    self.oracle.propose_cluster(&remaining, context),
                )
                .await
                .unwrap_or_default();
            let proposal = restrict(proposal, &remaining);

            if !proposal.is_empty() {
                let validated = self
                    .ask(
                        "validate_cluster",
                        stats,
                        self.oracle.validate_cluster(&proposal, context),
                    )
                    .await
                    .unwrap_or_default();
                // Only unclustered labels can be claimed
                let validated = restrict(validated, &remaining);

                if validated.len() > 1 {
                    stall = 0;
                    let representative = self
                        .elect_representative(&validated, items, arena, context, stats)
                        .await;

                    debug!(
                        representative = %representative,
                        members = validated.len(),
                        "Discovered cluster"
                    );

                    for member in &validated {
                        remaining.remove(member);
                    }
                    arena.push(Cluster::new(representative, validated));
                    stats.discovered += 1;
                    continue;
                }
            }

            stall += 1;
        }

        remaining
    }

    /// Phase 2: batch reconciliation of leftovers.
    async fn reconcile(
        &self,
        leftovers: BTreeSet<String>,
        context: &str,
        arena: &mut ClusterArena,
        stats: &mut ClusterStats,
    ) {
        let leftovers: Vec<String> = leftovers.into_iter().collect();
        let batch_size = self.config.batch_size.max(1);

        for batch in leftovers.chunks(batch_size) {
            stats.batches += 1;

            if arena.is_empty() {
                for item in batch {
                    arena.push(Cluster::singleton(item.clone()));
                    stats.singletons += 1;
                }
                continue;
            }

            let suggestions = self
                .ask(
                    "batch_assign",
                    stats,
                    self.oracle.batch_assign(batch, arena.clusters(), context),
                )
                .await
                .unwrap_or_default();

            if !suggestions.is_empty() && suggestions.len() != batch.len() {
                warn!(
                    expected = batch.len(),
                    got = suggestions.len(),
                    "batch_assign answer length mismatch"
                );
            }

            let mut unassigned = Vec::new();
            for (i, item) in batch.iter().enumerate() {
                let suggestion = suggestions.get(i).cloned().flatten();
                if !self.try_assign(item, suggestion, arena, context, stats).await {
                    unassigned.push(item);
                }
            }

            for item in unassigned {
                if arena.covers(item) {
                    continue;
                }
                arena.push(Cluster::singleton(item.clone()));
                stats.singletons += 1;
            }
        }
    }

    /// Try to place `item` into the cluster the oracle suggested.
    async fn try_assign(
        &self,
        item: &str,
        suggestion: Option<String>,
        arena: &mut ClusterArena,
        context: &str,
        stats: &mut ClusterStats,
    ) -> bool {
        let Some(representative) = suggestion else {
            return false;
        };

        let Some(target) = arena.get(&representative) else {
            warn!(
                item,
                representative = %representative,
                "Suggested representative is not a current cluster; leaving item unassigned"
            );
            return false;
        };

        if target.covers(item) {
            return true;
        }

        let mut tentative = target.members.clone();
        tentative.insert(item.to_string());

        let validated = self
            .ask(
                "validate_cluster",
                stats,
                self.oracle.validate_cluster(&tentative, context),
            )
            .await;

        match validated {
            Some(validated) if validated.contains(item) && validated.len() == tentative.len() => {
                arena.add_member(&representative, item);
                stats.merges_accepted += 1;
                debug!(item, representative = %representative, "Merged into existing cluster");
                true
            }
            _ => {
                stats.merges_rejected += 1;
                debug!(item, representative = %representative, "Merge rejected by validation");
                false
            }
        }
    }

    /// Ask the oracle for a representative, falling back to the shortest
    /// member when its answer is missing or would collide.
    ///
    /// An answer is accepted if it is a member (exactly, or once trimmed),
    /// or a fresh name that is neither an input label nor an existing
    /// representative.
    async fn elect_representative(
        &self,
        members: &BTreeSet<String>,
        items: &BTreeSet<String>,
        arena: &ClusterArena,
        context: &str,
        stats: &mut ClusterStats,
    ) -> String {
        let choice = self
            .ask(
                "choose_representative",
                stats,
                self.oracle.choose_representative(members, context),
            )
            .await
            .filter(|rep| !rep.trim().is_empty());

        match choice {
            Some(rep) if members.contains(&rep) => rep,
            Some(rep) if members.contains(rep.trim()) => rep.trim().to_string(),
            Some(rep) if !items.contains(rep.trim()) && !arena.has_representative(rep.trim()) => {
                rep.trim().to_string()
            }
            Some(rep) => {
                warn!(
                    representative = %rep,
                    "Oracle representative collides with another label; using shortest member"
                );
                shortest_member(members)
            }
            None => shortest_member(members),
        }
    }

    /// Await one oracle query under the configured timeout.
    async fn ask<T, F>(&self, query: &'static str, stats: &mut ClusterStats, call: F) -> Option<T>
    where
        F: Future<Output = KgResult<T>>,
    {
        stats.oracle_calls += 1;

        let result = match self.config.oracle_timeout() {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(result) => result,
                Err(_) => Err(KgError::oracle_timeout(query, limit.as_secs())),
            },
            None => call.await,
        };

        match result {
            Ok(answer) => Some(answer),
            Err(e) => {
                stats.oracle_failures += 1;
                warn!(query, error = %e, "Oracle query failed; treating as no answer");
                None
            }
        }
    }
}

fn restrict(answer: BTreeSet<String>, allowed: &BTreeSet<String>) -> BTreeSet<String> {
    answer.into_iter().filter(|l| allowed.contains(l)).collect()
}

fn shortest_member(members: &BTreeSet<String>) -> String {
    members
        .iter()
        .min_by(|a, b| {
            a.chars()
                .count()
                .cmp(&b.chars().count())
                .then_with(|| a.cmp(b))
        })
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockOracle;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn engine(oracle: impl Oracle + 'static) -> ClusterEngine {
        ClusterEngine::new(Arc::new(oracle), ClusterConfig::default())
    }

    /// Treats labels as equal when they match after lowercasing and
    /// dropping a trailing "s".
    fn key(label: &str) -> String {
        let lower = label.to_lowercase();
        lower.strip_suffix('s').unwrap_or(&lower).to_string()
    }

    /// An honest oracle for the `key` equivalence.
    #[derive(Default)]
    struct StemOracle {
        propose_enabled: bool,
        calls: AtomicUsize,
    }

    impl StemOracle {
        fn eager() -> Self {
            Self {
                propose_enabled: true,
                ..Default::default()
            }
        }

        fn lazy() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl Oracle for StemOracle {
        async fn propose_cluster(
            &self,
            candidates: &BTreeSet<String>,
            _context: &str,
        ) -> KgResult<BTreeSet<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.propose_enabled {
                return Ok(BTreeSet::new());
            }
            let mut groups: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
            for c in candidates {
                groups.entry(key(c)).or_default().insert(c.clone());
            }
            Ok(groups
                .into_values()
                .find(|g| g.len() > 1)
                .unwrap_or_default())
        }

        async fn validate_cluster(
            &self,
            members: &BTreeSet<String>,
            _context: &str,
        ) -> KgResult<BTreeSet<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let first = members.iter().next().map(|m| key(m)).unwrap_or_default();
            Ok(members.iter().filter(|m| key(m) == first).cloned().collect())
        }

        async fn choose_representative(
            &self,
            members: &BTreeSet<String>,
            _context: &str,
        ) -> KgResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(shortest_member(members))
        }

        async fn batch_assign(
            &self,
            items: &[String],
            clusters: &[Cluster],
            _context: &str,
        ) -> KgResult<Vec<Option<String>>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(items
                .iter()
                .map(|item| {
                    clusters
                        .iter()
                        .find(|c| key(&c.representative) == key(item))
                        .map(|c| c.representative.clone())
                })
                .collect())
        }
    }

    /// Fails every query.
    struct BrokenOracle;

    #[async_trait]
    impl Oracle for BrokenOracle {
        async fn propose_cluster(&self, _: &BTreeSet<String>, _: &str) -> KgResult<BTreeSet<String>> {
            Err(KgError::llm("connection refused"))
        }
        async fn validate_cluster(&self, _: &BTreeSet<String>, _: &str) -> KgResult<BTreeSet<String>> {
            Err(KgError::llm("connection refused"))
        }
        async fn choose_representative(&self, _: &BTreeSet<String>, _: &str) -> KgResult<String> {
            Err(KgError::llm("connection refused"))
        }
        async fn batch_assign(&self, _: &[String], _: &[Cluster], _: &str) -> KgResult<Vec<Option<String>>> {
            Err(KgError::llm("connection refused"))
        }
    }

    fn assert_exact_cover(items: &BTreeSet<String>, outcome: &ClusterOutcome) {
        let mut seen = BTreeSet::new();
        for members in outcome.clusters.values() {
            for m in members {
                assert!(seen.insert(m.clone()), "'{}' appears in two clusters", m);
            }
        }
        assert_eq!(&seen, items);
        assert_eq!(
            outcome.representatives,
            outcome.clusters.keys().cloned().collect::<BTreeSet<_>>()
        );
    }

    #[tokio::test]
    async fn test_discovery_groups_equivalent_labels() {
        let items = set(&["Cat", "cats", "Dog", "dogs", "Bird"]);
        let outcome = engine(StemOracle::eager())
            .cluster_items(&items, LabelKind::Entities, "")
            .await;

        assert_exact_cover(&items, &outcome);
        assert_eq!(outcome.clusters["Cat"], set(&["Cat", "cats"]));
        assert_eq!(outcome.clusters["Dog"], set(&["Dog", "dogs"]));
        assert_eq!(outcome.clusters["Bird"], set(&["Bird"]));
        assert_eq!(outcome.stats.discovered, 2);
        assert_eq!(outcome.stats.singletons, 1);
    }

    #[tokio::test]
    async fn test_reconciliation_merges_into_earlier_singletons() {
        // 12 items, batch size 10: the first batch becomes singletons and the
        // second batch ("tree", "trees") joins "Tree" from the first.
        let items = set(&[
            "Apple", "Banana", "Cherry", "Date", "Elder", "Fig", "Grape", "Hazel", "Iris",
            "Tree", "trees", "tree",
        ]);
        let outcome = engine(StemOracle::lazy())
            .cluster_items(&items, LabelKind::Entities, "")
            .await;

        assert_exact_cover(&items, &outcome);
        assert_eq!(outcome.clusters["Tree"], set(&["Tree", "tree", "trees"]));
        assert_eq!(outcome.stats.discovered, 0);
        assert_eq!(outcome.stats.batches, 2);
        assert_eq!(outcome.stats.merges_accepted, 2);
        assert_eq!(outcome.clusters.len(), 10);
    }

    #[tokio::test]
    async fn test_always_empty_oracle_terminates_within_bound() {
        let items: BTreeSet<String> = (0..25).map(|i| format!("label-{:02}", i)).collect();
        let oracle = Arc::new(StemOracle::lazy());
        let engine = ClusterEngine::new(oracle.clone(), ClusterConfig::default());

        let outcome = engine.cluster_items(&items, LabelKind::Edges, "").await;

        assert_exact_cover(&items, &outcome);
        assert_eq!(outcome.clusters.len(), 25);
        assert_eq!(outcome.stats.discovery_rounds, 8);
        // 8 proposals plus one batch_assign for each batch after the first
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 8 + 2);
        assert!(outcome.stats.oracle_calls <= 8 + items.len().div_ceil(10));
    }

    #[tokio::test]
    async fn test_failing_oracle_yields_singletons() {
        let items = set(&["Stanford", "stanford", "MIT"]);
        let outcome = engine(BrokenOracle)
            .cluster_items(&items, LabelKind::Entities, "")
            .await;

        assert_exact_cover(&items, &outcome);
        assert_eq!(outcome.clusters.len(), 3);
        assert_eq!(outcome.stats.oracle_failures, 8);
    }

    #[tokio::test]
    async fn test_empty_input_makes_no_calls() {
        let mut oracle = MockOracle::new();
        oracle.expect_propose_cluster().never();
        oracle.expect_batch_assign().never();

        let outcome = engine(oracle)
            .cluster_items(&BTreeSet::new(), LabelKind::Edges, "")
            .await;

        assert!(outcome.clusters.is_empty());
        assert!(outcome.representatives.is_empty());
        assert_eq!(outcome.stats.oracle_calls, 0);
    }

    #[tokio::test]
    async fn test_validation_outside_remaining_is_ignored() {
        let mut oracle = MockOracle::new();
        oracle
            .expect_propose_cluster()
            .returning(|_, _| Ok(set(&["a", "b"])));
        // Claims a label that was never an input
        oracle
            .expect_validate_cluster()
            .returning(|_, _| Ok(set(&["a", "ghost"])));
        oracle.expect_choose_representative().never();
        oracle
            .expect_batch_assign()
            .returning(|items, _, _| Ok(vec![None; items.len()]));

        let items = set(&["a", "b"]);
        let outcome = engine(oracle)
            .cluster_items(&items, LabelKind::Entities, "")
            .await;

        assert_exact_cover(&items, &outcome);
        assert_eq!(outcome.stats.discovered, 0);
        assert_eq!(outcome.stats.discovery_rounds, 8);
    }

    #[tokio::test]
    async fn test_colliding_representative_falls_back_to_shortest_member() {
        let mut oracle = MockOracle::new();
        let mut proposed = false;
        oracle.expect_propose_cluster().returning(move |_, _| {
            if proposed {
                Ok(BTreeSet::new())
            } else {
                proposed = true;
                Ok(set(&["New York City", "NYC"]))
            }
        });
        oracle
            .expect_validate_cluster()
            .returning(|members, _| Ok(members.clone()));
        // "Boston" is another input label
        oracle
            .expect_choose_representative()
            .returning(|_, _| Ok("Boston".to_string()));
        oracle
            .expect_batch_assign()
            .returning(|items, _, _| Ok(vec![None; items.len()]));

        let items = set(&["New York City", "NYC", "Boston"]);
        let outcome = engine(oracle)
            .cluster_items(&items, LabelKind::Entities, "")
            .await;

        assert_exact_cover(&items, &outcome);
        assert_eq!(outcome.clusters["NYC"], set(&["NYC", "New York City"]));
        assert_eq!(outcome.clusters["Boston"], set(&["Boston"]));
    }

    #[tokio::test]
    async fn test_fresh_representative_name_is_kept() {
        let mut oracle = MockOracle::new();
        let mut proposed = false;
        oracle.expect_propose_cluster().returning(move |_, _| {
            if proposed {
                Ok(BTreeSet::new())
            } else {
                proposed = true;
                Ok(set(&["Winter Olympics", "Olympic Winter Games"]))
            }
        });
        oracle
            .expect_validate_cluster()
            .returning(|members, _| Ok(members.clone()));
        oracle
            .expect_choose_representative()
            .returning(|_, _| Ok("  Winter Games ".to_string()));

        let items = set(&["Winter Olympics", "Olympic Winter Games"]);
        let outcome = engine(oracle)
            .cluster_items(&items, LabelKind::Entities, "")
            .await;

        assert_eq!(outcome.representatives, set(&["Winter Games"]));
        assert_eq!(outcome.clusters["Winter Games"], items);
    }

    #[tokio::test]
    async fn test_merge_rejected_when_validation_adds_items() {
        let mut oracle = MockOracle::new();
        let mut proposed = false;
        oracle.expect_propose_cluster().returning(move |_, _| {
            if proposed {
                Ok(BTreeSet::new())
            } else {
                proposed = true;
                Ok(set(&["run", "runs"]))
            }
        });
        oracle.expect_validate_cluster().returning(|members, _| {
            let mut out = members.clone();
            if members.contains("ran") {
                // Confirms the item but adds an unrelated label
                out.insert("sprint".to_string());
            }
            Ok(out)
        });
        oracle
            .expect_choose_representative()
            .returning(|_, _| Ok("run".to_string()));
        oracle
            .expect_batch_assign()
            .returning(|items, _, _| Ok(items.iter().map(|_| Some("run".to_string())).collect()));

        let items = set(&["run", "runs", "ran"]);
        let outcome = engine(oracle)
            .cluster_items(&items, LabelKind::Edges, "")
            .await;

        assert_exact_cover(&items, &outcome);
        assert_eq!(outcome.clusters["run"], set(&["run", "runs"]));
        assert_eq!(outcome.clusters["ran"], set(&["ran"]));
        assert_eq!(outcome.stats.merges_rejected, 1);
    }

    #[tokio::test]
    async fn test_unknown_suggested_representative_becomes_singleton() {
        let mut oracle = MockOracle::new();
        let mut proposed = false;
        oracle.expect_propose_cluster().returning(move |_, _| {
            if proposed {
                Ok(BTreeSet::new())
            } else {
                proposed = true;
                Ok(set(&["A", "a"]))
            }
        });
        oracle
            .expect_validate_cluster()
            .returning(|members, _| Ok(members.clone()));
        oracle
            .expect_choose_representative()
            .returning(|_, _| Ok("A".to_string()));
        // Short answer with a representative that does not exist
        oracle
            .expect_batch_assign()
            .returning(|_, _, _| Ok(vec![Some("Z".to_string())]));

        let items = set(&["A", "a", "b", "c"]);
        let outcome = engine(oracle)
            .cluster_items(&items, LabelKind::Entities, "")
            .await;

        assert_exact_cover(&items, &outcome);
        assert_eq!(outcome.clusters.len(), 3);
        assert_eq!(outcome.stats.singletons, 2);
    }

    #[tokio::test]
    async fn test_context_prefix_reaches_oracle() {
        let mut oracle = MockOracle::new();
        oracle
            .expect_propose_cluster()
            .withf(|_, context| context.to_string() == "edges of a graph extracted from source text. Family.")
            .times(1)
            .returning(|_, _| Ok(BTreeSet::new()));

        let engine = ClusterEngine::new(
            Arc::new(oracle),
            ClusterConfig {
                patience: 1,
                ..Default::default()
            },
        );
        let outcome = engine
            .cluster_items(&set(&["is mother of"]), LabelKind::Edges, " Family.")
            .await;
        assert_eq!(outcome.representatives, set(&["is mother of"]));
    }

    struct SlowOracle;

    #[async_trait]
    impl Oracle for SlowOracle {
        async fn propose_cluster(&self, c: &BTreeSet<String>, _: &str) -> KgResult<BTreeSet<String>> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(c.clone())
        }
        async fn validate_cluster(&self, m: &BTreeSet<String>, _: &str) -> KgResult<BTreeSet<String>> {
            Ok(m.clone())
        }
        async fn choose_representative(&self, _: &BTreeSet<String>, _: &str) -> KgResult<String> {
            Ok(String::new())
        }
        async fn batch_assign(&self, i: &[String], _: &[Cluster], _: &str) -> KgResult<Vec<Option<String>>> {
            Ok(vec![None; i.len()])
        }
    }

    #[tokio::test]
    async fn test_timeout_counts_as_no_answer() {
        let engine = ClusterEngine::new(
            Arc::new(SlowOracle),
            ClusterConfig {
                patience: 1,
                oracle_timeout_secs: Some(1),
                ..Default::default()
            },
        );

        let items = set(&["x", "X"]);
        let outcome = engine.cluster_items(&items, LabelKind::Entities, "").await;

        assert_exact_cover(&items, &outcome);
        assert_eq!(outcome.stats.oracle_failures, 1);
        assert_eq!(outcome.clusters.len(), 2);
    }

    #[tokio::test]
    async fn test_zero_batch_size_is_treated_as_one() {
        let engine = ClusterEngine::new(
            Arc::new(StemOracle::lazy()),
            ClusterConfig {
                patience: 1,
                batch_size: 0,
                ..Default::default()
            },
        );

        let items = set(&["Tree", "apple", "tree"]);
        let outcome = engine.cluster_items(&items, LabelKind::Entities, "").await;

        assert_exact_cover(&items, &outcome);
        assert_eq!(outcome.stats.batches, 3);
        assert_eq!(outcome.clusters["Tree"], set(&["Tree", "tree"]));
    }

    #[test]
    fn test_shortest_member() {
        assert_eq!(shortest_member(&set(&["Joshua", "Josh", "Jo"])), "Jo");
        assert_eq!(shortest_member(&set(&["bb", "aa"])), "aa");
    }
}
