//! The judge consulted by the cluster engine.
//!
//! An oracle is any classifier (usually an LLM, see [`crate::oracle::LlmOracle`])
//! that can answer the four queries below. Answers are untrusted: the engine
//! re-checks every answer against its own state and treats an `Err` as
//! "no answer" for that single call.

use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::error::KgResult;
use crate::types::Cluster;

/// Four-query judge contract used by [`crate::cluster::ClusterEngine`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Suggest a subset of `candidates` whose labels mean the same thing.
    ///
    /// An empty set means no grouping was found.
    async fn propose_cluster(
        &self,
        candidates: &BTreeSet<String>,
        context: &str,
    ) -> KgResult<BTreeSet<String>>;

    /// Confirm which of `members` truly belong together.
    async fn validate_cluster(
        &self,
        members: &BTreeSet<String>,
        context: &str,
    ) -> KgResult<BTreeSet<String>>;

    /// Pick one label, ideally short and general, to stand for `members`.
    async fn choose_representative(
        &self,
        members: &BTreeSet<String>,
        context: &str,
    ) -> KgResult<String>;

    /// For each item, in order, name the representative of the existing
    /// cluster it should join, or `None`.
    async fn batch_assign(
        &self,
        items: &[String],
        clusters: &[Cluster],
        context: &str,
    ) -> KgResult<Vec<Option<String>>>;
}
