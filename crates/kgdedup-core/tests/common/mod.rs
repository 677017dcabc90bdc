//! Fake oracles shared by the integration tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use kgdedup_core::{Cluster, KgError, KgResult, Oracle};

pub fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Per-query call counters.
#[derive(Default)]
pub struct Calls {
    pub propose: AtomicUsize,
    pub validate: AtomicUsize,
    pub choose: AtomicUsize,
    pub batch: AtomicUsize,
}

impl Calls {
    pub fn total(&self) -> usize {
        self.propose.load(Ordering::SeqCst)
            + self.validate.load(Ordering::SeqCst)
            + self.choose.load(Ordering::SeqCst)
            + self.batch.load(Ordering::SeqCst)
    }
}

/// Replays queued answers in order.
///
/// With an empty queue: proposals are empty, validation echoes its input,
/// representative choice fails and batch assignment matches nothing.
#[derive(Default)]
pub struct ScriptedOracle {
    proposals: Mutex<VecDeque<KgResult<BTreeSet<String>>>>,
    validations: Mutex<VecDeque<KgResult<BTreeSet<String>>>>,
    representatives: Mutex<VecDeque<KgResult<String>>>,
    assignments: Mutex<VecDeque<KgResult<Vec<Option<String>>>>>,
    fail_all: bool,
    pub calls: Calls,
}

impl ScriptedOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// An oracle whose every query fails.
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Default::default()
        }
    }

    pub fn propose(self, answer: &[&str]) -> Self {
        self.proposals.lock().unwrap().push_back(Ok(set(answer)));
        self
    }

    pub fn validate(self, answer: &[&str]) -> Self {
        self.validations.lock().unwrap().push_back(Ok(set(answer)));
        self
    }

    /// Queue a failed validation.
    pub fn validate_err(self) -> Self {
        self.validations
            .lock()
            .unwrap()
            .push_back(Err(KgError::llm("validation request failed")));
        self
    }

    pub fn representative(self, answer: &str) -> Self {
        self.representatives
            .lock()
            .unwrap()
            .push_back(Ok(answer.to_string()));
        self
    }

    pub fn assign(self, answer: &[Option<&str>]) -> Self {
        self.assignments
            .lock()
            .unwrap()
            .push_back(Ok(answer.iter().map(|a| a.map(str::to_string)).collect()));
        self
    }

    fn check(&self) -> KgResult<()> {
        if self.fail_all {
            return Err(KgError::llm("oracle unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl Oracle for ScriptedOracle {
    async fn propose_cluster(
        &self,
        _candidates: &BTreeSet<String>,
        _context: &str,
    ) -> KgResult<BTreeSet<String>> {
        self.calls.propose.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.proposals
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(BTreeSet::new()))
    }

    async fn validate_cluster(
        &self,
        members: &BTreeSet<String>,
        _context: &str,
    ) -> KgResult<BTreeSet<String>> {
        self.calls.validate.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.validations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(members.clone()))
    }

    async fn choose_representative(
        &self,
        _members: &BTreeSet<String>,
        _context: &str,
    ) -> KgResult<String> {
        self.calls.choose.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.representatives
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(KgError::no_answer("no scripted representative")))
    }

    async fn batch_assign(
        &self,
        items: &[String],
        _clusters: &[Cluster],
        _context: &str,
    ) -> KgResult<Vec<Option<String>>> {
        self.calls.batch.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.assignments
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(vec![None; items.len()]))
    }
}

/// Answers honestly from a fixed label -> group table.
///
/// Labels missing from the table form their own group. Safe to share
/// between concurrent entity and edge runs.
#[derive(Default)]
pub struct GroupOracle {
    groups: BTreeMap<String, String>,
    pub calls: Calls,
}

impl GroupOracle {
    pub fn new(groups: &[(&str, &[&str])]) -> Self {
        let groups = groups
            .iter()
            .flat_map(|(key, labels)| labels.iter().map(move |l| (l.to_string(), key.to_string())))
            .collect();
        Self {
            groups,
            calls: Calls::default(),
        }
    }

    fn key<'a>(&'a self, label: &'a str) -> &'a str {
        self.groups.get(label).map(String::as_str).unwrap_or(label)
    }
}

#[async_trait]
impl Oracle for GroupOracle {
    async fn propose_cluster(
        &self,
        candidates: &BTreeSet<String>,
        _context: &str,
    ) -> KgResult<BTreeSet<String>> {
        self.calls.propose.fetch_add(1, Ordering::SeqCst);
        let mut by_key: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
        for c in candidates {
            by_key.entry(self.key(c)).or_default().insert(c.clone());
        }
        Ok(by_key
            .into_values()
            .find(|g| g.len() > 1)
            .unwrap_or_default())
    }

    async fn validate_cluster(
        &self,
        members: &BTreeSet<String>,
        _context: &str,
    ) -> KgResult<BTreeSet<String>> {
        self.calls.validate.fetch_add(1, Ordering::SeqCst);
        let Some(first) = members.iter().next() else {
            return Ok(BTreeSet::new());
        };
        let key = self.key(first);
        Ok(members
            .iter()
            .filter(|m| self.key(m) == key)
            .cloned()
            .collect())
    }

    async fn choose_representative(
        &self,
        members: &BTreeSet<String>,
        _context: &str,
    ) -> KgResult<String> {
        self.calls.choose.fetch_add(1, Ordering::SeqCst);
        members
            .iter()
            .min_by_key(|m| m.len())
            .cloned()
            .ok_or_else(|| KgError::no_answer("empty cluster"))
    }

    async fn batch_assign(
        &self,
        items: &[String],
        clusters: &[Cluster],
        _context: &str,
    ) -> KgResult<Vec<Option<String>>> {
        self.calls.batch.fetch_add(1, Ordering::SeqCst);
        Ok(items
            .iter()
            .map(|item| {
                clusters
                    .iter()
                    .find(|c| self.key(&c.representative) == self.key(item))
                    .map(|c| c.representative.clone())
            })
            .collect())
    }
}
