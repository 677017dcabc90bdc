//! Oracle-assisted clustering of one label set.
//!
//! # Phases
//!
//! 1. **Discovery**: ask the oracle for a group of equivalent labels among
//!    the unclustered ones, have it validate the group and elect a
//!    representative. Stops once `patience` consecutive rounds produce
//!    nothing, or every label is clustered.
//! 2. **Reconciliation**: leftovers are sent in fixed-size batches; each
//!    item may join an existing cluster if the oracle re-validates the
//!    enlarged cluster intact, otherwise it becomes a singleton.
//!
//! Every input label ends up in exactly one cluster.

mod arena;
mod engine;

pub use arena::ClusterArena;
pub use engine::{ClusterEngine, ClusterOutcome, ClusterStats};
