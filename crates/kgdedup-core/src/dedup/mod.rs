//! Deterministic label deduplication.
//!
//! Labels are normalized (whitespace, then case), hashed, and every label
//! whose digest was already seen is mapped onto the first label that
//! produced it. This only catches exact-after-normalization duplicates:
//! "Stanford University" and "stanford  university" collapse,
//! "Winter Olympics" and "Olympic Winter Games" do not.

mod deterministic;
mod hasher;
mod normalize;

pub use deterministic::{Deduplicated, Deduplicator, DuplicateMap};
pub use hasher::HashAlgorithm;
pub use normalize::Normalizer;
