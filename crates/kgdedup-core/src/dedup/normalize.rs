//! Label normalization ahead of hashing.

use crate::config::DedupConfig;

/// Case and whitespace normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    /// Lowercase the label.
    pub normalize_case: bool,
    /// Collapse whitespace runs to one space and trim.
    pub normalize_whitespace: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            normalize_case: true,
            normalize_whitespace: true,
        }
    }
}

impl Normalizer {
    /// Create a normalizer with explicit options.
    pub fn new(normalize_case: bool, normalize_whitespace: bool) -> Self {
        Self {
            normalize_case,
            normalize_whitespace,
        }
    }

    /// Whitespace first, then case. Nothing else (accents, punctuation) is touched.
    pub fn normalize(&self, label: &str) -> String {
        let mut text = if self.normalize_whitespace {
            label.split_whitespace().collect::<Vec<_>>().join(" ")
        } else {
            label.to_string()
        };

        if self.normalize_case {
            text = text.to_lowercase();
        }

        text
    }
}

impl From<&DedupConfig> for Normalizer {
    fn from(config: &DedupConfig) -> Self {
        Self::new(config.normalize_case, config.normalize_whitespace)
    }
}
