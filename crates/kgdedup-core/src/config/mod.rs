//! Configuration system for kgdedup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use strum::{Display, EnumString};

use crate::dedup::HashAlgorithm;
use crate::error::{KgError, KgResult};
use crate::traits::LlmConfig;

/// LLM provider type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LlmProvider {
    #[default]
    OpenAI,
    Ollama,
}

/// Provider configuration with type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmProviderConfig {
    /// Provider type.
    pub provider: LlmProvider,
    /// Provider-specific configuration.
    #[serde(flatten)]
    pub config: LlmConfig,
}

impl Default for LlmProviderConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::OpenAI,
            config: LlmConfig {
                model: "gpt-4o".to_string(),
                ..Default::default()
            },
        }
    }
}

/// How a flat label list is deduplicated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeduplicationMethod {
    /// Hash of the normalized label; exact match after normalization.
    #[default]
    Deterministic,
    /// Embedding-based resolution. Not available in this crate: labels pass
    /// through unchanged.
    Semantic,
}

/// Initial deduplication applied to a graph before clustering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DedupStrategy {
    /// Normalized-hash matching only.
    #[default]
    Deterministic,
    /// Delegate to the installed [`crate::traits::SemanticDeduplicator`].
    SemanticHash,
    /// Deterministic pass, then the semantic-hash pass.
    Both,
}

impl DedupStrategy {
    /// Whether this strategy needs a semantic-hash collaborator.
    pub fn needs_semantic(&self) -> bool {
        matches!(self, Self::SemanticHash | Self::Both)
    }
}

/// Label deduplication settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupConfig {
    /// Deduplication method.
    pub method: DeduplicationMethod,
    /// Digest applied to normalized labels.
    pub hash_algorithm: HashAlgorithm,
    /// Lowercase labels before hashing.
    pub normalize_case: bool,
    /// Collapse whitespace runs and trim before hashing.
    pub normalize_whitespace: bool,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            method: DeduplicationMethod::Deterministic,
            hash_algorithm: HashAlgorithm::Md5,
            normalize_case: true,
            normalize_whitespace: true,
        }
    }
}

/// Cluster engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Consecutive fruitless discovery rounds before moving to batch
    /// reconciliation.
    pub patience: usize,
    /// Leftover items per batch-assignment call.
    pub batch_size: usize,
    /// Per-call oracle timeout in seconds. `None` waits indefinitely.
    pub oracle_timeout_secs: Option<u64>,
    /// Extra context appended to every oracle query.
    pub context: String,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            patience: 8,
            batch_size: 10,
            oracle_timeout_secs: Some(60),
            context: String::new(),
        }
    }
}

impl ClusterConfig {
    /// Per-call oracle timeout.
    pub fn oracle_timeout(&self) -> Option<Duration> {
        self.oracle_timeout_secs.map(Duration::from_secs)
    }
}

/// Main pipeline configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Initial deduplication strategy.
    pub dedup_strategy: DedupStrategy,
    /// Label deduplication settings.
    pub dedup: DedupConfig,
    /// Cluster engine settings.
    pub cluster: ClusterConfig,
    /// LLM used by the default oracle.
    pub llm: LlmProviderConfig,
}

impl PipelineConfig {
    /// Default config file location (`~/.kgdedup/config.toml`).
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".kgdedup"))
            .unwrap_or_else(|| PathBuf::from(".kgdedup"))
            .join("config.toml")
    }

    /// Load configuration from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<Path>) -> KgResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        let config: Self = match ext {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| KgError::Configuration(e.to_string()))?
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| KgError::Configuration(e.to_string()))?,
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|e| KgError::Configuration(e.to_string()))?,
            _ => {
                return Err(KgError::Configuration(
                    "Unsupported config file format. Use .toml, .json, or .yaml".to_string(),
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `KGDEDUP_*` environment variables.
    pub fn from_env() -> KgResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup on top of the defaults.
    fn from_lookup<F>(lookup: F) -> KgResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("KGDEDUP_DEDUP_STRATEGY") {
            config.dedup_strategy = parse_var("KGDEDUP_DEDUP_STRATEGY", &v)?;
        }
        if let Some(v) = lookup("KGDEDUP_DEDUP_METHOD") {
            config.dedup.method = parse_var("KGDEDUP_DEDUP_METHOD", &v)?;
        }
        if let Some(v) = lookup("KGDEDUP_HASH_ALGORITHM") {
            config.dedup.hash_algorithm = parse_var("KGDEDUP_HASH_ALGORITHM", &v)?;
        }
        if let Some(v) = lookup("KGDEDUP_NORMALIZE_CASE") {
            config.dedup.normalize_case = parse_var("KGDEDUP_NORMALIZE_CASE", &v)?;
        }
        if let Some(v) = lookup("KGDEDUP_NORMALIZE_WHITESPACE") {
            config.dedup.normalize_whitespace = parse_var("KGDEDUP_NORMALIZE_WHITESPACE", &v)?;
        }

        if let Some(v) = lookup("KGDEDUP_CLUSTER_PATIENCE") {
            config.cluster.patience = parse_var("KGDEDUP_CLUSTER_PATIENCE", &v)?;
        }
        if let Some(v) = lookup("KGDEDUP_CLUSTER_BATCH_SIZE") {
            config.cluster.batch_size = parse_var("KGDEDUP_CLUSTER_BATCH_SIZE", &v)?;
        }
        if let Some(v) = lookup("KGDEDUP_ORACLE_TIMEOUT_SECS") {
            config.cluster.oracle_timeout_secs = match v.as_str() {
                "" | "none" => None,
                secs => Some(parse_var("KGDEDUP_ORACLE_TIMEOUT_SECS", secs)?),
            };
        }

        if let Some(v) = lookup("KGDEDUP_LLM_PROVIDER") {
            config.llm.provider = parse_var("KGDEDUP_LLM_PROVIDER", &v)?;
        }
        if let Some(model) = lookup("KGDEDUP_LLM_MODEL") {
            config.llm.config.model = model;
        }
        if let Some(url) = lookup("KGDEDUP_LLM_BASE_URL") {
            config.llm.config.base_url = Some(url);
        }
        if let Some(api_key) = lookup("OPENAI_API_KEY") {
            config.llm.config.api_key = Some(api_key);
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> KgResult<()> {
        if self.cluster.batch_size == 0 {
            return Err(KgError::Configuration(
                "cluster.batch_size must be at least 1".to_string(),
            ));
        }
        if self.cluster.patience == 0 {
            return Err(KgError::Configuration(
                "cluster.patience must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Build configuration using builder pattern.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

fn parse_var<T>(key: &str, value: &str) -> KgResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| KgError::Configuration(format!("Invalid value '{}' for {}: {}", value, key, e)))
}

/// Builder for PipelineConfig.
#[derive(Default)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Set the initial deduplication strategy.
    pub fn dedup_strategy(mut self, strategy: DedupStrategy) -> Self {
        self.config.dedup_strategy = strategy;
        self
    }

    /// Set label deduplication settings.
    pub fn dedup(mut self, config: DedupConfig) -> Self {
        self.config.dedup = config;
        self
    }

    /// Set cluster engine settings.
    pub fn cluster(mut self, config: ClusterConfig) -> Self {
        self.config.cluster = config;
        self
    }

    /// Set LLM configuration.
    pub fn llm(mut self, config: LlmProviderConfig) -> Self {
        self.config.llm = config;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> KgResult<PipelineConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
