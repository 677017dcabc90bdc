//! kgdedup-llm - LLM provider implementations for kgdedup.
//!
//! Providers implement [`kgdedup_core::Llm`] and are usually wrapped in a
//! [`kgdedup_core::LlmOracle`] to drive clustering.
//!
//! # Supported Providers
//!
//! - **OpenAI** (feature: `openai`) - GPT-4o and compatible endpoints
//! - **Ollama** (feature: `ollama`) - Local models via Ollama
//!
//! # Example
//!
//! ```ignore
//! use kgdedup_core::{DedupOrchestrator, PipelineConfig};
//! use kgdedup_llm::LlmFactory;
//!
//! let config = PipelineConfig::from_env()?;
//! let llm = LlmFactory::from_config(&config.llm)?;
//! let orchestrator = DedupOrchestrator::with_llm(config, llm)?;
//! ```

mod factory;
mod ollama;
mod openai;

pub use factory::LlmFactory;
pub use ollama::OllamaLlm;
pub use openai::OpenAIProvider;

// Re-export core types for convenience
pub use kgdedup_core::config::{LlmProvider, LlmProviderConfig};
pub use kgdedup_core::traits::{GenerationOptions, Llm, LlmConfig, LlmResponse, ResponseFormat};
