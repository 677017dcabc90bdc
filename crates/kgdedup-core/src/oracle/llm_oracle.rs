//! Oracle implementation that asks an LLM for JSON answers.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::{KgError, KgResult};
use crate::traits::{GenerationOptions, Llm, Oracle, ResponseFormat};
use crate::types::{Cluster, Message};

use super::json_parser::{extract_key, label, label_list, optional_label_list};
use super::prompts::{self, keys};

/// [`Oracle`] that poses each query as one chat completion.
///
/// The system message carries the instruction and the expected output key.
/// The user message is the query inputs serialized as JSON.
pub struct LlmOracle {
    llm: Arc<dyn Llm>,
}

impl LlmOracle {
    /// Create a new oracle over `llm`.
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self { llm }
    }

    /// The underlying model name.
    pub fn model_name(&self) -> &str {
        self.llm.model_name()
    }

    async fn predict_json(&self, instruction: &str, inputs: Value, key: &str) -> KgResult<Value> {
        let messages = vec![
            Message::system(prompts::with_output_key(instruction, key)),
            Message::user(inputs.to_string()),
        ];

        let options = GenerationOptions {
            temperature: Some(0.0),
            response_format: self
                .llm
                .supports_json_mode()
                .then_some(ResponseFormat::Json),
            ..Default::default()
        };

        let response = self.llm.generate(&messages, Some(options)).await?;
        let content = response
            .content
            .ok_or_else(|| KgError::no_answer(format!("Empty response for '{}'", key)))?;

        tracing::trace!(key, response = %content, "Oracle response");
        extract_key(&content, key)
    }
}

#[async_trait]
impl Oracle for LlmOracle {
    async fn propose_cluster(
        &self,
        candidates: &BTreeSet<String>,
        context: &str,
    ) -> KgResult<BTreeSet<String>> {
        let value = self
            .predict_json(
                &prompts::propose_cluster(),
                json!({ "items": candidates, "context": context }),
                keys::CLUSTER,
            )
            .await?;
        Ok(label_list(&value)?.into_iter().collect())
    }

    async fn validate_cluster(
        &self,
        members: &BTreeSet<String>,
        context: &str,
    ) -> KgResult<BTreeSet<String>> {
        let value = self
            .predict_json(
                &prompts::validate_cluster(),
                json!({ "cluster": members, "context": context }),
                keys::VALIDATED_ITEMS,
            )
            .await?;
        Ok(label_list(&value)?.into_iter().collect())
    }

    async fn choose_representative(
        &self,
        members: &BTreeSet<String>,
        context: &str,
    ) -> KgResult<String> {
        let value = self
            .predict_json(
                prompts::CHOOSE_REPRESENTATIVE,
                json!({ "cluster": members, "context": context }),
                keys::REPRESENTATIVE,
            )
            .await?;
        label(&value)
    }

    async fn batch_assign(
        &self,
        items: &[String],
        clusters: &[Cluster],
        context: &str,
    ) -> KgResult<Vec<Option<String>>> {
        let value = self
            .predict_json(
                prompts::BATCH_ASSIGN,
                json!({ "items": items, "clusters": clusters, "context": context }),
                keys::ASSIGNMENTS,
            )
            .await?;
        optional_label_list(&value)
    }
}
