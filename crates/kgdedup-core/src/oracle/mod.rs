//! LLM-backed [`Oracle`](crate::traits::Oracle).

mod json_parser;
mod llm_oracle;
mod prompts;

pub use json_parser::{extract_key, extract_object, remove_code_blocks};
pub use llm_oracle::LlmOracle;
