//! JSON extraction from LLM oracle responses.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::{KgError, KgResult};

static CODE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```[a-zA-Z0-9]*\n?([\s\S]*?)\n?```$").expect("valid regex"));

static THINK_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<think>[\s\S]*?</think>").expect("valid regex"));

// Outermost braces, greedy
static JSON_OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[\s\S]*\}").expect("valid regex"));

/// Remove code fences and thinking tags from a response.
pub fn remove_code_blocks(content: &str) -> String {
    let content = content.trim();

    let content = CODE_BLOCK
        .captures(content)
        .and_then(|c| c.get(1).map(|m| m.as_str().trim()))
        .unwrap_or(content);

    THINK_TAG.replace_all(content, "").trim().to_string()
}

/// Parse the first JSON object embedded in `response`.
pub fn extract_object(response: &str) -> KgResult<Value> {
    let cleaned = remove_code_blocks(response);

    let json = JSON_OBJECT
        .find(&cleaned)
        .map(|m| m.as_str())
        .ok_or_else(|| KgError::parse("No JSON object found in oracle response"))?;

    let value: Value = serde_json::from_str(json)
        .map_err(|e| KgError::parse(format!("Failed to parse oracle JSON: {}", e)))?;

    if !value.is_object() {
        return Err(KgError::parse("Oracle response is not a JSON object"));
    }
    Ok(value)
}

/// Extract `key` from the JSON object embedded in `response`.
pub fn extract_key(response: &str, key: &str) -> KgResult<Value> {
    let mut object = extract_object(response)?;
    object
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| KgError::missing_field(key))
}

/// Read a label list. Labels are kept verbatim; non-string and blank
/// entries are skipped, `null` is empty.
pub fn label_list(value: &Value) -> KgResult<Vec<String>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items
            .iter()
            .filter_map(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .collect()),
        other => Err(KgError::parse(format!("Expected a list of labels, got {}", other))),
    }
}

/// Read a single label verbatim. A one-element list is accepted.
pub fn label(value: &Value) -> KgResult<String> {
    let text = match value {
        Value::String(s) => s.as_str(),
        Value::Array(items) => items.first().and_then(Value::as_str).unwrap_or(""),
        _ => "",
    };

    if text.trim().is_empty() {
        return Err(KgError::no_answer("Oracle returned no label"));
    }
    Ok(text.to_string())
}

/// Read a list of optional labels. `null`, `""` and `"None"` mean no match.
pub fn optional_label_list(value: &Value) -> KgResult<Vec<Option<String>>> {
    let items = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        other => {
            return Err(KgError::parse(format!(
                "Expected a list of representatives, got {}",
                other
            )))
        }
    };

    Ok(items
        .iter()
        .map(|v| {
            v.as_str()
                .filter(|s| {
                    let s = s.trim();
                    !s.is_empty() && !s.eq_ignore_ascii_case("none")
                })
                .map(str::to_string)
        })
        .collect())
}
