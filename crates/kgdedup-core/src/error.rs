//! Error types for kgdedup operations.
//!
//! Every fallible operation returns [`KgResult`]. Errors carry an [`ErrorCode`]
//! for programmatic handling; oracle failures are the one class of error the
//! cluster engine swallows rather than propagates.

use thiserror::Error;

/// Result type alias for kgdedup operations.
pub type KgResult<T> = Result<T, KgError>;

/// Main error type for all kgdedup operations.
#[derive(Error, Debug)]
pub enum KgError {
    /// Configuration error (unknown strategy, method, digest, bad config file).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input validation failed.
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        code: ErrorCode,
        suggestion: Option<String>,
    },

    /// LLM operation failed.
    #[error("LLM error: {message}")]
    Llm {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An oracle query did not produce an answer.
    #[error("Oracle error: {message}")]
    Oracle { message: String, code: ErrorCode },

    /// Provider not supported.
    #[error("Provider not supported: {provider}")]
    UnsupportedProvider { provider: String },

    /// Parse error.
    #[error("Parse error: {message}")]
    Parse { message: String, code: ErrorCode },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Configuration (CFG_xxx)
    CfgInvalid,

    // Validation (VAL_xxx)
    ValInvalidInput,
    ValInconsistentGraph,

    // LLM (LLM_xxx)
    LlmConnectionFailed,
    LlmGenerationFailed,
    LlmInvalidResponse,

    // Oracle (ORC_xxx)
    OrcTimeout,
    OrcNoAnswer,

    // Parse (PARSE_xxx)
    ParseInvalidJson,
    ParseMissingField,

    // Internal
    Internal,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::CfgInvalid => "CFG_001",
            ErrorCode::ValInvalidInput => "VAL_001",
            ErrorCode::ValInconsistentGraph => "VAL_002",
            ErrorCode::LlmConnectionFailed => "LLM_001",
            ErrorCode::LlmGenerationFailed => "LLM_002",
            ErrorCode::LlmInvalidResponse => "LLM_003",
            ErrorCode::OrcTimeout => "ORC_001",
            ErrorCode::OrcNoAnswer => "ORC_002",
            ErrorCode::ParseInvalidJson => "PARSE_001",
            ErrorCode::ParseMissingField => "PARSE_002",
            ErrorCode::Internal => "INT_001",
        }
    }
}

impl KgError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            code: ErrorCode::ValInvalidInput,
            suggestion: None,
        }
    }

    /// Create an inconsistent-graph validation error.
    pub fn inconsistent_graph(dangling: usize) -> Self {
        Self::Validation {
            message: format!("{} relation(s) reference unknown labels", dangling),
            code: ErrorCode::ValInconsistentGraph,
            suggestion: Some("Call Graph::prune_dangling before processing".to_string()),
        }
    }

    /// Create an LLM error.
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
            code: ErrorCode::LlmGenerationFailed,
            source: None,
        }
    }

    /// Create an oracle timeout error.
    pub fn oracle_timeout(query: &str, secs: u64) -> Self {
        Self::Oracle {
            message: format!("{} timed out after {}s", query, secs),
            code: ErrorCode::OrcTimeout,
        }
    }

    /// Create an oracle "no answer" error.
    pub fn no_answer(message: impl Into<String>) -> Self {
        Self::Oracle {
            message: message.into(),
            code: ErrorCode::OrcNoAnswer,
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            code: ErrorCode::ParseInvalidJson,
        }
    }

    /// Create a missing-field parse error.
    pub fn missing_field(field: &str) -> Self {
        Self::Parse {
            message: format!("Response has no '{}' key", field),
            code: ErrorCode::ParseMissingField,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Configuration(_) => ErrorCode::CfgInvalid,
            Self::Validation { code, .. } => *code,
            Self::Llm { code, .. } => *code,
            Self::Oracle { code, .. } => *code,
            Self::Parse { code, .. } => *code,
            _ => ErrorCode::Internal,
        }
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::Configuration(_) => {
                Some("Check dedup_strategy, method and hash_algorithm values")
            }
            Self::Validation { suggestion, .. } => suggestion.as_deref(),
            Self::Llm { .. } => Some("Please check your LLM provider configuration"),
            _ => None,
        }
    }
}

impl From<strum::ParseError> for KgError {
    fn from(err: strum::ParseError) -> Self {
        Self::Configuration(err.to_string())
    }
}
