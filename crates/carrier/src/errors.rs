use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures that can surface while dispatching a tool call.
///
/// Serializable so a failed call can travel inside a conversation
/// transcript like any other tool content.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum ToolError {
    #[error("tool not found: {0}")]
    NotFound(String),

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("tool execution failed: {0}")]
    Execution(String),
}

pub type ToolResult<T> = Result<T, ToolError>;
