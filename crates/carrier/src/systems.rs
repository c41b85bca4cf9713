use async_trait::async_trait;

use crate::errors::ToolResult;
use crate::models::content::Content;
use crate::models::tool::{Tool, ToolCall};

pub mod assistant;

pub use assistant::AssistantSystem;

/// A set of tools an agent can operate.
#[async_trait]
pub trait System: Send + Sync {
    /// Get the name of the system
    fn name(&self) -> &str;

    /// Get the system description
    fn description(&self) -> &str;

    /// Get system instructions
    fn instructions(&self) -> &str;

    /// Get available tools, in the order they are advertised to the agent
    fn tools(&self) -> &[Tool];

    /// Call a tool with the given arguments
    async fn call(&self, tool_call: ToolCall) -> ToolResult<Vec<Content>>;
}
