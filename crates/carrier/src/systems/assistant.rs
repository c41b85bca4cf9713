use async_trait::async_trait;
use serde_json::{json, Value};

use crate::errors::{ToolError, ToolResult};
use crate::models::content::Content;
use crate::models::tool::{Tool, ToolCall};
use crate::search::SearchClient;
use crate::systems::System;
use crate::workflow::WorkflowClient;

/// The assistant's tool surface: a web search and the Gmail workflow relay,
/// always advertised in that order.
pub struct AssistantSystem {
    tools: Vec<Tool>,
    search: SearchClient,
    workflow: WorkflowClient,
}

impl AssistantSystem {
    pub fn new(search: SearchClient, workflow: WorkflowClient) -> Self {
        let search_tool = Tool::new(
            "search",
            "Search the web for general results. Particularly useful for \
            questions about current events.",
            json!({
                "type": "object",
                "required": ["query"],
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query."
                    }
                }
            }),
        );

        let gmail_tool = Tool::new(
            "gmail_action",
            "Interact with the Gmail workflow. The `action` parameter names \
            the operation to perform (e.g. 'send', 'read', 'delete'); the \
            optional `payload` object is forwarded with the request.",
            json!({
                "type": "object",
                "required": ["action"],
                "properties": {
                    "action": {
                        "type": "string",
                        "description": "The action to perform."
                    },
                    "payload": {
                        "type": "object",
                        "default": null,
                        "description": "Additional fields to send with the request."
                    }
                }
            }),
        );

        Self {
            tools: vec![search_tool, gmail_tool],
            search,
            workflow,
        }
    }

    // Fail-open: a provider failure comes back as an error, never as output.
    async fn web_search(&self, arguments: Value) -> ToolResult<Value> {
        let query = arguments
            .get("query")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                ToolError::InvalidParameters("search requires a string `query`".to_string())
            })?;

        self.search
            .search(query)
            .await
            .map_err(|e| ToolError::Execution(e.to_string()))
    }

    // Fail-closed: past the argument checks, every failure is already an
    // `{"error": ...}` value from the client.
    async fn gmail_action(&self, arguments: Value) -> ToolResult<Value> {
        let action = arguments
            .get("action")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                ToolError::InvalidParameters("gmail_action requires a string `action`".to_string())
            })?;

        let payload = arguments
            .get("payload")
            .and_then(|v| v.as_object())
            .cloned();

        Ok(self.workflow.dispatch(action, payload).await)
    }
}

#[async_trait]
impl System for AssistantSystem {
    fn name(&self) -> &str {
        "assistant"
    }

    fn description(&self) -> &str {
        "Answers questions using web search and a hosted Gmail workflow"
    }

    fn instructions(&self) -> &str {
        "Use `search` to look up current information on the web. Use \
        `gmail_action` to read, send or otherwise manage mail through the \
        hosted workflow."
    }

    fn tools(&self) -> &[Tool] {
        &self.tools
    }

    async fn call(&self, tool_call: ToolCall) -> ToolResult<Vec<Content>> {
        let result = match tool_call.name.as_str() {
            "search" => self.web_search(tool_call.arguments).await,
            "gmail_action" => self.gmail_action(tool_call.arguments).await,
            _ => Err(ToolError::NotFound(tool_call.name)),
        }?;

        Ok(vec![Content::text(result.to_string())])
    }
}
