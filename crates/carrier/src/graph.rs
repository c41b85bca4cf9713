use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::agent::Agent;
use crate::config::GraphConfig;
use crate::models::message::Message;
use crate::models::role::Role;
use crate::systems::System;

/// Transcript entry as the graph runtime speaks it: plain role/content pairs.
#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: Role,
    content: String,
}

#[derive(Debug, Deserialize)]
struct InvokeResponse {
    #[serde(default)]
    messages: Vec<WireMessage>,
}

/// `Agent` backed by an externally hosted graph runtime.
///
/// The runtime owns the conversation loop end to end. This client sends the
/// opening messages along with the definitions of the tools it advertises,
/// then returns the transcript the runtime finished with.
pub struct GraphClient {
    client: Client,
    config: GraphConfig,
    systems: Vec<Box<dyn System>>,
}

impl GraphClient {
    pub fn new(config: GraphConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            systems: Vec::new(),
        }
    }

    fn from_wire(message: WireMessage) -> Message {
        match message.role {
            Role::User => Message::user().with_text(message.content),
            Role::Assistant => Message::assistant().with_text(message.content),
        }
    }
}

#[async_trait]
impl Agent for GraphClient {
    fn add_system(&mut self, system: Box<dyn System>) {
        self.systems.push(system);
    }

    async fn invoke(&self, messages: &[Message]) -> Result<Vec<Message>> {
        let url = format!("{}/invoke", self.config.url.trim_end_matches('/'));

        let wire_messages: Vec<WireMessage> = messages
            .iter()
            .map(|m| WireMessage {
                role: m.role,
                content: m.text(),
            })
            .collect();

        let tools: Vec<_> = self
            .systems
            .iter()
            .flat_map(|system| system.tools())
            .collect();

        let payload = json!({
            "messages": wire_messages,
            "tools": tools,
        });

        let response = self.client.post(&url).json(&payload).send().await?;

        match response.status() {
            StatusCode::OK => {
                let reply: InvokeResponse = response.json().await?;
                Ok(reply.messages.into_iter().map(Self::from_wire).collect())
            }
            status if status.as_u16() >= 500 => Err(anyhow!("Graph server error: {}", status)),
            status => Err(anyhow!("Graph invocation failed: {}", status)),
        }
    }
}
