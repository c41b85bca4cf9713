use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::agent::Agent;
use crate::models::message::Message;
use crate::models::tool::ToolCall;
use crate::systems::System;

/// One step of a scripted run.
pub enum Step {
    /// Append a pre-written message to the transcript.
    Reply(Message),
    /// Dispatch a tool call through the attached system and append the
    /// request/response pair to the transcript.
    CallTool(ToolCall),
}

/// A scripted stand-in for the real engine, used for testing.
///
/// Replays a fixed list of steps and records everything that crosses the
/// seam, so callers can assert on the exact messages and tool calls the
/// engine saw.
pub struct ScriptedAgent {
    steps: Mutex<Vec<Step>>,
    silent: bool,
    systems: Vec<Box<dyn System>>,
    invoked_with: Mutex<Vec<Message>>,
    dispatched: Mutex<Vec<ToolCall>>,
}

impl ScriptedAgent {
    /// An agent that replays `steps` after the initial messages.
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps),
            silent: false,
            systems: Vec::new(),
            invoked_with: Mutex::new(Vec::new()),
            dispatched: Mutex::new(Vec::new()),
        }
    }

    /// An agent whose run produces an empty conversation.
    pub fn silent() -> Self {
        let mut agent = Self::new(Vec::new());
        agent.silent = true;
        agent
    }

    /// The initial messages passed to the last `invoke`.
    pub fn invoked_with(&self) -> Vec<Message> {
        self.invoked_with.lock().unwrap().clone()
    }

    /// Every tool call dispatched during the run, in order.
    pub fn dispatched(&self) -> Vec<ToolCall> {
        self.dispatched.lock().unwrap().clone()
    }
}

#[async_trait]
impl Agent for ScriptedAgent {
    fn add_system(&mut self, system: Box<dyn System>) {
        self.systems.push(system);
    }

    async fn invoke(&self, messages: &[Message]) -> Result<Vec<Message>> {
        *self.invoked_with.lock().unwrap() = messages.to_vec();

        if self.silent {
            return Ok(Vec::new());
        }

        let steps = std::mem::take(&mut *self.steps.lock().unwrap());
        let mut transcript = messages.to_vec();

        for (index, step) in steps.into_iter().enumerate() {
            match step {
                Step::Reply(message) => transcript.push(message),
                Step::CallTool(call) => {
                    self.dispatched.lock().unwrap().push(call.clone());

                    let system = self
                        .systems
                        .first()
                        .ok_or_else(|| anyhow!("no system attached"))?;

                    let id = index.to_string();
                    transcript
                        .push(Message::assistant().with_tool_request(id.clone(), Ok(call.clone())));

                    let contents = system.call(call).await?;
                    transcript.push(Message::user().with_tool_response(id, Ok(contents)));
                }
            }
        }

        Ok(transcript)
    }
}
