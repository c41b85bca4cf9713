use anyhow::Result;
use async_trait::async_trait;

use crate::models::message::Message;
use crate::systems::System;

pub mod scripted;

pub use scripted::ScriptedAgent;

/// The seam to the conversational engine.
///
/// The engine owns prompting, planning and tool routing. This crate hands
/// it an initial message list plus the systems it may operate, and reads
/// back the finished transcript.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Attach a system whose tools the engine may invoke
    fn add_system(&mut self, system: Box<dyn System>);

    /// Run the conversation to completion and return the full transcript
    async fn invoke(&self, messages: &[Message]) -> Result<Vec<Message>>;
}
