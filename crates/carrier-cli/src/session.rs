use anyhow::Result;

use carrier::agent::Agent;
use carrier::models::message::Message;

/// Ask the agent one question and print the outcome.
///
/// The question becomes the sole initial message; whatever transcript the
/// agent finishes with, only its last entry is shown.
pub async fn run(agent: &dyn Agent, question: &str) -> Result<()> {
    println!("Running agent...\n");

    let messages = vec![Message::user().with_text(question)];
    let transcript = agent.invoke(&messages).await?;

    println!("{}", render(&transcript));
    Ok(())
}

fn render(transcript: &[Message]) -> String {
    match transcript.last() {
        Some(last) => format!("Agent response:\n\n{}", last.text()),
        None => "No response from agent.".to_string(),
    }
}
