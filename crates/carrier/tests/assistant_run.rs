use anyhow::Result;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use carrier::agent::scripted::{ScriptedAgent, Step};
use carrier::agent::Agent;
use carrier::config::{SearchConfig, WorkflowConfig};
use carrier::models::message::Message;
use carrier::models::tool::ToolCall;
use carrier::search::SearchClient;
use carrier::systems::AssistantSystem;
use carrier::workflow::WorkflowClient;

fn assistant(search_host: String, workflow_url: String) -> AssistantSystem {
    let search = SearchClient::new(SearchConfig {
        host: search_host,
        api_key: "tvly-test".to_string(),
        max_results: 5,
    });
    let workflow = WorkflowClient::new(WorkflowConfig { url: workflow_url }).unwrap();
    AssistantSystem::new(search, workflow)
}

/// A full run that touches both tools: look something up, send a mail about
/// it, answer.
#[tokio::test]
async fn test_run_with_both_tools() -> Result<()> {
    let search_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({"query": "rust 1.80 release date", "max_results": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"title": "Rust 1.80.0 released", "url": "https://blog.rust-lang.org"}]
        })))
        .expect(1)
        .mount(&search_server)
        .await;

    let workflow_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({
            "action": "send",
            "to": "team@example.com",
            "subject": "Rust 1.80"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "sent"})))
        .expect(1)
        .mount(&workflow_server)
        .await;

    let mut agent = ScriptedAgent::new(vec![
        Step::CallTool(ToolCall::new(
            "search",
            json!({"query": "rust 1.80 release date"}),
        )),
        Step::CallTool(ToolCall::new(
            "gmail_action",
            json!({
                "action": "send",
                "payload": {"to": "team@example.com", "subject": "Rust 1.80"}
            }),
        )),
        Step::Reply(Message::assistant().with_text("Sent the release note to the team.")),
    ]);
    agent.add_system(Box::new(assistant(
        search_server.uri(),
        workflow_server.uri(),
    )));

    let transcript = agent
        .invoke(&[Message::user().with_text(
            "When was Rust 1.80 released? Mail the team about it.",
        )])
        .await?;

    assert_eq!(agent.dispatched().len(), 2);
    assert_eq!(
        transcript.last().unwrap().text(),
        "Sent the release note to the team."
    );

    // The workflow reply travels back through the transcript as tool output.
    let tool_outputs: Vec<Value> = transcript
        .iter()
        .flat_map(|m| m.content.iter())
        .filter_map(|c| c.as_tool_response())
        .map(|r| {
            let contents = r.tool_result.as_ref().unwrap();
            serde_json::from_str(contents[0].as_text().unwrap()).unwrap()
        })
        .collect();
    assert_eq!(tool_outputs[1], json!({"status": "sent"}));
    Ok(())
}

/// A search provider failure aborts the whole run.
#[tokio::test]
async fn test_search_failure_aborts_run() {
    let search_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&search_server)
        .await;

    let mut agent = ScriptedAgent::new(vec![Step::CallTool(ToolCall::new(
        "search",
        json!({"query": "anything"}),
    ))]);
    agent.add_system(Box::new(assistant(
        search_server.uri(),
        "http://127.0.0.1:1".to_string(),
    )));

    let result = agent
        .invoke(&[Message::user().with_text("look this up")])
        .await;
    assert!(result.is_err());
}

/// A workflow failure does not abort the run; it rides along as data.
#[tokio::test]
async fn test_workflow_failure_is_conversation_data() -> Result<()> {
    let workflow_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&workflow_server)
        .await;

    let mut agent = ScriptedAgent::new(vec![
        Step::CallTool(ToolCall::new("gmail_action", json!({"action": "send"}))),
        Step::Reply(Message::assistant().with_text("The mail could not be sent.")),
    ]);
    agent.add_system(Box::new(assistant(
        "http://127.0.0.1:1".to_string(),
        workflow_server.uri(),
    )));

    let transcript = agent
        .invoke(&[Message::user().with_text("send the mail")])
        .await?;

    let response = transcript
        .iter()
        .flat_map(|m| m.content.iter())
        .find_map(|c| c.as_tool_response())
        .expect("tool response in transcript");
    let value: Value =
        serde_json::from_str(response.tool_result.as_ref().unwrap()[0].as_text().unwrap())?;
    assert!(value["error"].as_str().unwrap().contains("502"));
    Ok(())
}
