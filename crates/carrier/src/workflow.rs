use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use serde_json::{json, Map, Value};

use crate::config::WorkflowConfig;

/// Bound on a single workflow exchange, connect time included.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for the hosted Gmail workflow endpoint.
///
/// The endpoint is the sole authority on which `action` values are legal;
/// nothing is validated on this side.
pub struct WorkflowClient {
    client: Client,
    config: WorkflowConfig,
}

impl WorkflowClient {
    pub fn new(config: WorkflowConfig) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { client, config })
    }

    /// Forward `action` and its payload to the workflow endpoint.
    ///
    /// Always produces a value: any failure in the exchange is folded into
    /// an `{"error": ...}` envelope for the agent to inspect. The endpoint
    /// sees a single flat body, with `action` taking precedence over a
    /// payload field of the same name.
    pub async fn dispatch(&self, action: &str, payload: Option<Map<String, Value>>) -> Value {
        let mut body = payload.unwrap_or_default();
        body.insert("action".to_string(), json!(action));

        match self.post(Value::Object(body)).await {
            Ok(value) => value,
            Err(e) => json!({ "error": e.to_string() }),
        }
    }

    async fn post(&self, body: Value) -> Result<Value> {
        let response = self
            .client
            .post(&self.config.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}
