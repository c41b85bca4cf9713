use anyhow::{anyhow, Result};
use reqwest::Client;
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::config::SearchConfig;

/// Client for the Tavily web search API.
pub struct SearchClient {
    client: Client,
    config: SearchConfig,
}

impl SearchClient {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Search the web for `query` and return the provider's response as-is.
    ///
    /// Nothing is caught here: a connection failure, an unexpected status
    /// or an unparseable body all surface to the caller.
    pub async fn search(&self, query: &str) -> Result<Value> {
        let url = format!("{}/search", self.config.host.trim_end_matches('/'));

        let payload = json!({
            "query": query,
            "max_results": self.config.max_results,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            status if status == StatusCode::TOO_MANY_REQUESTS || status.as_u16() >= 500 => {
                Err(anyhow!("Server error: {}", status))
            }
            status => Err(anyhow!("Request failed: {}", status)),
        }
    }
}
