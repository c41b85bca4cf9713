use std::env;

use anyhow::{Context, Result};

pub const TAVILY_HOST: &str = "https://api.tavily.com";
pub const DEFAULT_MAX_SEARCH_RESULTS: usize = 5;

/// Workflow endpoint used when `GMAIL_MCP_URL` is not set.
pub const WORKFLOW_URL: &str =
    "https://mcp.pipedream.net/f7222a51-6ea5-4c19-baea-66420bcc13b8/gmail";

/// Graph runtime used when `AGENT_GRAPH_URL` is not set.
pub const GRAPH_URL: &str = "http://localhost:2024";

/// Settings for the web search client.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub host: String,
    pub api_key: String,
    /// Upper bound on the number of results requested per query.
    pub max_results: usize,
}

impl SearchConfig {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("TAVILY_API_KEY")
            .context("TAVILY_API_KEY environment variable must be set")?;

        let host = env::var("TAVILY_HOST").unwrap_or_else(|_| TAVILY_HOST.to_string());

        let max_results = env::var("MAX_SEARCH_RESULTS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_MAX_SEARCH_RESULTS);

        Ok(Self {
            host,
            api_key,
            max_results,
        })
    }
}

/// Settings for the hosted Gmail workflow client.
#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    pub url: String,
}

impl WorkflowConfig {
    pub fn from_env() -> Self {
        let url = env::var("GMAIL_MCP_URL").unwrap_or_else(|_| WORKFLOW_URL.to_string());
        Self { url }
    }
}

/// Settings for the remote graph runtime client.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub url: String,
}

impl GraphConfig {
    pub fn from_env() -> Self {
        let url = env::var("AGENT_GRAPH_URL").unwrap_or_else(|_| GRAPH_URL.to_string());
        Self { url }
    }
}

/// Process-wide configuration, assembled once at startup and passed down
/// explicitly so each client stays independently constructible.
#[derive(Debug, Clone)]
pub struct Config {
    pub search: SearchConfig,
    pub workflow: WorkflowConfig,
    pub graph: GraphConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            search: SearchConfig::from_env()?,
            workflow: WorkflowConfig::from_env(),
            graph: GraphConfig::from_env(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_url_override_and_default() {
        env::set_var("GMAIL_MCP_URL", "http://example.test/hook");
        assert_eq!(WorkflowConfig::from_env().url, "http://example.test/hook");

        env::remove_var("GMAIL_MCP_URL");
        assert_eq!(WorkflowConfig::from_env().url, WORKFLOW_URL);
    }

    #[test]
    fn test_graph_url_override_and_default() {
        env::set_var("AGENT_GRAPH_URL", "http://localhost:9999");
        assert_eq!(GraphConfig::from_env().url, "http://localhost:9999");

        env::remove_var("AGENT_GRAPH_URL");
        assert_eq!(GraphConfig::from_env().url, GRAPH_URL);
    }

    // Exercises every search-related variable in one test so no other test
    // races on the same process environment.
    #[test]
    fn test_search_config_from_env() {
        env::remove_var("TAVILY_API_KEY");
        assert!(SearchConfig::from_env().is_err());

        env::set_var("TAVILY_API_KEY", "tvly-test");
        let config = SearchConfig::from_env().unwrap();
        assert_eq!(config.api_key, "tvly-test");
        assert_eq!(config.host, TAVILY_HOST);
        assert_eq!(config.max_results, DEFAULT_MAX_SEARCH_RESULTS);

        env::set_var("MAX_SEARCH_RESULTS", "3");
        assert_eq!(SearchConfig::from_env().unwrap().max_results, 3);

        env::set_var("MAX_SEARCH_RESULTS", "not-a-number");
        assert_eq!(
            SearchConfig::from_env().unwrap().max_results,
            DEFAULT_MAX_SEARCH_RESULTS
        );

        env::remove_var("MAX_SEARCH_RESULTS");
        env::remove_var("TAVILY_API_KEY");
    }
}
