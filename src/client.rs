//! Agent service client
//!
//! Issues the run request for one agent and extracts the `result` field from
//! the reply. The HTTP status is not inspected: whatever body comes back is
//! parsed as JSON. No retries or timeouts are applied.

use serde::Serialize;
use serde_json::Value;

use crate::error::RunError;
use crate::state::Agent;

/// Query sent with every run
pub const RUN_QUERY: &str = "Start analysis";

/// Body of a run request
#[derive(Debug, Serialize)]
struct AgentRunRequest<'a> {
    query: &'a str,
}

/// HTTP client for the agent run endpoints
#[derive(Debug, Clone)]
pub struct AgentClient {
    http: reqwest::Client,
    base_url: String,
}

impl AgentClient {
    /// Create a client with its own connection pool
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an agent's run endpoint
    pub fn endpoint(&self, agent: Agent) -> String {
        format!("{}{}", self.base_url, agent.request_path())
    }

    /// Run an agent and return its `result` text
    ///
    /// # Returns
    /// * `Ok(Some(text))` - the reply carried a string `result`
    /// * `Ok(None)` - the reply was JSON without a string `result`
    /// * `Err(RunError)` - transport failure, a body that is not JSON, or `null`
    pub async fn run_agent(&self, agent: Agent) -> Result<Option<String>, RunError> {
        let url = self.endpoint(agent);
        tracing::debug!(url = %url, agent = %agent, "Running agent");

        let response = self
            .http
            .post(&url)
            .json(&AgentRunRequest { query: RUN_QUERY })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(
            agent = %agent,
            status = status.as_u16(),
            body_len = body.len(),
            "Agent replied"
        );

        parse_run_response(&body)
    }
}

/// Extract the `result` string from a run response body
pub fn parse_run_response(body: &str) -> Result<Option<String>, RunError> {
    let value: Value = serde_json::from_str(body)?;
    match value {
        Value::Object(mut fields) => Ok(match fields.remove("result") {
            Some(Value::String(result)) => Some(result),
            _ => None,
        }),
        Value::Null => Err(RunError::InvalidResponse(
            "response body is null, cannot read `result`".to_string(),
        )),
        // Arrays and scalars have no `result` field
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::workspace::outcome_text;
    use mockito::{Matcher, Server};

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = AgentClient::new("http://localhost:8000/");
        assert_eq!(
            client.endpoint(Agent::Policy),
            "http://localhost:8000/api/agent/policy"
        );
    }

    #[test]
    fn test_parse_run_response() {
        assert_eq!(
            parse_run_response(r#"{"result": "X"}"#).unwrap(),
            Some("X".to_string())
        );
        assert_eq!(parse_run_response("{}").unwrap(), None);
        assert_eq!(parse_run_response(r#"{"result": 42}"#).unwrap(), None);
        assert_eq!(parse_run_response("[]").unwrap(), None);
        assert!(parse_run_response("null").is_err());
        assert!(matches!(
            parse_run_response("<html>502</html>"),
            Err(RunError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_scalar_body_shows_fallback() {
        for body in [r#""hello""#, "42", "true"] {
            let outcome = parse_run_response(body);
            assert_eq!(outcome, Ok(None), "body {}", body);
            assert_eq!(outcome_text(outcome), "No output returned.");
        }
    }

    #[test]
    fn test_null_body_is_error() {
        let text = outcome_text(parse_run_response("null"));
        assert!(text.starts_with("Error: "), "unexpected text: {}", text);
    }

    #[tokio::test]
    async fn test_run_agent_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/agent/regulation")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({"query": "Start analysis"})))
            .with_status(200)
            .with_body(r###"{"result": "## Regulation\n\nAll clear"}"###)
            .create_async()
            .await;

        let client = AgentClient::new(server.url());
        let result = client.run_agent(Agent::Regulation).await;

        mock.assert_async().await;
        assert_eq!(result.unwrap().as_deref(), Some("## Regulation\n\nAll clear"));
    }

    #[tokio::test]
    async fn test_run_agent_error_status_body_still_parsed() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/agent/custom")
            .with_status(500)
            .with_body(r#"{"detail": "Internal Server Error"}"#)
            .create_async()
            .await;

        let client = AgentClient::new(server.url());
        let result = client.run_agent(Agent::Custom).await;

        mock.assert_async().await;
        assert_eq!(result.unwrap(), None);
    }

    #[tokio::test]
    async fn test_run_agent_non_json_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/agent/risk")
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        let client = AgentClient::new(server.url());
        let result = client.run_agent(Agent::Risk).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RunError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_run_agent_connection_refused() {
        // Port 9 (discard) on localhost is not expected to accept HTTP
        let client = AgentClient::new("http://127.0.0.1:9");
        let result = client.run_agent(Agent::Policy).await;
        assert!(matches!(result, Err(RunError::Transport(_))));
    }
}
