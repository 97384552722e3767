//! Blocking `ureq` transport bridged onto the tokio runtime

use std::time::Duration;

use async_trait::async_trait;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse, Method};

const USER_AGENT: &str = concat!("solvegauge/", env!("CARGO_PKG_VERSION"));

/// [`HttpClient`] backed by a shared `ureq::Agent`.
///
/// `ureq` is synchronous, so each request runs on tokio's blocking pool.
#[derive(Clone)]
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    /// Create a client whose connect and read timeouts are both `timeout`
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .user_agent(USER_AGENT)
            .build();
        Self { agent }
    }
}

#[async_trait]
impl HttpClient for UreqClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || execute(&agent, request))
            .await
            .map_err(|e| HttpError(format!("HTTP worker failed: {}", e)))?
    }
}

fn execute(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, HttpError> {
    let mut req = agent.request(request.method.as_str(), &request.url);
    for (name, value) in &request.headers {
        req = req.set(name, value);
    }

    let result = match (&request.method, &request.body) {
        (Method::Post, Some(body)) => req.send_string(body),
        _ => req.call(),
    };

    match result {
        Ok(response) => {
            let status = response.status();
            let body = response
                .into_string()
                .map_err(|e| HttpError(format!("Failed to read response: {}", e)))?;
            Ok(HttpResponse { status, body })
        }
        Err(ureq::Error::Status(status, response)) => {
            // Error bodies are only used for diagnostics
            let body = response.into_string().unwrap_or_default();
            Ok(HttpResponse { status, body })
        }
        Err(ureq::Error::Transport(e)) => Err(HttpError(format!(
            "Failed to reach {}: {}",
            request.url, e
        ))),
    }
}
