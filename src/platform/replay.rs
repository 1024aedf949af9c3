//! `HttpClient` that serves recorded responses
//!
//! Fixtures map an exact URL to a status and body. Any URL without a
//! recording fails like a dropped connection. Every request is logged so
//! callers can assert on call counts and order.

use super::{HttpClient, HttpRequest, HttpResponse};
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// One recorded response in a fixture file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedResponse {
    /// HTTP status code
    #[serde(default = "default_status")]
    pub status: u16,
    /// Response body; JSON strings are served verbatim, anything else is
    /// serialized
    #[serde(default)]
    pub body: serde_json::Value,
}

const fn default_status() -> u16 {
    200
}

impl RecordedResponse {
    /// A 200 response with a JSON body
    pub const fn ok(body: serde_json::Value) -> Self {
        Self { status: 200, body }
    }

    /// A response with the given status and JSON body
    pub const fn with_status(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    fn to_response(&self) -> HttpResponse {
        let body = match &self.body {
            serde_json::Value::String(raw) => raw.clone(),
            other => other.to_string(),
        };
        HttpResponse {
            status: self.status,
            body,
        }
    }
}

/// Deterministic HTTP client for replays and tests
#[derive(Debug, Default)]
pub struct ReplayClient {
    responses: BTreeMap<String, RecordedResponse>,
    calls: Mutex<Vec<HttpRequest>>,
}

impl ReplayClient {
    /// Create a client with no recordings
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a response for an exact URL
    #[must_use]
    pub fn with_response(mut self, url: impl Into<String>, response: RecordedResponse) -> Self {
        self.responses.insert(url.into(), response);
        self
    }

    /// Parse a fixture document: `{ "<url>": { "status": 200, "body": ... } }`
    pub fn from_json_str(json: &str) -> Result<Self> {
        let responses: BTreeMap<String, RecordedResponse> = serde_json::from_str(json)
            .map_err(|e| Error::Fixture(format!("invalid fixture document: {e}")))?;
        Ok(Self {
            responses,
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Load a fixture file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Fixture(format!("failed to read {}: {e}", path.display())))?;
        Self::from_json_str(&content)
    }

    /// Number of requests made so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// URLs requested so far, in order
    pub fn requested_urls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|r| r.url.clone())
            .collect()
    }

    /// Full requests made so far, in order
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl HttpClient for ReplayClient {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        match self.responses.get(&request.url) {
            Some(recorded) => {
                debug!(url = %request.url, status = recorded.status, "replayed response");
                Ok(recorded.to_response())
            }
            None => Err(Error::Http(format!(
                "no recorded response for {}",
                request.url
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_serves_recorded_response_and_counts_calls() {
        let client = ReplayClient::new()
            .with_response("https://example.test/a", RecordedResponse::ok(json!({"x": 1})));

        let response = client
            .get(&HttpRequest::get("https://example.test/a"))
            .await
            .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"x":1}"#);
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_url_is_transport_error() {
        let client = ReplayClient::new();
        let err = client
            .get(&HttpRequest::get("https://example.test/missing"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Http(_)));
        assert_eq!(client.requested_urls(), vec!["https://example.test/missing"]);
    }

    #[test]
    fn test_fixture_document_defaults() {
        let client = ReplayClient::from_json_str(
            r#"{ "https://example.test/a": { "body": "plain text" },
                 "https://example.test/b": { "status": 502 } }"#,
        )
        .unwrap();

        let a = client.responses["https://example.test/a"].to_response();
        assert_eq!(a.status, 200);
        assert_eq!(a.body, "plain text");

        let b = client.responses["https://example.test/b"].to_response();
        assert_eq!(b.status, 502);
        assert!(!b.is_success());
    }

    #[test]
    fn test_malformed_fixture_is_rejected() {
        assert!(matches!(
            ReplayClient::from_json_str("[1, 2]"),
            Err(Error::Fixture(_))
        ));
    }
}
