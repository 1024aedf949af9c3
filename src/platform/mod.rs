//! HTTP seam between the resolvers and GitHub
//!
//! Every external read goes through [`HttpClient`], so a resolution can be
//! replayed byte-for-byte from recorded fixtures.

mod github;
mod replay;
mod reqwest_client;

pub use github::{FetchError, GitHubApi};
pub use replay::{RecordedResponse, ReplayClient};
pub use reqwest_client::{DEFAULT_TIMEOUT_SECS, ReqwestClient};

use crate::error::Result;
use async_trait::async_trait;

/// An outbound GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Absolute URL
    pub url: String,
    /// Header name/value pairs, in the order they are sent
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Create a request with no headers
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
        }
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a header value by case-insensitive name
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A response that made it back over the wire, whatever its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is 2xx
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Minimal HTTP client used by the resolvers
///
/// Implementations return `Err(Error::Http)` only for transport failures
/// (connect, timeout, body read). Non-2xx statuses come back as an
/// `HttpResponse` so the caller decides how to treat them.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse>;
}
