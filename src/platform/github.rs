//! GitHub REST access shared by the resolvers

use super::{HttpClient, HttpRequest};
use crate::auth::{Credential, redact_tokens};
use crate::error::Error;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Why a GitHub read did not produce a usable value
///
/// Every variant is a soft failure: resolvers skip or collapse to
/// `Unresolved`, they never abort on these.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection, timeout, or body read failure
    #[error("transport failure: {0}")]
    Transport(String),
    /// GitHub answered with a non-2xx status
    #[error("GitHub responded with status {0}")]
    Status(u16),
    /// Body was not the expected JSON shape
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// GitHub API access with the oracle's standard headers
///
/// Holds the credential for the lifetime of one resolution and attaches it
/// as a bearer token to every request.
#[derive(Clone)]
pub struct GitHubApi {
    client: Arc<dyn HttpClient>,
    api_base: String,
    user_agent: String,
    credential: Option<Credential>,
}

impl GitHubApi {
    /// Create API access over the given HTTP client
    pub fn new(
        client: Arc<dyn HttpClient>,
        api_base: &str,
        user_agent: &str,
        credential: Option<Credential>,
    ) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            user_agent: user_agent.to_string(),
            credential,
        }
    }

    /// API base URL without a trailing slash
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build a GET request carrying the standard GitHub headers
    pub fn request(&self, url: &str) -> HttpRequest {
        let request = HttpRequest::get(url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header("User-Agent", self.user_agent.as_str());

        match &self.credential {
            Some(credential) => {
                request.header("Authorization", format!("Bearer {}", credential.expose()))
            }
            None => request,
        }
    }

    /// GET `url` and decode a 2xx JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self
            .client
            .get(&self.request(url))
            .await
            .map_err(|e| FetchError::Transport(self.scrub(&transport_message(e))))?;

        if !response.is_success() {
            debug!(url, status = response.status, "GitHub returned non-success");
            return Err(FetchError::Status(response.status));
        }

        serde_json::from_str(&response.body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    fn scrub(&self, text: &str) -> String {
        let text = redact_tokens(text);
        match &self.credential {
            Some(credential) => credential.redact(&text),
            None => text,
        }
    }
}

fn transport_message(error: Error) -> String {
    match error {
        Error::Http(message) => message,
        other => other.to_string(),
    }
}
