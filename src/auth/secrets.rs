//! Secret bundle loading and credential extraction

use super::AuthSource;
use super::redact::REDACTED;
use crate::error::{Error, Result};
use reqwest::header::HeaderValue;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Environment variable holding the secret bundle as a JSON object
pub const SECRETS_ENV_VAR: &str = "GITBOUNTY_SECRETS";

/// Bearer token for GitHub requests
///
/// `Debug` and `Display` never print the token; use [`Credential::expose`]
/// only when building an `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for header construction only
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Scrub every occurrence of this token from `text`
    pub fn redact(&self, text: &str) -> String {
        if self.0.is_empty() {
            return text.to_string();
        }
        text.replace(&self.0, REDACTED)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credential({REDACTED})")
    }
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(REDACTED)
    }
}

/// Secrets delivered by the execution environment
///
/// Keys are kept sorted so iteration never depends on load order.
#[derive(Clone)]
pub struct Secrets {
    values: BTreeMap<String, String>,
    source: AuthSource,
}

impl Secrets {
    /// An empty bundle
    pub const fn empty(source: AuthSource) -> Self {
        Self {
            values: BTreeMap::new(),
            source,
        }
    }

    /// Build a bundle from key/value pairs
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            source: AuthSource::Inline,
        }
    }

    /// Parse a JSON object of strings
    ///
    /// Parse errors report only a position, never the offending content.
    pub fn from_json_str(json: &str, source: AuthSource) -> Result<Self> {
        let values: BTreeMap<String, String> = serde_json::from_str(json).map_err(|e| {
            Error::Secrets(format!(
                "{source} is not a JSON object of strings (line {}, column {})",
                e.line(),
                e.column()
            ))
        })?;
        debug!(%source, keys = values.len(), "loaded secret bundle");
        Ok(Self { values, source })
    }

    /// Load a bundle from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Secrets(format!("failed to read {}: {e}", path.display())))?;
        Self::from_json_str(&content, AuthSource::SecretsFile)
    }

    /// Load a bundle from [`SECRETS_ENV_VAR`]; empty if unset
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(std::env::var(SECRETS_ENV_VAR).ok())
    }

    /// Interpret the raw value of [`SECRETS_ENV_VAR`]
    pub fn from_env_value(value: Option<String>) -> Result<Self> {
        match value {
            Some(json) if !json.trim().is_empty() => Self::from_json_str(&json, AuthSource::EnvVar),
            _ => Ok(Self::empty(AuthSource::EnvVar)),
        }
    }

    /// Where this bundle came from
    pub const fn source(&self) -> AuthSource {
        self.source
    }

    /// Extract the credential stored under `key`
    ///
    /// A missing or blank value is a deployment defect and fails hard, as
    /// does a value that cannot be sent in an `Authorization` header.
    pub fn credential(&self, key: &str) -> Result<Credential> {
        let token = match self.values.get(key) {
            Some(token) if !token.trim().is_empty() => token.trim(),
            _ => return Err(Error::MissingCredential(key.to_string())),
        };

        if HeaderValue::from_str(&format!("Bearer {token}")).is_err() {
            return Err(Error::Secrets(format!(
                "credential '{key}' is not a valid header value"
            )));
        }
        Ok(Credential::new(token))
    }
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("keys", &self.values.keys().collect::<Vec<_>>())
            .field("source", &self.source)
            .finish()
    }
}
