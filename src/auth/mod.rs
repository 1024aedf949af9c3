//! Credential provisioning for GitHub requests
//!
//! The bearer token arrives out-of-band in a secret bundle (a JSON object of
//! strings, e.g. `{ "apiKey": "ghp_..." }`) and is read under a fixed key.
//! It must never surface in payloads, errors, or logs.

mod redact;
mod secrets;

pub use redact::redact_tokens;
pub use secrets::{Credential, SECRETS_ENV_VAR, Secrets};

/// Where a secret bundle was loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// JSON file passed on the command line
    SecretsFile,
    /// JSON object held in an environment variable
    EnvVar,
    /// Built in-process (tests, embedding hosts)
    Inline,
}

impl std::fmt::Display for AuthSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SecretsFile => write!(f, "secrets file"),
            Self::EnvVar => write!(f, "environment"),
            Self::Inline => write!(f, "inline"),
        }
    }
}
