//! Error types for gitbounty-oracle

use thiserror::Error;

/// Errors raised by the oracle
///
/// Only the hard failures (`InvalidRequest`, `MissingCredential`, `Config`,
/// `Secrets`) ever escape a resolution. `Http` is produced by the HTTP seam
/// and is absorbed by the resolvers as a soft failure.
#[derive(Error, Debug)]
pub enum Error {
    /// Request arguments were missing, empty, or of the wrong arity
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The secret bundle did not carry the expected credential key
    #[error("missing credential: secret '{0}' is not set")]
    MissingCredential(String),

    /// Deployment configuration could not be loaded or is invalid
    #[error("config error: {0}")]
    Config(String),

    /// Secret bundle could not be read or parsed
    #[error("secrets error: {0}")]
    Secrets(String),

    /// Transport-level HTTP failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Replay fixture could not be loaded
    #[error("fixture error: {0}")]
    Fixture(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for gitbounty-oracle
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error is a deployment or input defect that must abort
    /// the invocation rather than collapse into `not_found`.
    pub const fn is_hard(&self) -> bool {
        !matches!(self, Self::Http(_))
    }
}
