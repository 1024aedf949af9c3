//! Oracle entry point
//!
//! Mirrors how the execution environment calls the oracle: positional
//! arguments and a secret bundle in, one byte payload out. Hard failures
//! (missing credential, bad arguments) are raised before any request.

use crate::auth::Secrets;
use crate::config::OracleConfig;
use crate::encode::{EncodedResult, encode};
use crate::error::Result;
use crate::platform::{GitHubApi, HttpClient, ReqwestClient};
use crate::resolver::create_resolver;
use crate::types::{Resolution, ResolutionRequest};
use std::sync::Arc;
use tracing::debug;

/// A configured oracle bound to an HTTP client
pub struct Oracle {
    config: OracleConfig,
    client: Arc<dyn HttpClient>,
}

impl Oracle {
    /// Create an oracle over any HTTP client (live, replay, or test double)
    pub fn new(config: OracleConfig, client: Arc<dyn HttpClient>) -> Self {
        Self { config, client }
    }

    /// Create an oracle that talks to GitHub over reqwest
    pub fn live(config: OracleConfig) -> Result<Self> {
        config.validate()?;
        let client = ReqwestClient::new(&config.user_agent, config.timeout())?;
        Ok(Self::new(config, Arc::new(client)))
    }

    /// Active configuration
    pub const fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Resolve and return the full resolution, trace included
    pub async fn run<S: AsRef<str> + Sync>(
        &self,
        args: &[S],
        secrets: &Secrets,
    ) -> Result<Resolution> {
        let credential = secrets.credential(&self.config.credential_key)?;
        let request = ResolutionRequest::from_args(args)?;
        debug!(
            %request,
            strategy = %self.config.strategy,
            source = %secrets.source(),
            "oracle invoked"
        );

        let api = GitHubApi::new(
            Arc::clone(&self.client),
            &self.config.api_base,
            &self.config.user_agent,
            Some(credential),
        );
        let resolver = create_resolver(self.config.strategy, api, &self.config.default_branch);
        resolver.resolve(&request).await
    }

    /// Resolve and return only the canonical payload
    pub async fn run_encoded<S: AsRef<str> + Sync>(
        &self,
        args: &[S],
        secrets: &Secrets,
    ) -> Result<EncodedResult> {
        let resolution = self.run(args, secrets).await?;
        Ok(encode(&resolution.result))
    }
}
