//! Shared command context
//!
//! Loads config, applies command-line overrides, and picks the HTTP client
//! (live or replay). Secrets are loaded separately, only by commands that
//! need them.

use gitbounty_oracle::config::{OracleConfig, load_config};
use gitbounty_oracle::error::Result;
use gitbounty_oracle::platform::ReplayClient;
use gitbounty_oracle::{Oracle, Strategy};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Command-line overrides applied on top of the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Strategy to use instead of the configured one
    pub strategy: Option<Strategy>,
    /// API base to use instead of the configured one
    pub api_base: Option<String>,
}

/// Load config and apply overrides
pub fn resolve_config(config_path: Option<&Path>, overrides: &Overrides) -> Result<OracleConfig> {
    let mut config = load_config(config_path)?;
    if let Some(strategy) = overrides.strategy {
        config.strategy = strategy;
    }
    if let Some(api_base) = &overrides.api_base {
        config.api_base.clone_from(api_base);
    }
    config.validate()?;
    Ok(config)
}

/// Build an oracle, replaying recorded responses when a fixture is given
pub fn build_oracle(config: OracleConfig, replay: Option<&Path>) -> Result<Oracle> {
    match replay {
        Some(path) => {
            debug!(fixture = %path.display(), "replaying recorded responses");
            let client = ReplayClient::from_file(path)?;
            Ok(Oracle::new(config, Arc::new(client)))
        }
        None => Oracle::live(config),
    }
}
