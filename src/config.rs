//! Deployment configuration in `oracle.toml`
//!
//! Lookup order: explicit path, then `<config dir>/gitbounty/oracle.toml`,
//! then built-in defaults. Every node running the oracle must use the same
//! values, or their outputs can diverge.

use crate::error::{Error, Result};
use crate::platform::DEFAULT_TIMEOUT_SECS;
use crate::resolver::DEFAULT_BRANCH;
use crate::types::Strategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Directory name under the platform config dir
const CONFIG_DIR: &str = "gitbounty";

/// Config filename
const CONFIG_FILE: &str = "oracle.toml";

/// GitHub REST API root
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Secret key holding the GitHub token
pub const DEFAULT_CREDENTIAL_KEY: &str = "apiKey";

/// User agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "gitbounty-oracle";

/// Oracle deployment settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OracleConfig {
    /// Resolution strategy
    pub strategy: Strategy,
    /// GitHub API base URL
    pub api_base: String,
    /// Branch a PR must be merged into to count
    pub default_branch: String,
    /// User agent for outbound requests
    pub user_agent: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Key of the GitHub token in the secret bundle
    pub credential_key: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            api_base: DEFAULT_API_BASE.to_string(),
            default_branch: DEFAULT_BRANCH.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            credential_key: DEFAULT_CREDENTIAL_KEY.to_string(),
        }
    }
}

impl OracleConfig {
    /// Per-request timeout
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject settings that would make resolution meaningless
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.api_base)
            .map_err(|e| Error::Config(format!("api_base '{}' is not a URL: {e}", self.api_base)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "api_base must be http(s), got '{}'",
                url.scheme()
            )));
        }

        for (field, value) in [
            ("default_branch", &self.default_branch),
            ("user_agent", &self.user_agent),
            ("credential_key", &self.credential_key),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("{field} must not be empty")));
            }
        }

        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be positive".to_string()));
        }

        Ok(())
    }
}

/// Default config file location, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Parse and validate config from TOML text
pub fn parse_config(content: &str) -> Result<OracleConfig> {
    let config: OracleConfig =
        toml::from_str(content).map_err(|e| Error::Config(format!("invalid config: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Load config
///
/// An explicit path must exist. Without one, the default location is used
/// if present, otherwise built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<OracleConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => path,
            None => {
                debug!("no config file, using defaults");
                return Ok(OracleConfig::default());
            }
        },
    };

    let content = fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
    let config = parse_config(&content)?;
    debug!(path = %path.display(), strategy = %config.strategy, "loaded config");
    Ok(config)
}
