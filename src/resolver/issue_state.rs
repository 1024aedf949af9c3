//! Issue state strategy
//!
//! Answers only whether the issue is closed. A closed issue is attributed
//! to whoever closed it; an open issue, or any failed read, is unresolved.

use super::Resolver;
use super::query::issue_url;
use crate::error::Result;
use crate::platform::GitHubApi;
use crate::types::{Resolution, ResolutionRequest, ResolutionResult};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
struct IssueResponse {
    state: Option<String>,
    closed_by: Option<Actor>,
}

#[derive(Deserialize)]
struct Actor {
    login: Option<String>,
}

fn closer(issue: IssueResponse) -> ResolutionResult {
    if issue.state.as_deref() != Some("closed") {
        return ResolutionResult::Unresolved;
    }

    issue
        .closed_by
        .and_then(|actor| actor.login)
        .filter(|login| !login.is_empty())
        .map_or(ResolutionResult::Unresolved, |login| ResolutionResult::Winner {
            login,
        })
}

/// Resolver that attributes a closed issue to the account that closed it
pub struct IssueStateResolver {
    api: GitHubApi,
}

impl IssueStateResolver {
    /// Create an issue-state resolver
    pub const fn new(api: GitHubApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Resolver for IssueStateResolver {
    async fn resolve(&self, request: &ResolutionRequest) -> Result<Resolution> {
        request.validate()?;
        debug!(%request, "resolving via issue state");

        let url = issue_url(self.api.api_base(), request);
        let (result, note) = match self.api.get_json::<IssueResponse>(&url).await {
            Ok(issue) => {
                let note = format!(
                    "issue state is '{}'",
                    issue.state.as_deref().unwrap_or("unknown")
                );
                (closer(issue), note)
            }
            Err(e) => {
                debug!(error = %e, "issue read failed, treating as unresolved");
                (ResolutionResult::Unresolved, format!("issue read failed: {e}"))
            }
        };

        Ok(Resolution {
            trace: vec![note, result.to_string()],
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(json: &str) -> IssueResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_closed_issue_attributed_to_closer() {
        let result = closer(issue(r#"{ "state": "closed", "closed_by": { "login": "dana" } }"#));
        assert_eq!(
            result,
            ResolutionResult::Winner {
                login: "dana".to_string()
            }
        );
    }

    #[test]
    fn test_open_issue_unresolved() {
        let result = closer(issue(r#"{ "state": "open", "closed_by": { "login": "dana" } }"#));
        assert_eq!(result, ResolutionResult::Unresolved);
    }

    #[test]
    fn test_closed_without_closer_unresolved() {
        assert_eq!(
            closer(issue(r#"{ "state": "closed", "closed_by": null }"#)),
            ResolutionResult::Unresolved
        );
        assert_eq!(
            closer(issue(r#"{ "state": "closed", "closed_by": { "login": "" } }"#)),
            ResolutionResult::Unresolved
        );
    }
}
