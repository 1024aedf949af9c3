//! Merged pull request strategy
//!
//! Pays the author of the first search hit, in relevance order, that was
//! merged into the default branch.

use super::Resolver;
use super::decision::decide;
use super::query::search_url;
use super::search::search_candidates;
use super::verify::verify_candidates;
use crate::error::Result;
use crate::platform::GitHubApi;
use crate::types::{Resolution, ResolutionRequest};
use async_trait::async_trait;
use tracing::debug;

/// Branch a pull request must be merged into, by convention
pub const DEFAULT_BRANCH: &str = "main";

/// Resolver that attributes an issue to the author of its merging PR
pub struct MergedPrResolver {
    api: GitHubApi,
    default_branch: String,
}

impl MergedPrResolver {
    /// Create a resolver that accepts PRs merged into `default_branch`
    pub fn new(api: GitHubApi, default_branch: impl Into<String>) -> Self {
        Self {
            api,
            default_branch: default_branch.into(),
        }
    }
}

#[async_trait]
impl Resolver for MergedPrResolver {
    async fn resolve(&self, request: &ResolutionRequest) -> Result<Resolution> {
        request.validate()?;
        debug!(%request, default_branch = %self.default_branch, "resolving via merged PR");

        let url = search_url(self.api.api_base(), request);
        let search = search_candidates(&self.api, &url).await;
        let verdicts =
            verify_candidates(&self.api, search.candidates(), &self.default_branch).await;
        let result = decide(&search, &verdicts);

        let mut trace = Vec::with_capacity(verdicts.len() + 2);
        trace.push(search.to_string());
        trace.extend(verdicts.iter().map(ToString::to_string));
        trace.push(result.to_string());

        debug!(%request, %result, "resolution complete");
        Ok(Resolution { result, trace })
    }
}
