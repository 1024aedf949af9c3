//! Resolution strategies
//!
//! Each strategy maps a [`ResolutionRequest`] to a [`Resolution`] through
//! the injected HTTP client. The merged-PR strategy runs in four stages:
//! 1. Query - build the search URL (pure)
//! 2. Search - fetch ordered candidates (effectful, soft-failing)
//! 3. Verify - fetch and check each candidate until one passes (effectful)
//! 4. Decide - collapse to `Winner` or `Unresolved` (pure)
//!
//! Resolvers hold no state between calls and never retry.

pub mod decision;
mod issue_state;
mod merged_pr;
pub mod query;
pub mod search;
pub mod verify;

pub use issue_state::IssueStateResolver;
pub use merged_pr::{DEFAULT_BRANCH, MergedPrResolver};

use crate::error::Result;
use crate::platform::GitHubApi;
use crate::types::{Resolution, ResolutionRequest, Strategy};
use async_trait::async_trait;

/// A way of deciding who resolved an issue
///
/// Only hard failures (an invalid request) are returned as errors; every
/// upstream failure collapses into `ResolutionResult::Unresolved`.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Resolve one request
    async fn resolve(&self, request: &ResolutionRequest) -> Result<Resolution>;
}

/// Create the resolver for a configured strategy
pub fn create_resolver(
    strategy: Strategy,
    api: GitHubApi,
    default_branch: &str,
) -> Box<dyn Resolver> {
    match strategy {
        Strategy::MergedPr => Box::new(MergedPrResolver::new(api, default_branch)),
        Strategy::IssueState => Box::new(IssueStateResolver::new(api)),
    }
}
