//! Candidate search
//!
//! One GET against the search API. Failures are soft: they surface as
//! [`SearchOutcome::Failed`] and the resolution collapses to `Unresolved`.

use crate::platform::GitHubApi;
use crate::types::SearchCandidate;
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct SearchItem {
    pull_request: Option<PullRequestRef>,
}

#[derive(Deserialize)]
struct PullRequestRef {
    url: Option<String>,
}

impl From<SearchItem> for SearchCandidate {
    fn from(item: SearchItem) -> Self {
        let detail_url = item
            .pull_request
            .and_then(|pr| pr.url)
            .filter(|url| !url.is_empty());

        Self {
            is_pull_request: detail_url.is_some(),
            detail_url: detail_url.unwrap_or_default(),
        }
    }
}

/// Result of the search stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Pull-request candidates in GitHub's relevance order (possibly empty)
    Candidates(Vec<SearchCandidate>),
    /// The search could not be performed or parsed
    Failed(String),
}

impl SearchOutcome {
    /// Candidates to verify; empty when the search failed
    pub fn candidates(&self) -> &[SearchCandidate] {
        match self {
            Self::Candidates(candidates) => candidates,
            Self::Failed(_) => &[],
        }
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Candidates(candidates) => {
                write!(f, "search found {} pull request candidate(s)", candidates.len())
            }
            Self::Failed(reason) => write!(f, "search failed: {reason}"),
        }
    }
}

/// Keep pull-request items in order
///
/// Items are decoded one at a time; an item that does not fit the expected
/// shape is dropped without affecting its neighbours.
fn keep_pull_requests(items: Vec<serde_json::Value>) -> Vec<SearchCandidate> {
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<SearchItem>(item).ok())
        .map(SearchCandidate::from)
        .filter(|candidate| candidate.is_pull_request)
        .collect()
}

/// Run the search and return ordered pull-request candidates
pub async fn search_candidates(api: &GitHubApi, url: &str) -> SearchOutcome {
    debug!(url, "searching for candidate pull requests");

    match api.get_json::<SearchResponse>(url).await {
        Ok(response) => {
            let total = response.items.len();
            let candidates = keep_pull_requests(response.items);
            debug!(total, pull_requests = candidates.len(), "search complete");
            SearchOutcome::Candidates(candidates)
        }
        Err(e) => {
            debug!(error = %e, "search failed, treating as no candidates");
            SearchOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credential;
    use crate::platform::{RecordedResponse, ReplayClient};
    use serde_json::{Value, json};
    use std::sync::Arc;

    const URL: &str = "https://api.test/search/issues?q=x";

    async fn search_with(response: RecordedResponse) -> SearchOutcome {
        let client = Arc::new(ReplayClient::new().with_response(URL, response));
        let api = GitHubApi::new(client, "https://api.test", "ua-test", Some(Credential::new("tok")));
        search_candidates(&api, URL).await
    }

    fn urls(outcome: &SearchOutcome) -> Vec<&str> {
        outcome
            .candidates()
            .iter()
            .map(|c| c.detail_url.as_str())
            .collect()
    }

    #[tokio::test]
    async fn test_keeps_order_and_drops_plain_issues() {
        let outcome = search_with(RecordedResponse::ok(json!({
            "total_count": 4,
            "items": [
                { "number": 3, "pull_request": { "url": "https://api.test/pulls/3" } },
                { "number": 9 },
                { "number": 1, "pull_request": { "url": "https://api.test/pulls/1" } },
                { "number": 5, "pull_request": {} }
            ]
        })))
        .await;

        assert_eq!(urls(&outcome), vec!["https://api.test/pulls/3", "https://api.test/pulls/1"]);
        assert!(outcome.candidates().iter().all(|c| c.is_pull_request));
    }

    #[tokio::test]
    async fn test_malformed_item_does_not_hide_later_candidates() {
        let outcome = search_with(RecordedResponse::ok(json!({
            "items": [
                { "pull_request": { "url": 7 } },
                "not an item",
                { "pull_request": { "url": "https://api.test/pulls/1" } }
            ]
        })))
        .await;

        assert_eq!(urls(&outcome), vec!["https://api.test/pulls/1"]);
    }

    #[tokio::test]
    async fn test_missing_items_is_empty() {
        let outcome = search_with(RecordedResponse::ok(json!({ "total_count": 0 }))).await;
        assert_eq!(outcome, SearchOutcome::Candidates(vec![]));
    }

    #[tokio::test]
    async fn test_non_json_body_fails() {
        let outcome = search_with(RecordedResponse::ok(Value::String("not json".into()))).await;
        assert!(matches!(outcome, SearchOutcome::Failed(_)));
    }

    #[test]
    fn test_failed_outcome_has_no_candidates() {
        let outcome = SearchOutcome::Failed("GitHub responded with status 503".to_string());
        assert!(outcome.candidates().is_empty());
        assert_eq!(
            outcome.to_string(),
            "search failed: GitHub responded with status 503"
        );
    }
}
