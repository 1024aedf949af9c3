//! Merge verification
//!
//! Walks the candidates in search order, fetching each pull request and
//! applying the merge predicate. The first candidate that passes wins and
//! no later candidate is fetched.

use crate::platform::GitHubApi;
use crate::types::{PullRequestDetail, SearchCandidate};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
struct PullRequestResponse {
    merged_at: Option<DateTime<Utc>>,
    base: Option<BaseRef>,
    user: Option<User>,
}

#[derive(Deserialize)]
struct BaseRef {
    #[serde(rename = "ref")]
    ref_field: Option<String>,
}

#[derive(Deserialize)]
struct User {
    login: Option<String>,
}

impl From<PullRequestResponse> for PullRequestDetail {
    fn from(pr: PullRequestResponse) -> Self {
        Self {
            merged_at: pr.merged_at,
            base_ref: pr.base.and_then(|b| b.ref_field).unwrap_or_default(),
            author_login: pr.user.and_then(|u| u.login),
        }
    }
}

/// Why a fetched pull request does not resolve the issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Closed or still open, never merged
    NotMerged,
    /// Merged, but into some other branch
    WrongBase {
        /// Branch it was merged into
        found: String,
    },
    /// GitHub did not report an author login
    MissingAuthor,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotMerged => write!(f, "not merged"),
            Self::WrongBase { found } if found.is_empty() => write!(f, "no base branch"),
            Self::WrongBase { found } => write!(f, "base branch is '{found}'"),
            Self::MissingAuthor => write!(f, "no author login"),
        }
    }
}

/// Outcome for a single visited candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateVerdict {
    /// Merged into the default branch with a known author
    Accepted {
        /// Pull request API URL
        detail_url: String,
        /// Author login
        login: String,
    },
    /// Fetched, but failed the merge predicate
    Rejected {
        /// Pull request API URL
        detail_url: String,
        /// Every predicate clause that failed
        reasons: Vec<RejectReason>,
    },
    /// Could not be fetched or parsed; skipped
    Unavailable {
        /// Pull request API URL
        detail_url: String,
        /// What went wrong
        reason: String,
    },
}

impl CandidateVerdict {
    /// Winning login, if this verdict accepted the candidate
    pub fn accepted_login(&self) -> Option<&str> {
        match self {
            Self::Accepted { login, .. } => Some(login),
            Self::Rejected { .. } | Self::Unavailable { .. } => None,
        }
    }
}

impl std::fmt::Display for CandidateVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted { detail_url, login } => {
                write!(f, "accept {detail_url}: merged by {login}")
            }
            Self::Rejected {
                detail_url,
                reasons,
            } => {
                let reasons: Vec<_> = reasons.iter().map(ToString::to_string).collect();
                write!(f, "reject {detail_url}: {}", reasons.join(", "))
            }
            Self::Unavailable { detail_url, reason } => write!(f, "skip {detail_url}: {reason}"),
        }
    }
}

/// Apply the merge predicate to a pull request (pure)
///
/// Returns the author login when the PR is merged, targets
/// `default_branch`, and has a non-empty author. Otherwise returns every
/// clause that failed.
pub fn evaluate(
    detail: &PullRequestDetail,
    default_branch: &str,
) -> Result<String, Vec<RejectReason>> {
    let mut reasons = Vec::new();

    if detail.merged_at.is_none() {
        reasons.push(RejectReason::NotMerged);
    }
    if detail.base_ref != default_branch {
        reasons.push(RejectReason::WrongBase {
            found: detail.base_ref.clone(),
        });
    }

    let login = detail
        .author_login
        .as_deref()
        .filter(|login| !login.is_empty());
    if login.is_none() {
        reasons.push(RejectReason::MissingAuthor);
    }

    match login {
        Some(login) if reasons.is_empty() => Ok(login.to_string()),
        _ => Err(reasons),
    }
}

/// Fetch one pull request's detail
pub async fn fetch_detail(api: &GitHubApi, detail_url: &str) -> Result<PullRequestDetail, String> {
    api.get_json::<PullRequestResponse>(detail_url)
        .await
        .map(PullRequestDetail::from)
        .map_err(|e| e.to_string())
}

/// Verify candidates in order, stopping at the first accepted one
///
/// Returns a verdict for every candidate visited. Candidates after the
/// winner are never fetched.
pub async fn verify_candidates(
    api: &GitHubApi,
    candidates: &[SearchCandidate],
    default_branch: &str,
) -> Vec<CandidateVerdict> {
    let mut verdicts = Vec::with_capacity(candidates.len());

    for candidate in candidates.iter().filter(|c| c.is_pull_request) {
        let detail_url = candidate.detail_url.clone();
        debug!(detail_url, "verifying candidate");

        let verdict = match fetch_detail(api, &detail_url).await {
            Ok(detail) => match evaluate(&detail, default_branch) {
                Ok(login) => CandidateVerdict::Accepted { detail_url, login },
                Err(reasons) => CandidateVerdict::Rejected {
                    detail_url,
                    reasons,
                },
            },
            Err(reason) => CandidateVerdict::Unavailable { detail_url, reason },
        };

        debug!(verdict = %verdict, "candidate verified");
        let accepted = verdict.accepted_login().is_some();
        verdicts.push(verdict);
        if accepted {
            break;
        }
    }

    verdicts
}
