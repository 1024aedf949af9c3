//! Core types for gitbounty-oracle

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked issue to resolve
///
/// Supplied fresh per invocation by the execution environment. All three
/// fields are required and non-blank; `issue_number` is kept as opaque text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    /// Repository owner (user or organization)
    pub repo_owner: String,
    /// Repository name
    pub repo: String,
    /// Issue number, as text
    pub issue_number: String,
}

impl ResolutionRequest {
    /// Build a validated request
    ///
    /// Blank fields are rejected: an empty owner, repo or issue number would
    /// broaden the search to unrelated pull requests.
    pub fn new(
        repo_owner: impl Into<String>,
        repo: impl Into<String>,
        issue_number: impl Into<String>,
    ) -> Result<Self> {
        let request = Self {
            repo_owner: repo_owner.into(),
            repo: repo.into(),
            issue_number: issue_number.into(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Check that no field is blank
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("repoOwner", &self.repo_owner),
            ("repo", &self.repo),
            ("issueNumber", &self.issue_number),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidRequest(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }

    /// Build a request from the three positional arguments passed by the
    /// execution environment: owner, repo, issue number.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        match args {
            [owner, repo, issue] => Self::new(owner.as_ref(), repo.as_ref(), issue.as_ref()),
            _ => Err(Error::InvalidRequest(format!(
                "expected 3 arguments (owner, repo, issueNumber), got {}",
                args.len()
            ))),
        }
    }
}

impl std::fmt::Display for ResolutionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.repo_owner, self.repo, self.issue_number)
    }
}

/// A search hit that may point at a pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCandidate {
    /// Whether the hit carries a pull-request reference
    pub is_pull_request: bool,
    /// API URL of the pull request detail (empty for plain issues)
    pub detail_url: String,
}

/// The fields of a pull request that decide whether it resolved an issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestDetail {
    /// When the PR was merged (None if open or closed without merging)
    pub merged_at: Option<DateTime<Utc>>,
    /// Branch the PR targets
    pub base_ref: String,
    /// Author login, if GitHub reported one
    pub author_login: Option<String>,
}

/// Outcome of a resolution: exactly one payee, or none
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionResult {
    /// A qualifying pull request was found; its author is the payee
    Winner {
        /// GitHub login of the PR author
        login: String,
    },
    /// No qualifying resolution was found
    Unresolved,
}

impl ResolutionResult {
    /// The winning login, if any
    pub fn winner(&self) -> Option<&str> {
        match self {
            Self::Winner { login } => Some(login),
            Self::Unresolved => None,
        }
    }
}

impl std::fmt::Display for ResolutionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Winner { login } => write!(f, "winner: {login}"),
            Self::Unresolved => write!(f, "unresolved"),
        }
    }
}

/// A resolution plus the steps that led to it
///
/// The trace is for operators only; it never reaches the encoded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The decision
    pub result: ResolutionResult,
    /// Human-readable description of each stage, in order
    pub trace: Vec<String>,
}

/// Resolution strategy, selected by deployment configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Pay the author of the first PR merged into the default branch that
    /// references the issue
    #[default]
    MergedPr,
    /// Pay whoever closed the issue
    IssueState,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MergedPr => write!(f, "merged-pr"),
            Self::IssueState => write!(f, "issue-state"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "merged-pr" => Ok(Self::MergedPr),
            "issue-state" => Ok(Self::IssueState),
            other => Err(Error::Config(format!(
                "unknown strategy '{other}' (expected 'merged-pr' or 'issue-state')"
            ))),
        }
    }
}
