//! gitbounty-oracle - off-chain resolution oracle for GitHub issue bounties
//!
//! Turns `(owner, repo, issue)` into the login of the contributor whose
//! pull request resolved the issue, or the `not_found` sentinel. The output
//! is a deterministic function of GitHub state so independent nodes agree.

pub mod auth;
pub mod config;
pub mod encode;
pub mod error;
pub mod oracle;
pub mod platform;
pub mod resolver;
pub mod types;

pub use encode::{EncodedResult, NOT_FOUND, encode};
pub use error::{Error, Result};
pub use oracle::Oracle;
pub use types::{Resolution, ResolutionRequest, ResolutionResult, Strategy};
