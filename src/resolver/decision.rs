//! Resolution decision - pure function
//!
//! The only place where the stage outcomes collapse into one of the two
//! result variants.

use super::search::SearchOutcome;
use super::verify::CandidateVerdict;
use crate::types::ResolutionResult;

/// Combine the search and verification outcomes
///
/// `Winner` iff verification accepted a candidate (the first one, should a
/// caller pass more than one). Every other path, including a failed search,
/// is `Unresolved`.
pub fn decide(search: &SearchOutcome, verdicts: &[CandidateVerdict]) -> ResolutionResult {
    if let SearchOutcome::Failed(_) = search {
        return ResolutionResult::Unresolved;
    }

    verdicts
        .iter()
        .find_map(CandidateVerdict::accepted_login)
        .map_or(ResolutionResult::Unresolved, |login| ResolutionResult::Winner {
            login: login.to_string(),
        })
}
