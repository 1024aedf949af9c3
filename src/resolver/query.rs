//! Request building - pure functions, no I/O
//!
//! Validation happens in [`ResolutionRequest::new`], so every URL built here
//! is scoped to a single repository and issue.

use crate::types::ResolutionRequest;

/// GitHub search query for pull requests referencing the issue
pub fn search_query(request: &ResolutionRequest) -> String {
    format!(
        "repo:{}/{} type:pr #{} in:title,body",
        request.repo_owner, request.repo, request.issue_number
    )
}

/// Search API URL with the percent-encoded query
pub fn search_url(api_base: &str, request: &ResolutionRequest) -> String {
    format!(
        "{}/search/issues?q={}",
        api_base.trim_end_matches('/'),
        urlencoding::encode(&search_query(request))
    )
}

/// Issue API URL, with owner, repo and number encoded as path segments
pub fn issue_url(api_base: &str, request: &ResolutionRequest) -> String {
    format!(
        "{}/repos/{}/{}/issues/{}",
        api_base.trim_end_matches('/'),
        urlencoding::encode(&request.repo_owner),
        urlencoding::encode(&request.repo),
        urlencoding::encode(&request.issue_number)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ResolutionRequest {
        ResolutionRequest::new("chainlink", "functions-hardhat-starter-kit", "12").unwrap()
    }

    #[test]
    fn test_search_query_shape() {
        assert_eq!(
            search_query(&request()),
            "repo:chainlink/functions-hardhat-starter-kit type:pr #12 in:title,body"
        );
    }

    #[test]
    fn test_search_url_is_percent_encoded() {
        assert_eq!(
            search_url("https://api.github.com", &request()),
            "https://api.github.com/search/issues?q=repo%3Achainlink%2Ffunctions-hardhat-starter-kit%20type%3Apr%20%2312%20in%3Atitle%2Cbody"
        );
    }

    #[test]
    fn test_search_url_tolerates_trailing_slash() {
        assert_eq!(
            search_url("https://api.github.com/", &request()),
            search_url("https://api.github.com", &request())
        );
    }

    #[test]
    fn test_issue_url_encodes_segments() {
        let request = ResolutionRequest::new("acme", "a b", "7").unwrap();
        assert_eq!(
            issue_url("https://api.github.com", &request),
            "https://api.github.com/repos/acme/a%20b/issues/7"
        );
    }
}
