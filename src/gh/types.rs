//! Core types for GitHub PR operations.

/// A pull request to open.
#[derive(Debug, Clone, PartialEq)]
pub struct PullRequest {
    pub title: String,
    pub body: String,
    /// Branch the PR merges into
    pub base: String,
    /// Branch the PR merges from
    pub head: String,
}

/// Result of `gh pr create`
#[derive(Debug, Clone, PartialEq)]
pub enum PRResult {
    /// PR created; contains the URL when `gh` printed one
    Created(Option<String>),
    /// Dry run, nothing was sent to GitHub
    DryRun,
}

impl PRResult {
    pub fn url(&self) -> Option<&str> {
        match self {
            PRResult::Created(url) => url.as_deref(),
            PRResult::DryRun => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pr_result_url() {
        let created = PRResult::Created(Some("https://github.com/o/r/pull/1".to_string()));
        assert_eq!(created.url(), Some("https://github.com/o/r/pull/1"));
        assert_eq!(PRResult::Created(None).url(), None);
        assert_eq!(PRResult::DryRun.url(), None);
    }
}
