//! PR creation.

use crate::error::Result;
use crate::exec::Exec;

use super::types::{PRResult, PullRequest};
use super::url::extract_pr_url;

/// Arguments for `gh pr create`.
pub fn pr_create_args(pr: &PullRequest) -> Vec<&str> {
    vec![
        "pr",
        "create",
        "--title",
        pr.title.as_str(),
        "--body",
        pr.body.as_str(),
        "--base",
        pr.base.as_str(),
        "--head",
        pr.head.as_str(),
    ]
}

/// The GitHub CLI, bound to one working directory.
pub struct GitHubCli<'a> {
    exec: &'a Exec,
    program: &'a str,
}

impl<'a> GitHubCli<'a> {
    pub fn new(exec: &'a Exec, program: &'a str) -> Self {
        Self { exec, program }
    }

    /// Open a pull request. Authentication comes from the environment.
    pub fn create_pull_request(&self, pr: &PullRequest) -> Result<PRResult> {
        let stdout = self
            .exec
            .mutate(self.program, &pr_create_args(pr), &[])?;

        Ok(match stdout {
            Some(out) => PRResult::Created(extract_pr_url(&out)),
            None => PRResult::DryRun,
        })
    }
}
