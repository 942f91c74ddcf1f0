//! GitHub CLI integration for PR operations.
//!
//! # Modules
//!
//! - [`types`] - Pull request request/result types
//! - [`pr`] - `gh` detection and PR creation
//! - [`url`] - PR URL extraction from `gh` output

mod pr;
mod types;
mod url;

pub use pr::{pr_create_args, GitHubCli};
pub use types::{PRResult, PullRequest};
pub use url::extract_pr_url;
