//! Branch naming.
//!
//! Head branches are `<prefix><unix-timestamp>`, unique per run to the second.
//! The PR base is `main` for the default target and `rel/<target>` otherwise.

use chrono::Utc;

/// Target name that maps straight onto the `main` base branch.
pub const MAIN_BRANCH: &str = "main";

/// Prefix for release-line base branches.
pub const RELEASE_PREFIX: &str = "rel/";

/// Seconds since the Unix epoch.
pub fn current_timestamp() -> i64 {
    Utc::now().timestamp()
}

pub fn branch_name(prefix: &str, timestamp: i64) -> String {
    format!("{}{}", prefix, timestamp)
}

/// Base branch of the pull request for a given target.
pub fn resolve_base(target: &str) -> String {
    if target == MAIN_BRANCH {
        MAIN_BRANCH.to_string()
    } else {
        format!("{}{}", RELEASE_PREFIX, target)
    }
}
