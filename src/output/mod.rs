//! Terminal output formatting for autopr.
//!
//! - [`banner`] - Phase banners
//! - [`messages`] - Errors, command echo and status lines
//! - [`pr`] - Branch, push and pull request output
//! - [`report`] - Machine-readable run report

pub mod banner;
pub mod messages;
pub mod pr;
pub mod report;

/// ANSI color codes for terminal output.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RED: &str = "\x1b[31m";
    pub const GRAY: &str = "\x1b[90m";
}

pub use colors::*;

pub use banner::{format_banner, print_phase_banner, Phase};
pub use messages::{print_command, print_error, print_no_changes, print_token_present};
pub use pr::{
    print_branch_created, print_changes_detected, print_committed, print_dry_run_complete,
    print_marker_status, print_pr_success, print_push_success, print_pushing_branch,
};
pub use report::{format_json_report, print_json_report};
