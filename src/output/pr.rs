//! Branch, push and pull request output.

use crate::git::StatusEntry;
use crate::marker::MarkerStatus;

use super::colors::*;

/// List the detected changes.
pub fn print_changes_detected(changes: &[StatusEntry]) {
    println!(
        "{YELLOW}Detected {} change{}:{RESET}",
        changes.len(),
        if changes.len() == 1 { "" } else { "s" }
    );
    for entry in changes {
        println!("  {GRAY}{}{RESET} {}", entry.code, entry.path);
    }
}

pub fn print_branch_created(branch: &str) {
    println!("{GREEN}Created branch:{RESET} {}", branch);
}

pub fn print_marker_status(path: &std::path::Path, status: MarkerStatus) {
    match status {
        MarkerStatus::Existing => {}
        MarkerStatus::Created => {
            println!("{CYAN}Created marker file{RESET} {}", path.display())
        }
        MarkerStatus::WouldCreate => {
            println!("{YELLOW}[dry run]{RESET} would create {}", path.display())
        }
    }
}

pub fn print_committed(message: &str) {
    println!("{GREEN}Committed:{RESET} {}", message);
}

/// Print a status message when pushing branch to remote.
pub fn print_pushing_branch(remote: &str, branch: &str) {
    println!("{CYAN}Pushing branch '{}' to {}...{RESET}", branch, remote);
}

pub fn print_push_success() {
    println!("{GREEN}Branch pushed successfully.{RESET}");
}

/// Print a prominent success message for a created PR.
pub fn print_pr_success(url: Option<&str>, head: &str, base: &str) {
    println!();
    println!("{GREEN}{BOLD}╔════════════════════════════════════════════════════════╗{RESET}");
    println!("{GREEN}{BOLD}║  ✓ Pull Request Created                                ║{RESET}");
    println!("{GREEN}{BOLD}╚════════════════════════════════════════════════════════╝{RESET}");
    println!();
    println!("  {CYAN}{}{RESET} → {CYAN}{}{RESET}", head, base);
    if let Some(url) = url {
        println!("{GREEN}{BOLD}  {}{RESET}", url);
    }
    println!();
}

pub fn print_dry_run_complete(head: &str, base: &str) {
    println!();
    println!(
        "{YELLOW}{BOLD}Dry run complete.{RESET} Would open a pull request {} → {}",
        head, base
    );
}
