//! Phase banner display.

use terminal_size::{terminal_size, Width};

use super::colors::*;

const DEFAULT_TERMINAL_WIDTH: u16 = 80;
const MIN_BANNER_WIDTH: usize = 20;
const MAX_BANNER_WIDTH: usize = 80;

/// The two stages of a run that get a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Branch, marker, stage and commit, then push.
    Committing,
    /// `gh pr create`.
    PullRequest,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Committing => "COMMITTING",
            Phase::PullRequest => "PULL REQUEST",
        }
    }
}

/// Banner text and color. Dry runs are yellow and say so.
fn banner_style(phase: Phase, dry_run: bool) -> (String, &'static str) {
    if dry_run {
        (format!("{} (DRY RUN)", phase.label()), YELLOW)
    } else {
        (phase.label().to_string(), CYAN)
    }
}

fn get_terminal_width_for_banner() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH as usize)
}

/// Build `━━━ NAME ━━━` padded to `width` (clamped to the banner limits).
pub fn format_banner(phase_name: &str, width: usize) -> String {
    let banner_width = width.clamp(MIN_BANNER_WIDTH, MAX_BANNER_WIDTH);
    let phase_with_spaces = format!(" {} ", phase_name);
    let remaining = banner_width.saturating_sub(phase_with_spaces.chars().count());
    let left_padding = remaining / 2;
    let right_padding = remaining - left_padding;

    format!(
        "{}{}{}",
        "━".repeat(left_padding),
        phase_with_spaces,
        "━".repeat(right_padding)
    )
}

/// Print a phase banner sized to the terminal.
pub fn print_phase_banner(phase: Phase, dry_run: bool) {
    let (name, color) = banner_style(phase, dry_run);
    let banner = format_banner(&name, get_terminal_width_for_banner());
    println!("{color}{BOLD}{}{RESET}", banner);
}
