//! Shell completion script generation.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Binary name completions are registered for.
pub const BIN_NAME: &str = "autopr";

/// Write a completion script for `shell` into `out`.
pub fn write_completion_script(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    generate(shell, cmd, BIN_NAME, out);
}

/// Print a completion script to stdout.
pub fn print_completion_script(shell: Shell, cmd: &mut Command) {
    write_completion_script(shell, cmd, &mut std::io::stdout());
}
