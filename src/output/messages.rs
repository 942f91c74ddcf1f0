//! Basic message output functions.

use super::colors::*;

/// Print an error message to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{RED}{BOLD}Error:{RESET} {}", msg);
}

/// Echo an external command line. Dry-run echoes are marked as skipped.
pub fn print_command(program: &str, args: &[&str], dry_run: bool) {
    let line = format_command(program, args);
    if dry_run {
        println!("{YELLOW}[dry run]{RESET} {GRAY}{}{RESET}", line);
    } else {
        println!("{GRAY}$ {}{RESET}", line);
    }
}

/// Confirm the token is set without revealing it.
pub fn print_token_present(env_name: &str) {
    println!("{GREEN}✓{RESET} {} is set", env_name);
}

pub fn print_no_changes() {
    println!("{GREEN}No changes detected.{RESET} Nothing to do.");
}

/// Render a command line, quoting arguments that contain whitespace.
fn format_command(program: &str, args: &[&str]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            line.push_str(&format!("{:?}", arg));
        } else {
            line.push_str(arg);
        }
    }
    line
}
