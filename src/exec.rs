//! Running external command-line tools.
//!
//! Every `git` and `gh` invocation goes through [`Exec`], which pins the
//! working directory, optionally echoes the command line, and in dry-run
//! mode skips commands that would change the repository, the remote, or
//! GitHub.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use crate::error::{AutoPrError, Result};
use crate::output::print_command;

/// Execution context for external commands.
#[derive(Debug, Clone)]
pub struct Exec {
    cwd: PathBuf,
    dry_run: bool,
    verbose: bool,
    quiet: bool,
}

impl Exec {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            dry_run: false,
            verbose: false,
            quiet: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Suppress all command echoes, including dry-run notices.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Check whether `program` can be launched, by running `program --version`.
    pub fn can_run(&self, program: &str) -> bool {
        Command::new(program)
            .arg("--version")
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Run a read-only command and return its raw stdout.
    ///
    /// Runs even in dry-run mode. Stdout is returned untrimmed so that
    /// column-sensitive formats (porcelain status) survive.
    pub fn read(&self, program: &str, args: &[&str]) -> Result<String> {
        let output = self.spawn(program, args, &[])?;
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// Run a command that mutates state and return its trimmed stdout.
    ///
    /// Returns `Ok(None)` without running anything in dry-run mode.
    pub fn mutate(
        &self,
        program: &str,
        args: &[&str],
        envs: &[(&str, &str)],
    ) -> Result<Option<String>> {
        if self.dry_run {
            if !self.quiet {
                print_command(program, args, true);
            }
            return Ok(None);
        }

        let output = self.spawn(program, args, envs)?;
        Ok(Some(String::from_utf8_lossy(&output.stdout).trim().to_string()))
    }

    fn spawn(&self, program: &str, args: &[&str], envs: &[(&str, &str)]) -> Result<Output> {
        if self.verbose && !self.quiet {
            print_command(program, args, false);
        }

        let output = Command::new(program)
            .args(args)
            .envs(envs.iter().copied())
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound if !self.cwd.is_dir() => {
                    AutoPrError::RepoNotFound(self.cwd.clone())
                }
                ErrorKind::NotFound => AutoPrError::ToolNotFound(program.to_string()),
                _ => AutoPrError::Io(e),
            })?;

        if !output.status.success() {
            return Err(AutoPrError::CommandFailed {
                program: program.to_string(),
                args: args.iter().map(|a| a.to_string()).collect(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(output)
    }
}
