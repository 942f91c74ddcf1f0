//! Test utilities shared across modules.
//!
//! [`TestRepo`] builds a throwaway repository on a `main` branch with one
//! commit and a bare `origin` remote, so git operations can run for real
//! without touching the network. [`TestRepo::install_fake_gh`] drops a
//! stand-in for the GitHub CLI that records its arguments.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use crate::exec::Exec;

/// URL printed by the fake `gh pr create`.
pub const FAKE_PR_URL: &str = "https://github.com/acme/catalog/pull/42";

pub struct TestRepo {
    work: TempDir,
    origin: TempDir,
    tools: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        let work = TempDir::new().unwrap();
        let origin = TempDir::new().unwrap();
        let tools = TempDir::new().unwrap();

        run(origin.path(), &["init", "-q", "--bare"]);
        run(work.path(), &["init", "-q"]);
        run(work.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);
        run(work.path(), &["config", "commit.gpgsign", "false"]);
        fs::write(work.path().join("README.md"), "catalog\n").unwrap();
        run(work.path(), &["add", "-A"]);
        run(
            work.path(),
            &[
                "-c",
                "user.name=Test",
                "-c",
                "user.email=test@example.com",
                "commit",
                "-q",
                "-m",
                "initial",
            ],
        );
        let origin_path = origin.path().to_string_lossy().to_string();
        run(work.path(), &["remote", "add", "origin", &origin_path]);

        Self {
            work,
            origin,
            tools,
        }
    }

    pub fn path(&self) -> &Path {
        self.work.path()
    }

    pub fn exec(&self) -> Exec {
        Exec::new(self.work.path())
    }

    /// Write a file relative to the work tree, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.work.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.work.path().join(rel)).unwrap()
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.work.path().join(rel).exists()
    }

    /// Run git in the work tree and return trimmed stdout; panics on failure.
    pub fn git(&self, args: &[&str]) -> String {
        run(self.work.path(), args)
    }

    /// Run git in the work tree and return the raw output.
    pub fn git_raw(&self, args: &[&str]) -> Output {
        Command::new("git")
            .args(args)
            .current_dir(self.work.path())
            .output()
            .unwrap()
    }

    pub fn branches(&self) -> Vec<String> {
        self.git(&["branch", "--format=%(refname:short)"])
            .lines()
            .map(|l| l.to_string())
            .collect()
    }

    pub fn remote_has_branch(&self, branch: &str) -> bool {
        let output = Command::new("git")
            .args(["show-ref", "--verify", "--quiet", &format!("refs/heads/{}", branch)])
            .current_dir(self.origin.path())
            .output()
            .unwrap();
        output.status.success()
    }

    pub fn remote_branch_count(&self) -> usize {
        run(self.origin.path(), &["branch", "--format=%(refname:short)"])
            .lines()
            .filter(|l| !l.is_empty())
            .count()
    }

    /// Install a fake `gh` that answers `--version`, records every other
    /// invocation's arguments one per line, and prints [`FAKE_PR_URL`].
    #[cfg(unix)]
    pub fn install_fake_gh(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = self.tools.path().join("gh");
        let log = self.gh_log_path();
        let body = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"--version\" ]; then echo 'gh version 2.0.0 (test)'; exit 0; fi\n\
             printf '%s\\n' \"$@\" > '{}'\n\
             echo 'Creating pull request...'\n\
             echo '{}'\n",
            log.display(),
            FAKE_PR_URL
        );
        fs::write(&script, body).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    /// Install a fake `gh` whose `pr create` fails with exit code 4.
    #[cfg(unix)]
    pub fn install_failing_gh(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = self.tools.path().join("gh-failing");
        let body = "#!/bin/sh\n\
                    if [ \"$1\" = \"--version\" ]; then echo 'gh version 2.0.0 (test)'; exit 0; fi\n\
                    echo 'HTTP 401: Bad credentials' >&2\n\
                    exit 4\n";
        fs::write(&script, body).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    pub fn gh_log_path(&self) -> PathBuf {
        self.tools.path().join("gh-args.log")
    }

    /// Arguments of the last recorded `gh` call, if any.
    pub fn gh_args(&self) -> Option<Vec<String>> {
        fs::read_to_string(self.gh_log_path())
            .ok()
            .map(|s| s.lines().map(|l| l.to_string()).collect())
    }
}

fn run(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_starts_clean_on_main() {
        let repo = TestRepo::new();
        assert_eq!(repo.git(&["status", "--porcelain"]), "");
        assert_eq!(repo.branches(), vec!["main".to_string()]);
        assert_eq!(repo.remote_branch_count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_fake_gh_records_arguments() {
        let repo = TestRepo::new();
        let gh = repo.install_fake_gh();
        let output = Command::new(&gh)
            .args(["pr", "create", "--title", "two words"])
            .output()
            .unwrap();
        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stdout).contains(FAKE_PR_URL));
        assert_eq!(
            repo.gh_args().unwrap(),
            vec!["pr", "create", "--title", "two words"]
        );
    }
}
