//! Checks that run before anything is modified.
//!
//! The repository directory must exist, both external CLIs must be
//! launchable, and the GitHub token must be present in the environment. The
//! token itself is never inspected or printed.

use std::path::Path;

use crate::error::{AutoPrError, Result};
use crate::exec::Exec;

/// Read the token variable, treating an empty value as unset.
pub fn token_from_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Fail with [`AutoPrError::RepoNotFound`] unless `repo` is a directory.
pub fn check_repo(repo: &Path) -> Result<()> {
    if repo.is_dir() {
        Ok(())
    } else {
        Err(AutoPrError::RepoNotFound(repo.to_path_buf()))
    }
}

/// Fail with [`AutoPrError::ToolNotFound`] for the first tool that cannot run.
pub fn check_tools(exec: &Exec, git_program: &str, gh_program: &str) -> Result<()> {
    for program in [git_program, gh_program] {
        if !exec.can_run(program) {
            return Err(AutoPrError::ToolNotFound(program.to_string()));
        }
    }
    Ok(())
}

/// Fail with [`AutoPrError::MissingToken`] unless a non-empty token is present.
pub fn check_token(env_name: &str, token: Option<&str>) -> Result<()> {
    match token {
        Some(t) if !t.is_empty() => Ok(()),
        _ => Err(AutoPrError::MissingToken(env_name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_check_token_present() {
        assert!(check_token("GH_TOKEN", Some("ghp_secret")).is_ok());
    }

    #[test]
    fn test_check_token_missing() {
        let err = check_token("GH_TOKEN", None).unwrap_err();
        assert!(matches!(err, AutoPrError::MissingToken(ref n) if n == "GH_TOKEN"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_check_token_empty_counts_as_missing() {
        assert!(check_token("GH_TOKEN", Some("")).is_err());
    }

    #[test]
    fn test_token_from_env_unset_variable() {
        assert_eq!(token_from_env("AUTOPR_TEST_SURELY_UNSET_VARIABLE"), None);
    }

    #[test]
    fn test_check_repo_rejects_missing_directory() {
        let dir = TempDir::new().unwrap();
        assert!(check_repo(dir.path()).is_ok());

        let missing = dir.path().join("does-not-exist");
        let err = check_repo(&missing).unwrap_err();
        assert!(matches!(err, AutoPrError::RepoNotFound(ref p) if *p == missing));
    }

    #[test]
    fn test_check_repo_rejects_plain_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("catalog.json");
        std::fs::write(&file, "{}").unwrap();
        assert!(matches!(
            check_repo(&file).unwrap_err(),
            AutoPrError::RepoNotFound(_)
        ));
    }

    #[test]
    fn test_check_tools_reports_missing_gh() {
        let dir = TempDir::new().unwrap();
        let exec = Exec::new(dir.path());
        let err = check_tools(&exec, "git", "autopr-missing-gh").unwrap_err();
        assert!(matches!(err, AutoPrError::ToolNotFound(ref p) if p == "autopr-missing-gh"));
    }

    #[test]
    fn test_check_tools_reports_git_first() {
        let dir = TempDir::new().unwrap();
        let exec = Exec::new(dir.path());
        let err = check_tools(&exec, "autopr-missing-git", "autopr-missing-gh").unwrap_err();
        assert!(matches!(err, AutoPrError::ToolNotFound(ref p) if p == "autopr-missing-git"));
    }

    #[cfg(unix)]
    #[test]
    fn test_check_tools_accepts_available_tools() {
        let repo = crate::test_utils::TestRepo::new();
        let gh = repo.install_fake_gh();
        let exec = repo.exec();
        assert!(check_tools(&exec, "git", gh.to_str().unwrap()).is_ok());
    }
}
