use crate::config::Identity;
use crate::error::Result;
use crate::exec::Exec;

/// One record of `git status --porcelain -z` output.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StatusEntry {
    /// Two-character XY status code, e.g. ` M`, `??`, `D `.
    pub code: String,
    /// Path relative to the repository root (destination path for renames).
    pub path: String,
}

impl StatusEntry {
    pub fn is_untracked(&self) -> bool {
        self.code == "??"
    }

    fn is_rename_or_copy(&self) -> bool {
        self.code.contains(['R', 'C'])
    }
}

/// Parse NUL-separated porcelain v1 status output.
///
/// Paths arrive verbatim, never quoted. A rename or copy record is followed
/// by a second field holding the source path, which is skipped.
pub fn parse_porcelain(output: &str) -> Vec<StatusEntry> {
    let mut entries = Vec::new();
    let mut fields = output.split('\0');

    while let Some(record) = fields.next() {
        if record.len() < 4 || !record.is_char_boundary(3) {
            continue;
        }
        let (code, path) = record.split_at(3);
        let entry = StatusEntry {
            code: code[..2].to_string(),
            path: path.to_string(),
        };
        if entry.is_rename_or_copy() {
            fields.next();
        }
        entries.push(entry);
    }

    entries
}

/// Git commands used by a run, bound to one working directory.
pub struct Git<'a> {
    exec: &'a Exec,
    program: &'a str,
}

impl<'a> Git<'a> {
    pub fn new(exec: &'a Exec, program: &'a str) -> Self {
        Self { exec, program }
    }

    /// List uncommitted changes, including untracked files.
    pub fn changes(&self) -> Result<Vec<StatusEntry>> {
        let output = self.exec.read(
            self.program,
            &["status", "--porcelain", "-z", "--untracked-files=all"],
        )?;
        Ok(parse_porcelain(&output))
    }

    /// Create and checkout a new branch
    pub fn create_and_checkout(&self, branch: &str) -> Result<()> {
        self.exec
            .mutate(self.program, &["checkout", "-b", branch], &[])?;
        Ok(())
    }

    /// Stage everything, untracked files included.
    pub fn stage_all(&self) -> Result<()> {
        self.exec.mutate(self.program, &["add", "-A"], &[])?;
        Ok(())
    }

    /// Commit the index as `identity`, without touching any git config.
    pub fn commit(&self, message: &str, identity: &Identity) -> Result<()> {
        self.exec.mutate(
            self.program,
            &["commit", "-m", message],
            &identity.env_vars(),
        )?;
        Ok(())
    }

    /// Push the branch to `remote` with upstream tracking.
    pub fn push_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.exec
            .mutate(self.program, &["push", "--set-upstream", remote, branch], &[])?;
        Ok(())
    }
}
