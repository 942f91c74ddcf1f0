//! The change-detection and pull request pipeline.
//!
//! [`Runner::run`] checks the environment, looks for uncommitted changes and,
//! when there are some, commits them to a fresh branch, pushes it and opens a
//! pull request. Every step is fatal on failure and nothing is rolled back.

use serde::Serialize;

use crate::branch::{branch_name, current_timestamp, resolve_base};
use crate::config::Settings;
use crate::error::Result;
use crate::exec::Exec;
use crate::gh::{GitHubCli, PRResult, PullRequest};
use crate::git::{Git, StatusEntry};
use crate::marker::{ensure_marker, validate_marker, MarkerStatus};
use crate::output::{
    print_branch_created, print_changes_detected, print_committed, print_dry_run_complete,
    print_marker_status, print_no_changes, print_phase_banner, print_pr_success,
    print_push_success, print_pushing_branch, print_token_present, Phase,
};
use crate::preflight::{check_repo, check_token, check_tools};

/// What a run ended with.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    /// The working tree was clean; nothing was touched.
    NoChanges,
    /// Changes were committed on `branch` and a PR into `base` was opened
    /// (or would have been, for a dry run).
    PullRequestOpened {
        branch: String,
        base: String,
        title: String,
        changed_files: Vec<StatusEntry>,
        marker_created: bool,
        url: Option<String>,
        dry_run: bool,
    },
}

pub struct Runner {
    settings: Settings,
    exec: Exec,
}

impl Runner {
    pub fn new(settings: Settings) -> Self {
        let exec = Exec::new(&settings.repo)
            .with_dry_run(settings.dry_run)
            .with_verbose(settings.verbose)
            .with_quiet(settings.quiet);
        Self { settings, exec }
    }

    fn say(&self, f: impl FnOnce()) {
        if !self.settings.quiet {
            f();
        }
    }

    /// Check the repository directory, tools and token. Nothing has been
    /// modified when this fails.
    pub fn preflight(&self, token: Option<&str>) -> Result<()> {
        let config = &self.settings.config;
        check_repo(&self.settings.repo)?;
        check_tools(&self.exec, &config.git_program, &config.gh_program)?;
        check_token(&config.token_env, token)?;
        self.say(|| print_token_present(&config.token_env));
        Ok(())
    }

    /// Run the whole pipeline.
    pub fn run(&self, token: Option<&str>) -> Result<RunOutcome> {
        self.preflight(token)?;

        let settings = &self.settings;
        let config = &settings.config;
        let git = Git::new(&self.exec, &config.git_program);

        let changes = git.changes()?;
        if changes.is_empty() {
            self.say(print_no_changes);
            return Ok(RunOutcome::NoChanges);
        }
        self.say(|| print_changes_detected(&changes));

        let marker_file = settings.marker_file();
        if config.validate_marker {
            validate_marker(&marker_file)?;
        }

        let identity = settings.identity();
        let branch = branch_name(&config.branch_prefix, current_timestamp());
        let base = resolve_base(&settings.target);

        self.say(|| print_phase_banner(Phase::Committing, settings.dry_run));
        git.create_and_checkout(&branch)?;
        self.say(|| print_branch_created(&branch));

        let marker_status = ensure_marker(&marker_file, settings.dry_run)?;
        self.say(|| print_marker_status(&config.marker_path, marker_status));

        git.stage_all()?;
        git.commit(&settings.title, &identity)?;
        self.say(|| print_committed(&settings.title));

        self.say(|| print_pushing_branch(&config.remote, &branch));
        git.push_branch(&config.remote, &branch)?;
        if !settings.dry_run {
            self.say(print_push_success);
        }

        self.say(|| print_phase_banner(Phase::PullRequest, settings.dry_run));
        let gh = GitHubCli::new(&self.exec, &config.gh_program);
        let pr = PullRequest {
            title: settings.title.clone(),
            body: config.pr_body.clone(),
            base: base.clone(),
            head: branch.clone(),
        };
        let result = gh.create_pull_request(&pr)?;

        match &result {
            PRResult::Created(url) => {
                self.say(|| print_pr_success(url.as_deref(), &branch, &base))
            }
            PRResult::DryRun => self.say(|| print_dry_run_complete(&branch, &base)),
        }

        Ok(RunOutcome::PullRequestOpened {
            url: result.url().map(str::to_string),
            branch,
            base,
            title: settings.title.clone(),
            changed_files: changes,
            marker_created: marker_status != MarkerStatus::Existing,
            dry_run: settings.dry_run,
        })
    }
}
