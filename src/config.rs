use crate::error::{AutoPrError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// The config directory name under ~/.config/
const CONFIG_DIR_NAME: &str = "autopr";

/// Project config location, relative to the repository root.
pub const PROJECT_CONFIG_PATH: &str = ".github/autopr.toml";

pub const DEFAULT_TITLE: &str = "Auto PR: Differences detected";
pub const DEFAULT_TARGET: &str = "main";
pub const DEFAULT_MARKER_PATH: &str = ".github/get_predefined_de/catalog/list.json";
pub const DEFAULT_BRANCH_PREFIX: &str = "predefined_de/autopr_";
pub const DEFAULT_PR_BODY: &str =
    "This pull request was created automatically because differences were detected in the repository.";
pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_TOKEN_ENV: &str = "GH_TOKEN";
pub const DEFAULT_COMMITTER_NAME: &str = "GitHub Actions";
pub const DEFAULT_COMMITTER_EMAIL: &str = "actions@github.com";

// ============================================================================
// Configuration File
// ============================================================================

/// Settings that can be stored in a TOML config file.
///
/// Every field has a default, so partial files work.
///
/// # Example
///
/// ```toml
/// marker_path = ".github/get_predefined_de/catalog/list.json"
/// branch_prefix = "predefined_de/autopr_"
/// remote = "origin"
/// token_env = "GH_TOKEN"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Marker file created with `{}` when missing, relative to the repo root.
    #[serde(default = "default_marker_path")]
    pub marker_path: PathBuf,

    /// Prefix of the generated branch; the Unix timestamp is appended.
    #[serde(default = "default_branch_prefix")]
    pub branch_prefix: String,

    /// Pull request body.
    #[serde(default = "default_pr_body")]
    pub pr_body: String,

    /// Remote the branch is pushed to.
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Environment variable that must hold the GitHub token.
    #[serde(default = "default_token_env")]
    pub token_env: String,

    #[serde(default = "default_committer_name")]
    pub committer_name: String,

    #[serde(default = "default_committer_email")]
    pub committer_email: String,

    /// Title used when none is given on the command line.
    #[serde(default = "default_title")]
    pub default_title: String,

    /// Target branch used when none is given on the command line.
    #[serde(default = "default_target")]
    pub default_target: String,

    /// Reject an existing marker file that is not valid JSON.
    #[serde(default = "default_true")]
    pub validate_marker: bool,

    #[serde(default = "default_git_program")]
    pub git_program: String,

    #[serde(default = "default_gh_program")]
    pub gh_program: String,
}

fn default_marker_path() -> PathBuf {
    PathBuf::from(DEFAULT_MARKER_PATH)
}

fn default_branch_prefix() -> String {
    DEFAULT_BRANCH_PREFIX.to_string()
}

fn default_pr_body() -> String {
    DEFAULT_PR_BODY.to_string()
}

fn default_remote() -> String {
    DEFAULT_REMOTE.to_string()
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

fn default_committer_name() -> String {
    DEFAULT_COMMITTER_NAME.to_string()
}

fn default_committer_email() -> String {
    DEFAULT_COMMITTER_EMAIL.to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_target() -> String {
    DEFAULT_TARGET.to_string()
}

fn default_true() -> bool {
    true
}

fn default_git_program() -> String {
    "git".to_string()
}

fn default_gh_program() -> String {
    "gh".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker_path: default_marker_path(),
            branch_prefix: default_branch_prefix(),
            pr_body: default_pr_body(),
            remote: default_remote(),
            token_env: default_token_env(),
            committer_name: default_committer_name(),
            committer_email: default_committer_email(),
            default_title: default_title(),
            default_target: default_target(),
            validate_marker: true,
            git_program: default_git_program(),
            gh_program: default_gh_program(),
        }
    }
}

// ============================================================================
// Config Validation
// ============================================================================

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A field that must hold a value is empty.
    EmptyField(&'static str),
    /// The marker path is absolute.
    AbsoluteMarkerPath(PathBuf),
    /// The marker path climbs out of the repository with `..`.
    MarkerOutsideRepo(PathBuf),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyField(field) => write!(f, "'{}' must not be empty", field),
            ConfigError::AbsoluteMarkerPath(path) => write!(
                f,
                "marker_path must be relative to the repository root, got {:?}",
                path
            ),
            ConfigError::MarkerOutsideRepo(path) => write!(
                f,
                "marker_path must stay inside the repository, got {:?}",
                path
            ),
        }
    }
}

impl Error for ConfigError {}

/// Validate a configuration for consistency.
pub fn validate_config(config: &Config) -> std::result::Result<(), ConfigError> {
    let required = [
        ("branch_prefix", &config.branch_prefix),
        ("remote", &config.remote),
        ("token_env", &config.token_env),
        ("committer_name", &config.committer_name),
        ("committer_email", &config.committer_email),
        ("default_title", &config.default_title),
        ("default_target", &config.default_target),
        ("git_program", &config.git_program),
        ("gh_program", &config.gh_program),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ConfigError::EmptyField(field));
        }
    }

    if config.marker_path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyField("marker_path"));
    }
    if config.marker_path.is_absolute() {
        return Err(ConfigError::AbsoluteMarkerPath(config.marker_path.clone()));
    }
    if config
        .marker_path
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(ConfigError::MarkerOutsideRepo(config.marker_path.clone()));
    }

    Ok(())
}

// ============================================================================
// Loading
// ============================================================================

/// Get the global config file path (~/.config/autopr/config.toml).
pub fn global_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| AutoPrError::Config("Could not determine home directory".to_string()))?;
    Ok(home.join(".config").join(CONFIG_DIR_NAME).join("config.toml"))
}

/// Project config path inside the given repository.
pub fn project_config_path(repo: &Path) -> PathBuf {
    repo.join(PROJECT_CONFIG_PATH)
}

/// Load and parse a config file.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        AutoPrError::Config(format!("Failed to read config file at {:?}: {}", path, e))
    })?;
    toml::from_str(&content).map_err(|e| {
        AutoPrError::Config(format!("Failed to parse config file at {:?}: {}", path, e))
    })
}

/// Resolve the configuration in effect for a repository.
///
/// An explicit path wins. Otherwise the project config is used when it
/// exists, then the global config, then defaults. Files are not merged.
pub fn get_effective_config(repo: &Path, explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => load_config_file(path)?,
        None => {
            let project = project_config_path(repo);
            if project.exists() {
                load_config_file(&project)?
            } else {
                match global_config_path() {
                    Ok(global) if global.exists() => load_config_file(&global)?,
                    _ => Config::default(),
                }
            }
        }
    };

    validate_config(&config).map_err(|e| AutoPrError::Config(e.to_string()))?;

    Ok(config)
}

// ============================================================================
// Run Settings
// ============================================================================

/// Committer identity applied to this run's git commands only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    /// Environment variables that set author and committer for one git process.
    pub fn env_vars(&self) -> [(&'static str, &str); 4] {
        [
            ("GIT_AUTHOR_NAME", self.name.as_str()),
            ("GIT_AUTHOR_EMAIL", self.email.as_str()),
            ("GIT_COMMITTER_NAME", self.name.as_str()),
            ("GIT_COMMITTER_EMAIL", self.email.as_str()),
        ]
    }
}

/// Fully resolved inputs for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub repo: PathBuf,
    pub title: String,
    pub target: String,
    pub config: Config,
    pub dry_run: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl Settings {
    /// Combine a config with command-line parameters.
    ///
    /// Missing or empty title and target fall back to the configured defaults.
    pub fn new(
        repo: impl Into<PathBuf>,
        config: Config,
        title: Option<&str>,
        target: Option<&str>,
    ) -> Self {
        let title = non_empty_or(title, &config.default_title);
        let target = non_empty_or(target, &config.default_target);
        Self {
            repo: repo.into(),
            title,
            target,
            config,
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

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn identity(&self) -> Identity {
        Identity {
            name: self.config.committer_name.clone(),
            email: self.config.committer_email.clone(),
        }
    }

    /// Absolute location of the marker file.
    pub fn marker_file(&self) -> PathBuf {
        self.repo.join(&self.config.marker_path)
    }
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}
