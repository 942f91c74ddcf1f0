use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutoPrError {
    #[error("Repository directory {0:?} does not exist")]
    RepoNotFound(PathBuf),

    #[error("Required tool '{0}' not found on PATH")]
    ToolNotFound(String),

    #[error("Environment variable {0} is not set; it must hold a GitHub token")]
    MissingToken(String),

    #[error("Marker file {path:?} is not valid JSON: {reason}")]
    InvalidMarker { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("`{program} {}` failed{}: {}", join_args(.args), exit_suffix(.code), .stderr.trim())]
    CommandFailed {
        program: String,
        args: Vec<String>,
        code: Option<i32>,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_args(args: &[String]) -> String {
    args.join(" ")
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {}", code),
        None => " (terminated by signal)".to_string(),
    }
}

impl AutoPrError {
    /// Process exit code for this error.
    ///
    /// Environment and configuration problems map to 1. A failed external
    /// command propagates that command's own exit status.
    pub fn exit_code(&self) -> i32 {
        match self {
            AutoPrError::CommandFailed { code: Some(code), .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AutoPrError>;
