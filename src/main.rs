//! autopr CLI entry point.
//!
//! Parses command-line arguments, resolves configuration, and runs the
//! change-detection pipeline.

use autopr::completion::print_completion_script;
use autopr::config::{get_effective_config, Settings};
use autopr::output::{print_error, print_json_report};
use autopr::preflight::token_from_env;
use autopr::{AutoPrError, Runner};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "autopr")]
#[command(
    version,
    about = "Commit pending changes to a new branch and open a pull request",
    after_help = "EXAMPLES:
    # Open a PR against main with the default title
    autopr

    # Custom title, targeting the rel/staging release branch
    autopr \"Update design catalog\" staging

    # Show what would happen without touching the repository or GitHub
    autopr --dry-run --verbose

EXIT CODES:
    0   Success, including when there was nothing to commit
    1   Missing tool, missing token, invalid marker or configuration
    *   Exit code of a failed git or gh command"
)]
struct Cli {
    /// Pull request title and commit message
    title: Option<String>,

    /// Target branch; anything other than `main` opens the PR against `rel/<branch>`
    branch: Option<String>,

    /// Repository to operate on
    #[arg(short = 'C', long = "repo", default_value = ".")]
    repo: PathBuf,

    /// Config file (defaults to .github/autopr.toml, then ~/.config/autopr/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the pull request body
    #[arg(long)]
    body: Option<String>,

    /// Override the remote to push to
    #[arg(long)]
    remote: Option<String>,

    /// Print mutating commands instead of running them
    #[arg(long)]
    dry_run: bool,

    /// Echo every git and gh command before running it
    #[arg(short, long)]
    verbose: bool,

    /// Print the run outcome as JSON instead of progress output
    #[arg(long)]
    json: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, hide = true)]
    completions: Option<Shell>,
}

fn run(cli: Cli) -> autopr::Result<()> {
    let mut config = get_effective_config(&cli.repo, cli.config.as_deref())?;
    if let Some(body) = cli.body {
        config.pr_body = body;
    }
    if let Some(remote) = cli.remote {
        if remote.trim().is_empty() {
            return Err(AutoPrError::Config("--remote must not be empty".to_string()));
        }
        config.remote = remote;
    }

    let token = token_from_env(&config.token_env);
    let settings = Settings::new(
        cli.repo,
        config,
        cli.title.as_deref(),
        cli.branch.as_deref(),
    )
    .with_dry_run(cli.dry_run)
    .with_verbose(cli.verbose)
    .with_quiet(cli.json);

    let outcome = Runner::new(settings).run(token.as_deref())?;

    if cli.json {
        print_json_report(&outcome)?;
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        print_completion_script(shell, &mut Cli::command());
        return;
    }

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
