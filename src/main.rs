//! git-iswitch - interactive branch switcher

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use git_iswitch::git::Repo;
use git_iswitch::{Config, Error, Selector, exit_codes};
use std::process::ExitCode;
use tracing::{error, info};

/// Interactive branch switcher for git repositories
#[derive(Parser)]
#[command(name = "git-iswitch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print the branches in selector order and exit
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    let config = Config::from_env();
    init_logging(&config);

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            if let Err(e) = Cli::command().print_help() {
                eprintln!("error: {e}");
            }
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = format!("{e:#}");
            error!(error = %message, "Exiting with error");
            eprintln!("error: {message}");
            let code = e
                .downcast_ref::<Error>()
                .map_or(exit_codes::FAILURE, Error::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

/// Log to /tmp/git-iswitch.log - tail with: tail -f /tmp/git-iswitch.log
/// Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
fn init_logging(config: &Config) {
    let Some(level) = config.log_level() else {
        return;
    };

    // Clear the log file on startup
    if let Err(e) = std::fs::write(config.log_path(), "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let file_appender = tracing_appender::rolling::never(&config.log_dir, &config.log_file_name);
    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_max_level(level)
        .with_ansi(false)
        .init();
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let repo = Repo::open(&cwd)?;

    let result = run_session(&repo, cli, config);
    repo.close();
    result
}

fn run_session(repo: &Repo, cli: &Cli, config: &Config) -> Result<()> {
    let branches = repo.branches()?;

    if cli.list {
        for branch in &branches {
            println!("{}", branch.label());
        }
        return Ok(());
    }

    let selector = Selector::new(branches)?;
    let selector =
        git_iswitch::tui::run(selector, &config.keys).context("Failed to run branch selector")?;

    let Some(branch) = selector.into_selected() else {
        info!("Selection aborted");
        return Ok(());
    };

    let outcome = repo.switch_to(&branch)?;
    println!("{}", outcome.summary(&branch));
    Ok(())
}
