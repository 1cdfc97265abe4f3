//! Binary tests for the command line surface
//!
//! These run the built `git-iswitch` binary with an explicit working
//! directory. None of them reach the interactive selector.

use crate::common::TestFixture;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_in(dir: &Path, args: &[&str]) -> std::io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_git-iswitch"))
        .args(args)
        .current_dir(dir)
        .env_remove("DEBUG")
        .output()
}

#[test]
fn test_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let output = run_in(dir.path(), &["--help"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_DESCRIPTION")));
    assert!(stdout.contains("--list"));
    Ok(())
}

#[test]
fn test_cli_version() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let output = run_in(dir.path(), &["--version"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn test_cli_invalid_argument_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let output = run_in(dir.path(), &["--invalid-flag"])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    Ok(())
}

#[test]
fn test_cli_rejects_path_argument() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    let output = run_in(&fixture.repo_path, &["some/path"])?;

    assert!(!output.status.success());
    Ok(())
}

#[test]
fn test_cli_list_sorted() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    fixture.create_branch("zeta")?;
    fixture.create_branch("alpha")?;

    let output = run_in(&fixture.repo_path, &["--list"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "alpha\nmaster\nzeta\n");
    Ok(())
}

#[test]
fn test_cli_list_detached() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    let detached = fixture.detach_at_new_commit()?;

    let output = run_in(&fixture.repo_path, &["--list"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    let short: String = detached.to_string().chars().take(7).collect();
    let expected_head = format!("HEAD (detached at {short})");
    assert_eq!(lines, vec![expected_head.as_str(), "master"]);
    Ok(())
}

#[test]
fn test_cli_not_a_repository() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let output = run_in(dir.path(), &[])?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is not a git repository"));
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_cli_does_not_search_parent_directories() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    let nested = fixture.repo_path.join("src");
    std::fs::create_dir_all(&nested)?;

    let output = run_in(&nested, &["--list"])?;

    assert_eq!(output.status.code(), Some(2));
    Ok(())
}

#[test]
fn test_cli_unborn_head() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    git2::Repository::init(dir.path())?;

    let output = run_in(dir.path(), &["--list"])?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to resolve HEAD"));
    Ok(())
}
