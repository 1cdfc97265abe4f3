//! End-to-end selection scenarios driven with scripted key events

use crate::common::TestFixture;
use git_iswitch::Selector;
use git_iswitch::app::{Event, ScriptedEvents};
use git_iswitch::config::KeyBindings;
use git_iswitch::git::{CheckoutOutcome, Repo};
use git_iswitch::tui::{run_loop, view};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn select(repo: &Repo, events: Vec<Event>) -> Result<Selector, Box<dyn std::error::Error>> {
    let mut terminal = Terminal::new(TestBackend::new(60, 12))?;
    let selector = Selector::new(repo.branches()?)?;
    let mut events = ScriptedEvents::new(events);
    Ok(run_loop(
        &mut terminal,
        selector,
        &KeyBindings::default(),
        &mut events,
    )?)
}

#[test]
fn test_attached_head_confirm_current_branch() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::with_initial_branch("main")?;
    fixture.commit_on_branch("a-topic", "topic.txt", "topic\n")?;

    let repo = Repo::open(&fixture.repo_path)?;
    let selector = Selector::new(repo.branches()?)?;
    assert_eq!(view(&selector), "> a-topic\n  main");

    let done = select(&repo, vec![key(KeyCode::Down), key(KeyCode::Enter)])?;
    assert_eq!(done.cursor(), 1);
    let chosen = done.into_selected().ok_or("nothing selected")?;
    assert_eq!(chosen.name, "main");

    let outcome = repo.switch_to(&chosen)?;
    assert!(matches!(outcome, CheckoutOutcome::AlreadyCurrent { .. }));
    assert_eq!(outcome.summary(&chosen), "Already on 'main'");
    assert_eq!(fixture.head_shorthand()?, "main");
    Ok(())
}

#[test]
fn test_attached_head_switch_to_other_branch() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::with_initial_branch("main")?;
    fixture.commit_on_branch("a-topic", "topic.txt", "topic\n")?;

    let repo = Repo::open(&fixture.repo_path)?;
    let done = select(&repo, vec![key(KeyCode::Enter)])?;
    let chosen = done.into_selected().ok_or("nothing selected")?;

    assert_eq!(repo.switch_to(&chosen)?, CheckoutOutcome::Switched);
    assert_eq!(fixture.head_shorthand()?, "a-topic");
    assert_eq!(fixture.read_file("topic.txt")?, "topic\n");
    Ok(())
}

#[test]
fn test_detached_head_confirm_stays_detached() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::with_initial_branch("main")?;
    let detached = fixture.detach_at_new_commit()?;

    let repo = Repo::open(&fixture.repo_path)?;
    let done = select(&repo, vec![key(KeyCode::Enter)])?;

    assert_eq!(done.cursor(), 0);
    let chosen = done.into_selected().ok_or("nothing selected")?;
    assert!(chosen.is_detached());
    assert_eq!(chosen.target, detached);

    assert_eq!(repo.switch_to(&chosen)?, CheckoutOutcome::StayedDetached);
    assert!(fixture.repo.head_detached()?);
    assert_eq!(fixture.repo.head()?.target(), Some(detached));
    Ok(())
}

#[test]
fn test_detached_head_wraps_up_to_last_branch() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::with_initial_branch("main")?;
    fixture.detach_at_new_commit()?;

    let repo = Repo::open(&fixture.repo_path)?;
    let done = select(&repo, vec![key(KeyCode::Up), key(KeyCode::Enter)])?;
    let chosen = done.into_selected().ok_or("nothing selected")?;
    assert_eq!(chosen.name, "main");

    assert_eq!(repo.switch_to(&chosen)?, CheckoutOutcome::Switched);
    assert_eq!(fixture.head_shorthand()?, "main");
    assert!(!fixture.repo_path.join("detached.txt").exists());
    Ok(())
}

#[test]
fn test_abort_leaves_repository_untouched() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    fixture.commit_on_branch("feature", "feature.txt", "feature\n")?;

    let repo = Repo::open(&fixture.repo_path)?;
    let done = select(&repo, vec![key(KeyCode::Down), key(KeyCode::Esc)])?;

    assert!(done.is_done());
    assert!(!done.is_accepted());
    assert_eq!(done.into_selected(), None);
    assert_eq!(fixture.head_shorthand()?, "master");
    Ok(())
}
