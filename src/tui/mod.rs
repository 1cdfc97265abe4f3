//! Terminal User Interface for the branch selector

mod render;

pub use render::{TITLE, branch_lines, render, scroll_offset, view};

use crate::app::{Event, EventSource, Handler, Selector};
use crate::config::KeyBindings;
use anyhow::{Context, Result};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        cursor::Show,
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::io;
use tracing::debug;

/// Run the selector on the real terminal until it reaches a terminal state
///
/// The terminal is restored before returning, whether or not the loop
/// succeeded.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, read from or
/// restored
pub fn run(selector: Selector, keys: &KeyBindings) -> Result<Selector> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let result = run_on_alternate_screen(selector, keys);
    let restored = restore_terminal();

    let selector = result?;
    restored?;
    Ok(selector)
}

fn run_on_alternate_screen(selector: Selector, keys: &KeyBindings) -> Result<Selector> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to initialize terminal")?;

    run_loop(&mut terminal, selector, keys, &mut Handler::new())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen, Show).context("Failed to restore terminal")?;
    Ok(())
}

/// Draw and dispatch events until the selector is done
///
/// Keys without a binding are ignored.
///
/// # Errors
///
/// Returns an error if drawing fails or the event source fails
pub fn run_loop<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    mut selector: Selector,
    keys: &KeyBindings,
    events: &mut E,
) -> Result<Selector> {
    while !selector.is_done() {
        terminal
            .draw(|frame| render(frame, &selector, keys))
            .context("Failed to render branch list")?;

        match events.next_event()? {
            Event::Key(key) => {
                if let Some(action) = keys.get_action(key.code, key.modifiers) {
                    selector.handle(action);
                } else {
                    debug!(code = ?key.code, "Ignoring unbound key");
                }
            }
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            Event::Other => {}
        }
    }

    Ok(selector)
}
