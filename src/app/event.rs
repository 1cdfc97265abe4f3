//! Event handling for the TUI

use anyhow::Result;
use ratatui::crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::collections::VecDeque;

/// Application events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Anything else the terminal reports (focus, mouse, paste)
    Other,
}

/// A source of terminal events for the selector loop
pub trait EventSource {
    /// Wait for the next event
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read
    fn next_event(&mut self) -> Result<Event>;
}

/// Handler that blocks on crossterm for terminal events
///
/// There is no tick: the loop waits until the user does something.
#[derive(Debug, Clone, Copy, Default)]
pub struct Handler;

impl Handler {
    /// Create a new event handler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EventSource for Handler {
    fn next_event(&mut self) -> Result<Event> {
        loop {
            match event::read()? {
                // Release/repeat events only arrive with keyboard enhancement
                CrosstermEvent::Key(key) if key.kind != KeyEventKind::Press => {}
                CrosstermEvent::Key(key) => return Ok(Event::Key(key)),
                CrosstermEvent::Resize(w, h) => return Ok(Event::Resize(w, h)),
                _ => return Ok(Event::Other),
            }
        }
    }
}

/// Replays a fixed sequence of events, then reports the input as closed
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    events: VecDeque<Event>,
}

impl ScriptedEvents {
    /// Create a source that yields `events` in order
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Number of events not yet delivered
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("Scripted input exhausted"))
    }
}
