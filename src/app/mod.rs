//! Branch selection state
//!
//! [`Selector`] is a synchronous state machine over the branch list. It does
//! no I/O; the terminal loop feeds it [`Action`]s and the caller acts on the
//! final state.

pub mod event;

pub use event::{Event, EventSource, Handler, ScriptedEvents};

use crate::config::Action;
use crate::error::{Error, Result};
use crate::git::BranchRef;
use tracing::debug;

/// Where the selector is in its lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    /// Accepting input
    #[default]
    Active,
    /// The user confirmed the branch under the cursor
    Accepted,
    /// The user left without choosing
    Aborted,
}

/// Whether the loop driving the selector should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep dispatching events
    Continue,
    /// The selector reached a terminal state
    Done,
}

/// Interactive branch selection state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    branches: Vec<BranchRef>,
    cursor: usize,
    status: Status,
}

impl Selector {
    /// Create an active selector with the cursor on the first branch
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBranchList`] if `branches` is empty
    pub fn new(branches: Vec<BranchRef>) -> Result<Self> {
        if branches.is_empty() {
            return Err(Error::EmptyBranchList);
        }
        Ok(Self {
            branches,
            cursor: 0,
            status: Status::Active,
        })
    }

    /// Branches in display order
    #[must_use]
    pub fn branches(&self) -> &[BranchRef] {
        &self.branches
    }

    /// Index of the highlighted branch
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current lifecycle status
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Whether the selector reached a terminal state
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status != Status::Active
    }

    /// Whether the user confirmed a branch
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.status == Status::Accepted
    }

    /// Branch under the cursor
    #[must_use]
    pub fn highlighted(&self) -> &BranchRef {
        &self.branches[self.cursor]
    }

    /// The confirmed branch, if the user confirmed one
    #[must_use]
    pub fn selected(&self) -> Option<&BranchRef> {
        self.is_accepted().then(|| self.highlighted())
    }

    /// Consume the selector, returning the confirmed branch
    #[must_use]
    pub fn into_selected(mut self) -> Option<BranchRef> {
        if self.is_accepted() {
            Some(self.branches.swap_remove(self.cursor))
        } else {
            None
        }
    }

    /// Apply an action and report whether input should continue
    ///
    /// Once terminal, every action is ignored.
    pub fn handle(&mut self, action: Action) -> Step {
        if self.is_done() {
            return Step::Done;
        }

        let len = self.branches.len();
        match action {
            Action::MovePrevious => self.cursor = (self.cursor + len - 1) % len,
            Action::MoveNext => self.cursor = (self.cursor + 1) % len,
            Action::Confirm => self.status = Status::Accepted,
            Action::Abort => self.status = Status::Aborted,
        }
        debug!(?action, cursor = self.cursor, status = ?self.status, "Selector transition");

        if self.is_done() {
            Step::Done
        } else {
            Step::Continue
        }
    }
}
