//! git-iswitch - interactive branch switcher
//!
//! Lists the local branches of the repository in the current directory,
//! lets you pick one with the keyboard, and checks it out while keeping
//! local modifications that do not conflict.

pub mod app;
pub mod config;
pub mod error;
pub mod git;
pub mod tui;

pub use app::{Selector, Status, Step};
pub use config::Config;
pub use error::{Error, Result, exit_codes};
