//! Error types for git-iswitch
//!
//! Every variant names the phase that failed and maps to a process exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
pub mod exit_codes {
    /// Completed normally, including when the user aborts the selector
    pub const SUCCESS: i32 = 0;
    /// Terminal or other unexpected failure
    pub const FAILURE: i32 = 1;
    /// The repository could not be opened or read
    pub const REPOSITORY_FAILURE: i32 = 2;
    /// The selected branch could not be checked out
    pub const CHECKOUT_FAILURE: i32 = 3;
}

/// Errors raised while opening, listing or switching branches
#[derive(Debug, Error)]
pub enum Error {
    /// No `.git` entry exists in the working directory
    #[error("{} is not a git repository", path.display())]
    NotARepository {
        /// Directory that was checked
        path: PathBuf,
    },

    /// libgit2 refused to open the repository
    #[error("Failed to open git repository at {}", path.display())]
    Open {
        /// Repository directory
        path: PathBuf,
        /// Underlying storage error
        #[source]
        source: git2::Error,
    },

    /// HEAD could not be resolved to a commit
    #[error("Failed to resolve HEAD")]
    HeadResolution {
        /// Underlying storage error
        #[source]
        source: git2::Error,
    },

    /// Local branches could not be enumerated
    #[error("Failed to list branches")]
    BranchEnumeration {
        /// Underlying storage error
        #[source]
        source: git2::Error,
    },

    /// Nothing to select from
    #[error("No branches to select from")]
    EmptyBranchList,

    /// Checkout of the selected branch failed
    #[error("Failed to switch to branch '{branch}'")]
    Checkout {
        /// Branch that was requested
        branch: String,
        /// Underlying checkout error
        #[source]
        source: git2::Error,
    },

    /// The tree was checked out but HEAD could not be moved to the branch
    #[error("Checked out '{branch}' but HEAD still points at '{previous}'")]
    HeadUpdate {
        /// Branch whose tree is now in the working directory
        branch: String,
        /// HEAD's shorthand before the switch
        previous: String,
        /// Underlying reference error
        #[source]
        source: git2::Error,
    },
}

impl Error {
    /// Exit code reported for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotARepository { .. }
            | Self::Open { .. }
            | Self::HeadResolution { .. }
            | Self::BranchEnumeration { .. }
            | Self::EmptyBranchList => exit_codes::REPOSITORY_FAILURE,
            Self::Checkout { .. } | Self::HeadUpdate { .. } => exit_codes::CHECKOUT_FAILURE,
        }
    }
}

/// Result alias for repository operations
pub type Result<T> = std::result::Result<T, Error>;
