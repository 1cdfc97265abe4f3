//! Switching the working tree to a selected branch

use super::{BranchRef, Head, Repo};
use crate::error::{Error, Result};
use git2::build::CheckoutBuilder;
use tracing::{error, info, warn};

/// Result of a successful [`Repo::switch_to`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The working tree and HEAD now point at the branch
    Switched,
    /// HEAD already resolves to the branch's commit; nothing was touched
    AlreadyCurrent {
        /// HEAD as it was, and still is
        head: Head,
    },
    /// The detached HEAD entry was selected; nothing was touched
    StayedDetached,
}

impl CheckoutOutcome {
    /// Line reported to the user after switching to `branch`
    #[must_use]
    pub fn summary(&self, branch: &BranchRef) -> String {
        match self {
            Self::Switched => format!("Switched to branch '{}'", branch.name),
            Self::AlreadyCurrent { head } if head.name == branch.name => {
                format!("Already on '{}'", branch.name)
            }
            Self::AlreadyCurrent { head } if head.is_detached() => format!(
                "HEAD is already at '{}' ({}), staying detached",
                branch.name,
                branch.short_id()
            ),
            Self::AlreadyCurrent { head } => format!(
                "'{}' is at the current commit ({}), staying on '{}'",
                branch.name,
                branch.short_id(),
                head.name
            ),
            Self::StayedDetached => format!("Already on '{}'", branch.label()),
        }
    }
}

impl Repo {
    /// Check out `branch`, keeping local modifications that do not conflict
    ///
    /// Selecting the branch HEAD already points at, or the detached HEAD entry,
    /// is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HeadResolution`] if HEAD cannot be read, or
    /// [`Error::Checkout`] if the checkout fails (for example when local
    /// modifications conflict with the target tree)
    pub fn switch_to(&self, branch: &BranchRef) -> Result<CheckoutOutcome> {
        let Some(refname) = branch.refname() else {
            info!(target = %branch.short_id(), "Detached HEAD selected, staying detached");
            return Ok(CheckoutOutcome::StayedDetached);
        };

        let head = self.head()?;
        if head.target == branch.target {
            info!(
                branch = %branch.name,
                head = %head.name,
                "Already at branch commit, skipping checkout"
            );
            return Ok(CheckoutOutcome::AlreadyCurrent { head });
        }

        let checkout_err = |source: git2::Error| {
            warn!(branch = %branch.name, error = %source, "Checkout failed");
            Error::Checkout {
                branch: branch.name.clone(),
                source,
            }
        };

        let commit = self.repo.find_commit(branch.target).map_err(checkout_err)?;

        let mut checkout = CheckoutBuilder::new();
        checkout.safe();
        self.repo
            .checkout_tree(commit.as_object(), Some(&mut checkout))
            .map_err(checkout_err)?;

        // The tree is already checked out, so HEAD and the working tree disagree
        self.repo.set_head(&refname).map_err(|source| {
            error!(
                branch = %branch.name,
                previous = %head.name,
                error = %source,
                "Working tree switched but HEAD was not updated"
            );
            Error::HeadUpdate {
                branch: branch.name.clone(),
                previous: head.name.clone(),
                source,
            }
        })?;

        info!(branch = %branch.name, "Switched branch");
        Ok(CheckoutOutcome::Switched)
    }
}
