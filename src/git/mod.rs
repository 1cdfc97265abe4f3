//! Git operations module
//!
//! [`Repo`] is the only type in the crate that touches repository state.

mod branch;
mod switch;

pub use branch::{BranchKind, BranchRef, Head, selector_order};
pub use switch::CheckoutOutcome;

use crate::error::{Error, Result};
use git2::{BranchType, Repository, RepositoryOpenFlags};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the repository metadata entry inside a working directory
const GIT_DIR_NAME: &str = ".git";

/// An open repository session
///
/// The handle is released when the session is closed or dropped.
pub struct Repo {
    repo: Repository,
    path: PathBuf,
}

impl std::fmt::Debug for Repo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repo")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl Repo {
    /// Open the repository whose working directory is exactly `path`
    ///
    /// Parent directories are not searched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotARepository`] if `path` has no `.git` entry, or
    /// [`Error::Open`] if `path` cannot be inspected or libgit2 cannot open it
    pub fn open(path: &Path) -> Result<Self> {
        let git_dir = path.join(GIT_DIR_NAME);
        let has_git_dir = git_dir.try_exists().map_err(|e| Error::Open {
            path: path.to_path_buf(),
            source: git2::Error::from_str(&e.to_string()),
        })?;
        if !has_git_dir {
            return Err(Error::NotARepository {
                path: path.to_path_buf(),
            });
        }

        let repo = Repository::open_ext(
            path,
            RepositoryOpenFlags::NO_SEARCH,
            std::iter::empty::<&OsStr>(),
        )
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "Opened repository");
        Ok(Self {
            repo,
            path: path.to_path_buf(),
        })
    }

    /// Working directory this session was opened on
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve HEAD to its shorthand and commit
    ///
    /// # Errors
    ///
    /// Returns [`Error::HeadResolution`] if HEAD is unborn or does not lead to
    /// a commit
    pub fn head(&self) -> Result<Head> {
        let head = self
            .repo
            .head()
            .map_err(|source| Error::HeadResolution { source })?;
        let commit = head
            .peel_to_commit()
            .map_err(|source| Error::HeadResolution { source })?;

        Ok(Head {
            name: head
                .shorthand()
                .unwrap_or(branch::DETACHED_HEAD_NAME)
                .to_string(),
            target: commit.id(),
        })
    }

    /// List local branches in selector order
    ///
    /// If HEAD points at a commit that no branch points at, a detached HEAD
    /// entry comes first.
    ///
    /// # Errors
    ///
    /// Returns an error if HEAD cannot be resolved, branches cannot be read,
    /// or there is nothing to list
    pub fn branches(&self) -> Result<Vec<BranchRef>> {
        let head = self.head()?;

        let iter = self
            .repo
            .branches(Some(BranchType::Local))
            .map_err(|source| Error::BranchEnumeration { source })?;

        let mut branches = Vec::new();
        for branch_result in iter {
            let (branch, _) =
                branch_result.map_err(|source| Error::BranchEnumeration { source })?;
            let Some(name) = branch
                .name()
                .map_err(|source| Error::BranchEnumeration { source })?
            else {
                debug!("Skipping branch with non UTF-8 name");
                continue;
            };
            let resolved = branch
                .get()
                .resolve()
                .map_err(|source| Error::BranchEnumeration { source })?;
            if let Some(target) = resolved.target() {
                branches.push(BranchRef::local(name, target));
            }
        }

        let detached = head.is_detached_from(&branches);
        let ordered = selector_order(head, branches);
        if ordered.is_empty() {
            return Err(Error::EmptyBranchList);
        }

        debug!(count = ordered.len(), detached, "Listed branches");
        Ok(ordered)
    }

    /// Release the repository handle
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for Repo {
    fn drop(&mut self) {
        debug!(path = %self.path.display(), "Closing repository");
    }
}
