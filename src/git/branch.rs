//! Branch references and selector ordering

use git2::Oid;

/// Number of hex characters shown for abbreviated commit ids
const SHORT_ID_LEN: usize = 7;

/// Shorthand libgit2 reports for a HEAD that is not on a branch
pub(crate) const DETACHED_HEAD_NAME: &str = "HEAD";

/// What a [`BranchRef`] stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    /// A branch under `refs/heads/`
    Local,
    /// HEAD itself, pointing at a commit no local branch points at
    DetachedHead,
}

/// A branch entry shown in the selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRef {
    /// Short name (e.g., "main"), or HEAD's shorthand for the detached entry
    pub name: String,
    /// Commit the reference points at
    pub target: Oid,
    /// Local branch or detached HEAD
    pub kind: BranchKind,
}

impl BranchRef {
    /// Create a local branch entry
    #[must_use]
    pub fn local(name: impl Into<String>, target: Oid) -> Self {
        Self {
            name: name.into(),
            target,
            kind: BranchKind::Local,
        }
    }

    /// Whether this is the synthetic detached HEAD entry
    #[must_use]
    pub const fn is_detached(&self) -> bool {
        matches!(self.kind, BranchKind::DetachedHead)
    }

    /// Full reference name for local branches (e.g., "refs/heads/main")
    #[must_use]
    pub fn refname(&self) -> Option<String> {
        match self.kind {
            BranchKind::Local => Some(format!("refs/heads/{}", self.name)),
            BranchKind::DetachedHead => None,
        }
    }

    /// Abbreviated commit id
    #[must_use]
    pub fn short_id(&self) -> String {
        self.target.to_string().chars().take(SHORT_ID_LEN).collect()
    }

    /// Text shown for this entry in lists
    #[must_use]
    pub fn label(&self) -> String {
        match self.kind {
            BranchKind::Local => self.name.clone(),
            BranchKind::DetachedHead => {
                format!("{} (detached at {})", self.name, self.short_id())
            }
        }
    }
}

/// The resolved HEAD reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    /// HEAD's shorthand ("HEAD" when detached)
    pub name: String,
    /// Commit HEAD resolves to
    pub target: Oid,
}

impl Head {
    /// Whether HEAD points directly at a commit instead of a branch
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.name == DETACHED_HEAD_NAME
    }

    /// Whether no branch in `branches` points at HEAD's commit
    #[must_use]
    pub fn is_detached_from(&self, branches: &[BranchRef]) -> bool {
        !branches.iter().any(|branch| branch.target == self.target)
    }

    fn into_detached_entry(self) -> BranchRef {
        BranchRef {
            name: self.name,
            target: self.target,
            kind: BranchKind::DetachedHead,
        }
    }
}

/// Order branches for the selector
///
/// Branches are sorted by name. When HEAD matches none of them, an entry for
/// HEAD is placed first, outside the sort.
#[must_use]
pub fn selector_order(head: Head, mut branches: Vec<BranchRef>) -> Vec<BranchRef> {
    let detached = head.is_detached_from(&branches);

    branches.sort_by(|a, b| a.name.cmp(&b.name));

    if detached {
        branches.insert(0, head.into_detached_entry());
    }
    branches
}
