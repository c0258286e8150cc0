// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Repository acquisition
//!
//! A [`Workspace`] either discovers a repository at a local path or
//! clones a remote URL bare into a unique temporary directory. Cloned
//! directories are removed when the workspace is dropped, including
//! when the clone itself fails partway.

use gittime_git::{GitError, GitRepo};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::warn;

/// Counter for generating unique clone directory names
static CLONE_COUNTER: AtomicU32 = AtomicU32::new(0);

/// A temporary clone directory, removed on drop
struct TempClone {
    path: PathBuf,
}

impl TempClone {
    fn unique() -> Self {
        let counter = CLONE_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir_name = format!("gittime-clone-{}-{}", std::process::id(), counter);
        Self {
            path: std::env::temp_dir().join(dir_name),
        }
    }
}

impl Drop for TempClone {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(err) = fs::remove_dir_all(&self.path) {
                warn!(path = %self.path.display(), %err, "failed to remove clone directory");
            }
        }
    }
}

/// An open repository, plus ownership of its clone directory when the
/// repository was fetched from a remote
pub struct Workspace {
    repo: GitRepo,
    _clone: Option<TempClone>,
}

impl Workspace {
    /// Open a local repository containing `path`
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RepositoryNotFound`] if no repository is
    /// found at or above the path.
    pub fn open_local(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let repo = GitRepo::discover(path)?;
        Ok(Self { repo, _clone: None })
    }

    /// Clone a remote repository into a temporary directory
    ///
    /// # Errors
    ///
    /// Returns [`GitError`] if the clone fails; any partially created
    /// directory is cleaned up.
    pub fn clone_remote(url: &str) -> Result<Self, GitError> {
        let clone = TempClone::unique();
        let repo = GitRepo::clone_bare(url, &clone.path)?;
        Ok(Self {
            repo,
            _clone: Some(clone),
        })
    }

    /// The open repository
    #[must_use]
    pub fn repo(&self) -> &GitRepo {
        &self.repo
    }
}
