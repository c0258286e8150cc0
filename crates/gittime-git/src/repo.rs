// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! git2-backed repository access
//!
//! This module implements [`History`] over a real repository using the
//! `git2` crate: revision resolution via revparse, commit enumeration
//! via time-sorted revwalks, and file-level line counts via per-patch
//! diff stats.

use crate::commit::Commit;
use crate::diff::{DiffSummary, FileDelta};
use crate::error::GitError;
use crate::history::History;
use chrono::{DateTime, TimeZone, Utc};
use git2::{DiffOptions, Repository, Sort};
use std::path::Path;
use tracing::{debug, info};

/// A git repository opened for history inspection
///
/// The repository is never mutated; all operations read commit metadata
/// and tree contents.
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Discover and open a git repository containing the given path
    ///
    /// This walks up the directory tree to find a `.git` directory.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Clone a remote repository into `path` as a bare repository
    ///
    /// Bare clones are enough for history inspection and avoid checking
    /// out a working tree.
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the clone fails.
    pub fn clone_bare(url: &str, path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        info!(url, path = %path.display(), "cloning repository");
        let repo = git2::build::RepoBuilder::new().bare(true).clone(url, path)?;
        Ok(Self { repo })
    }

    /// Check if the repository is bare
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.repo.is_bare()
    }

    /// Get the repository path
    #[must_use]
    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    /// Convert a git2 commit into our commit model
    fn extract_commit(git_commit: &git2::Commit<'_>) -> Commit {
        let timestamp = timestamp_from_seconds(git_commit.time().seconds());

        Commit {
            sha: git_commit.id().to_string(),
            message: git_commit.message().unwrap_or("").to_string(),
            author: git_commit.author().name().unwrap_or("Unknown").to_string(),
            author_email: git_commit.author().email().unwrap_or("").to_string(),
            timestamp,
            parents: git_commit.parents().map(|p| p.id().to_string()).collect(),
        }
    }

    /// Look up a commit's tree, mapping missing commits to `UnknownCommit`
    fn tree_of(&self, sha: &str) -> Result<git2::Tree<'_>, GitError> {
        let oid = git2::Oid::from_str(sha).map_err(|_| GitError::UnknownCommit {
            sha: sha.to_string(),
        })?;
        let commit = self
            .repo
            .find_commit(oid)
            .map_err(|_| GitError::UnknownCommit {
                sha: sha.to_string(),
            })?;
        Ok(commit.tree()?)
    }

    /// A tree with no entries, used as the diff base for commits with
    /// no predecessor
    fn empty_tree(&self) -> Result<git2::Tree<'_>, GitError> {
        let oid = self.repo.treebuilder(None)?.write()?;
        Ok(self.repo.find_tree(oid)?)
    }
}

impl History for GitRepo {
    fn resolve(&self, revision: &str) -> Result<String, GitError> {
        let obj = self
            .repo
            .revparse_single(revision)
            .map_err(|_| GitError::InvalidReference {
                reference: revision.to_string(),
            })?;
        let commit = obj
            .peel_to_commit()
            .map_err(|_| GitError::InvalidReference {
                reference: revision.to_string(),
            })?;
        Ok(commit.id().to_string())
    }

    fn head(&self) -> Result<String, GitError> {
        let head = self.repo.head()?;
        let oid = head.target().ok_or_else(|| GitError::InvalidReference {
            reference: "HEAD".to_string(),
        })?;
        Ok(oid.to_string())
    }

    fn commits_upto(&self, sha: &str) -> Result<Vec<Commit>, GitError> {
        let oid = git2::Oid::from_str(sha).map_err(|_| GitError::UnknownCommit {
            sha: sha.to_string(),
        })?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push(oid)?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result?;
            let git_commit = self.repo.find_commit(oid)?;
            commits.push(Self::extract_commit(&git_commit));
        }

        debug!(sha, count = commits.len(), "enumerated commits");
        Ok(commits)
    }

    fn diff(&self, predecessor: Option<&str>, sha: &str) -> Result<DiffSummary, GitError> {
        let new_tree = self.tree_of(sha)?;
        let old_tree = match predecessor {
            Some(prev) => self.tree_of(prev)?,
            None => self.empty_tree()?,
        };

        let mut opts = DiffOptions::new();
        opts.ignore_whitespace(false);

        let diff =
            self.repo
                .diff_tree_to_tree(Some(&old_tree), Some(&new_tree), Some(&mut opts))?;

        let mut deltas = Vec::new();
        for (idx, delta) in diff.deltas().enumerate() {
            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<unknown>".to_string());

            // Binary files carry no line stats; they show up as 0/0 and
            // are dropped by the summary constructor.
            let (insertions, deletions) = match git2::Patch::from_diff(&diff, idx)? {
                Some(patch) => {
                    let (_context, added, removed) = patch.line_stats()?;
                    (added, removed)
                }
                None => (0, 0),
            };

            deltas.push(FileDelta {
                path,
                insertions,
                deletions,
            });
        }

        debug!(sha, predecessor, files = deltas.len(), "summarized diff");
        Ok(DiffSummary::from_deltas(deltas))
    }
}

/// Parse a git timestamp (seconds since epoch) into a UTC datetime
#[must_use]
pub fn timestamp_from_seconds(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).single().unwrap_or_else(Utc::now)
}
