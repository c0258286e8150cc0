// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gittime-git

use thiserror::Error;

/// Errors that can occur during git operations
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// Repository not found at the specified path
    #[error("Repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
    },

    /// Invalid commit reference (branch, tag, or SHA)
    #[error("Invalid commit reference: {reference}")]
    InvalidReference {
        /// The reference string that could not be resolved
        reference: String,
    },

    /// The start of a range is not an ancestor of (or equal to) its end
    #[error("Invalid range: {start} is not an ancestor of {end}")]
    InvalidRange {
        /// The resolved start commit SHA
        start: String,
        /// The resolved end commit SHA
        end: String,
    },

    /// A commit SHA was requested that the history does not contain
    #[error("Unknown commit: {sha}")]
    UnknownCommit {
        /// The SHA that could not be found
        sha: String,
    },
}
