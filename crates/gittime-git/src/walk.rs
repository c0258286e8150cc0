// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Range walking
//!
//! [`walk`] resolves a `(start, end]` revision range against a
//! [`History`], reorders it oldest-first, and pairs every commit with
//! its chronological predecessor within the range. An author filter
//! narrows which commits are yielded but never changes which commit a
//! yielded commit is paired with: elapsed-time computation must see the
//! unfiltered chronological order.

use crate::commit::Commit;
use crate::error::GitError;
use crate::history::History;
use tracing::debug;

/// A commit paired with its chronological predecessor in the walked
/// range (`None` for the first commit in the range)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// The commit being yielded
    pub commit: Commit,
    /// Its immediate predecessor in the unfiltered chronological order
    pub predecessor: Option<Commit>,
}

/// A finite, oldest-first sequence of walk entries
///
/// Produced once per [`walk`] invocation; re-walking re-resolves the
/// range from scratch.
#[derive(Debug)]
pub struct Walk {
    entries: std::vec::IntoIter<WalkEntry>,
}

impl Iterator for Walk {
    type Item = WalkEntry;

    fn next(&mut self) -> Option<WalkEntry> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for Walk {}

/// Walk the commits in range `(start, end]`, oldest first
///
/// `end` defaults to HEAD; an absent `start` walks the full history up
/// to `end`. With an author filter only commits whose author email
/// matches exactly are yielded, but each yielded commit keeps the
/// predecessor it has in the unfiltered order.
///
/// # Errors
///
/// Returns [`GitError::InvalidReference`] if either revision fails to
/// resolve, and [`GitError::InvalidRange`] if `start` resolves but is
/// not an ancestor of (or equal to) `end`.
pub fn walk<H: History>(
    history: &H,
    start: Option<&str>,
    end: Option<&str>,
    author_email: Option<&str>,
) -> Result<Walk, GitError> {
    let end_sha = match end {
        Some(rev) => history.resolve(rev)?,
        None => history.head()?,
    };

    // Newest first, as the underlying history enumerates
    let mut commits = history.commits_upto(&end_sha)?;

    if let Some(rev) = start {
        let start_sha = history.resolve(rev)?;
        let boundary = commits
            .iter()
            .position(|c| c.sha == start_sha)
            .ok_or(GitError::InvalidRange {
                start: start_sha,
                end: end_sha.clone(),
            })?;
        commits.truncate(boundary);
    }

    // Oldest first, so predecessors and elapsed time read forward
    commits.reverse();

    let mut entries = Vec::with_capacity(commits.len());
    let mut predecessor: Option<Commit> = None;
    for commit in commits {
        let yielded = author_email.is_none_or(|email| commit.authored_by(email));
        if yielded {
            entries.push(WalkEntry {
                commit: commit.clone(),
                predecessor: predecessor.clone(),
            });
        }
        predecessor = Some(commit);
    }

    debug!(
        end = %end_sha,
        start = start.unwrap_or("<root>"),
        yielded = entries.len(),
        "resolved walk range"
    );

    Ok(Walk {
        entries: entries.into_iter(),
    })
}
