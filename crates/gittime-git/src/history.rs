// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The narrow seam between the walker/session and a concrete repository
//!
//! [`History`] is the minimal capability set the estimation pipeline
//! needs: revision resolution, commit enumeration with parent links,
//! and tree diffing. [`crate::GitRepo`] implements it over git2;
//! [`MemoryHistory`] implements it over an in-memory linear history so
//! the walker and the estimation session can be tested without a real
//! repository.

use crate::commit::Commit;
use crate::diff::{DiffSummary, FileDelta};
use crate::error::GitError;
use std::collections::{BTreeMap, HashMap};

/// Read-only access to a commit history
pub trait History {
    /// Resolve a revision string (SHA, short SHA, branch name) to a
    /// full commit SHA
    ///
    /// # Errors
    ///
    /// Returns [`GitError::InvalidReference`] if the revision does not
    /// resolve to a commit.
    fn resolve(&self, revision: &str) -> Result<String, GitError>;

    /// SHA of the commit HEAD points at
    ///
    /// # Errors
    ///
    /// Returns [`GitError`] if HEAD cannot be resolved.
    fn head(&self) -> Result<String, GitError>;

    /// All commits reachable from `sha`, newest first, with parent links
    ///
    /// # Errors
    ///
    /// Returns [`GitError::UnknownCommit`] if `sha` is not in the
    /// history, or [`GitError`] for underlying repository failures.
    fn commits_upto(&self, sha: &str) -> Result<Vec<Commit>, GitError>;

    /// Summarize line changes between a commit and an optional predecessor
    ///
    /// With no predecessor the commit is diffed against the empty tree,
    /// so every file in its tree counts as fully added. Unchanged paths
    /// are omitted from the result.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::UnknownCommit`] if either SHA is not in the
    /// history, or [`GitError`] for underlying repository failures.
    fn diff(&self, predecessor: Option<&str>, sha: &str) -> Result<DiffSummary, GitError>;
}

/// An in-memory linear history
///
/// Commits are appended in chronological order; each carries a full
/// file snapshot (path to contents) so diffs can be computed between
/// any two commits. Intended for tests and benchmarks of the walking
/// and estimation layers.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    commits: Vec<(Commit, BTreeMap<String, String>)>,
}

impl MemoryHistory {
    /// Create an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commit with its full file snapshot
    ///
    /// If the commit has no explicit parents, it is chained to the
    /// previously appended commit.
    pub fn add_commit(&mut self, mut commit: Commit, files: &[(&str, &str)]) {
        if commit.parents.is_empty() {
            if let Some((prev, _)) = self.commits.last() {
                commit.parents = vec![prev.sha.clone()];
            }
        }
        let snapshot = files
            .iter()
            .map(|(path, contents)| ((*path).to_string(), (*contents).to_string()))
            .collect();
        self.commits.push((commit, snapshot));
    }

    fn position(&self, sha: &str) -> Option<usize> {
        self.commits.iter().position(|(c, _)| c.sha == sha)
    }

    fn snapshot(&self, sha: &str) -> Result<&BTreeMap<String, String>, GitError> {
        self.position(sha)
            .map(|idx| &self.commits[idx].1)
            .ok_or_else(|| GitError::UnknownCommit {
                sha: sha.to_string(),
            })
    }
}

/// Count inserted and removed lines between two versions of a file
///
/// Uses common-line counting: lines present in both versions (with
/// multiplicity) are unchanged, the rest are insertions or deletions.
fn line_delta(old: Option<&str>, new: Option<&str>) -> (usize, usize) {
    let old_lines: Vec<&str> = old.map(|s| s.lines().collect()).unwrap_or_default();
    let new_lines: Vec<&str> = new.map(|s| s.lines().collect()).unwrap_or_default();

    let mut remaining: HashMap<&str, usize> = HashMap::new();
    for &line in &old_lines {
        *remaining.entry(line).or_default() += 1;
    }
    let mut common = 0;
    for &line in &new_lines {
        if let Some(count) = remaining.get_mut(line) {
            if *count > 0 {
                *count -= 1;
                common += 1;
            }
        }
    }
    (new_lines.len() - common, old_lines.len() - common)
}

impl History for MemoryHistory {
    fn resolve(&self, revision: &str) -> Result<String, GitError> {
        if revision == "HEAD" {
            return self.head();
        }
        // Full SHA, or a unique prefix of one
        let mut matches = self
            .commits
            .iter()
            .filter(|(c, _)| c.sha.starts_with(revision) && !revision.is_empty());
        match (matches.next(), matches.next()) {
            (Some((commit, _)), None) => Ok(commit.sha.clone()),
            _ => Err(GitError::InvalidReference {
                reference: revision.to_string(),
            }),
        }
    }

    fn head(&self) -> Result<String, GitError> {
        self.commits
            .last()
            .map(|(c, _)| c.sha.clone())
            .ok_or_else(|| GitError::InvalidReference {
                reference: "HEAD".to_string(),
            })
    }

    fn commits_upto(&self, sha: &str) -> Result<Vec<Commit>, GitError> {
        let pos = self.position(sha).ok_or_else(|| GitError::UnknownCommit {
            sha: sha.to_string(),
        })?;
        Ok(self.commits[..=pos]
            .iter()
            .rev()
            .map(|(c, _)| c.clone())
            .collect())
    }

    fn diff(&self, predecessor: Option<&str>, sha: &str) -> Result<DiffSummary, GitError> {
        let new_snapshot = self.snapshot(sha)?;
        let old_snapshot = match predecessor {
            Some(prev) => Some(self.snapshot(prev)?),
            None => None,
        };

        let mut paths: Vec<&String> = new_snapshot.keys().collect();
        if let Some(old) = old_snapshot {
            for path in old.keys() {
                if !new_snapshot.contains_key(path) {
                    paths.push(path);
                }
            }
        }

        let deltas = paths
            .into_iter()
            .map(|path| {
                let old = old_snapshot.and_then(|s| s.get(path)).map(String::as_str);
                let new = new_snapshot.get(path).map(String::as_str);
                let (insertions, deletions) = line_delta(old, new);
                FileDelta {
                    path: path.clone(),
                    insertions,
                    deletions,
                }
            })
            .collect();

        Ok(DiffSummary::from_deltas(deltas))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use similar_asserts::assert_eq;

    fn commit(sha: &str, minute: u32) -> Commit {
        Commit {
            sha: sha.to_string(),
            message: format!("commit {sha}"),
            author: "Phil".to_string(),
            author_email: "phil@example.com".to_string(),
            timestamp: Utc.with_ymd_and_hms(2014, 6, 2, 21, minute, 0).unwrap(),
            parents: vec![],
        }
    }

    fn sha(ch: char) -> String {
        std::iter::repeat(ch).take(40).collect()
    }

    fn two_commit_history() -> MemoryHistory {
        let mut history = MemoryHistory::new();
        history.add_commit(
            commit(&sha('a'), 0),
            &[("main.py", "one\ntwo\nthree\n"), ("README", "docs\n")],
        );
        history.add_commit(
            commit(&sha('b'), 2),
            &[("main.py", "one\ntwo\nfour\nfive\n"), ("README", "docs\n")],
        );
        history
    }

    #[test]
    fn test_head_is_last_commit() {
        let history = two_commit_history();
        assert_eq!(history.head().unwrap(), sha('b'));
    }

    #[test]
    fn test_head_of_empty_history_fails() {
        let history = MemoryHistory::new();
        assert!(matches!(
            history.head(),
            Err(GitError::InvalidReference { .. })
        ));
    }

    #[test]
    fn test_resolve_full_and_prefix() {
        let history = two_commit_history();
        assert_eq!(history.resolve(&sha('a')).unwrap(), sha('a'));
        assert_eq!(history.resolve("bbbb").unwrap(), sha('b'));
        assert_eq!(history.resolve("HEAD").unwrap(), sha('b'));
    }

    #[test]
    fn test_resolve_unknown_fails() {
        let history = two_commit_history();
        assert!(matches!(
            history.resolve("cccc"),
            Err(GitError::InvalidReference { .. })
        ));
    }

    #[test]
    fn test_commits_upto_newest_first_with_parents() {
        let history = two_commit_history();
        let commits = history.commits_upto(&sha('b')).unwrap();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].sha, sha('b'));
        assert_eq!(commits[1].sha, sha('a'));
        assert_eq!(commits[0].parents, vec![sha('a')]);
        assert!(commits[1].is_root());
    }

    #[test]
    fn test_diff_against_empty_tree_counts_all_lines_added() {
        let history = two_commit_history();
        let summary = history.diff(None, &sha('a')).unwrap();
        assert_eq!(summary.insertions, 4);
        assert_eq!(summary.deletions, 0);
        assert_eq!(summary.files_changed(), 2);
    }

    #[test]
    fn test_diff_between_commits_omits_unchanged_files() {
        let history = two_commit_history();
        let summary = history.diff(Some(&sha('a')), &sha('b')).unwrap();
        // main.py: "three" replaced by "four" and "five"; README untouched
        assert_eq!(summary.insertions, 2);
        assert_eq!(summary.deletions, 1);
        assert_eq!(summary.files_changed(), 1);
        assert_eq!(summary.files[0].path, "main.py");
    }

    #[test]
    fn test_diff_counts_deleted_files() {
        let mut history = two_commit_history();
        history.add_commit(commit(&sha('c'), 9), &[("main.py", "one\ntwo\nfour\nfive\n")]);
        let summary = history.diff(Some(&sha('b')), &sha('c')).unwrap();
        assert_eq!(summary.insertions, 0);
        assert_eq!(summary.deletions, 1);
        assert_eq!(summary.files[0].path, "README");
    }

    #[test]
    fn test_line_delta_symmetric_cases() {
        assert_eq!(line_delta(None, Some("a\nb\n")), (2, 0));
        assert_eq!(line_delta(Some("a\nb\n"), None), (0, 2));
        assert_eq!(line_delta(Some("a\nb\n"), Some("a\nb\n")), (0, 0));
        assert_eq!(line_delta(Some("a\nb\n"), Some("a\nc\n")), (1, 1));
    }
}
