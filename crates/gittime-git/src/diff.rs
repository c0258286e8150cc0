// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Per-commit diff summary types
//!
//! A [`DiffSummary`] holds file-level line counts for one commit's diff
//! against its chronological predecessor (or against the empty tree for
//! a commit with no predecessor). Totals always equal the per-file sums.

use serde::{Deserialize, Serialize};

/// Line changes for a single file in a commit's diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDelta {
    /// Path to the file
    pub path: String,
    /// Number of lines added
    pub insertions: usize,
    /// Number of lines removed
    pub deletions: usize,
}

impl FileDelta {
    /// Total churn for this file (insertions + deletions)
    #[must_use]
    pub fn churn(&self) -> usize {
        self.insertions + self.deletions
    }
}

/// Summary of all line changes in one commit's diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    /// Total lines added across all files
    pub insertions: usize,
    /// Total lines removed across all files
    pub deletions: usize,
    /// Per-file changes, sorted by descending churn
    pub files: Vec<FileDelta>,
}

impl DiffSummary {
    /// Build a summary from per-file deltas
    ///
    /// Files with no line changes are dropped, the rest are sorted by
    /// descending churn, and the totals are computed from what remains,
    /// so the totals-equal-sums invariant holds by construction.
    #[must_use]
    pub fn from_deltas(mut deltas: Vec<FileDelta>) -> Self {
        deltas.retain(|d| d.churn() > 0);
        deltas.sort_by(|a, b| b.churn().cmp(&a.churn()));
        let insertions = deltas.iter().map(|d| d.insertions).sum();
        let deletions = deltas.iter().map(|d| d.deletions).sum();
        Self {
            insertions,
            deletions,
            files: deltas,
        }
    }

    /// Create an empty diff summary
    #[must_use]
    pub fn empty() -> Self {
        Self {
            insertions: 0,
            deletions: 0,
            files: Vec::new(),
        }
    }

    /// Number of files changed
    #[must_use]
    pub fn files_changed(&self) -> usize {
        self.files.len()
    }

    /// Check if the diff touched no files
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy to generate arbitrary per-file deltas, zero-churn included
    fn delta_strategy() -> impl Strategy<Value = FileDelta> {
        ("[a-z/]{1,30}\\.rs", 0usize..500, 0usize..500).prop_map(
            |(path, insertions, deletions)| FileDelta {
                path,
                insertions,
                deletions,
            },
        )
    }

    fn deltas_strategy() -> impl Strategy<Value = Vec<FileDelta>> {
        proptest::collection::vec(delta_strategy(), 0..20)
    }

    proptest! {
        /// Property: totals equal the sum over the retained per-file deltas
        #[test]
        fn prop_totals_equal_per_file_sums(deltas in deltas_strategy()) {
            let summary = DiffSummary::from_deltas(deltas);
            let insertions: usize = summary.files.iter().map(|d| d.insertions).sum();
            let deletions: usize = summary.files.iter().map(|d| d.deletions).sum();
            prop_assert_eq!(summary.insertions, insertions);
            prop_assert_eq!(summary.deletions, deletions);
        }

        /// Property: every retained delta has churn > 0
        #[test]
        fn prop_no_zero_churn_deltas(deltas in deltas_strategy()) {
            let summary = DiffSummary::from_deltas(deltas);
            for d in &summary.files {
                prop_assert!(d.churn() > 0);
            }
        }

        /// Property: retained deltas are ordered by non-increasing churn
        #[test]
        fn prop_sorted_by_descending_churn(deltas in deltas_strategy()) {
            let summary = DiffSummary::from_deltas(deltas);
            for window in summary.files.windows(2) {
                prop_assert!(window[0].churn() >= window[1].churn());
            }
        }
    }
}
