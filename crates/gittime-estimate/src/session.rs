// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The estimation session
//!
//! An [`EstimationSession`] consumes a walk one commit at a time:
//! present a commit with a default estimate, accept the human's answer
//! via [`EstimationSession::submit`], accumulate the running total,
//! move on. The session does no I/O of its own; rendering the current
//! [`Prompt`] and collecting input belong to the caller, which is what
//! makes the whole loop drivable by canned inputs in tests.

use crate::duration::{parse_duration, serde_opt_seconds, serde_seconds};
use crate::error::SessionError;
use chrono::TimeDelta;
use gittime_git::{Commit, DiffSummary, History, Walk, WalkEntry, walk};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tunables for a session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Default estimate for a commit with no predecessor, where there
    /// is no elapsed-time signal to suggest anything better
    pub first_commit_default: TimeDelta,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            first_commit_default: TimeDelta::hours(3),
        }
    }
}

/// Everything the caller needs to render one commit's prompt
#[derive(Debug, Clone)]
pub struct Prompt {
    /// The commit being estimated
    pub commit: Commit,
    /// Time since the chronological predecessor; `None` means there is
    /// no previous commit in the walked range
    pub elapsed: Option<TimeDelta>,
    /// File-level line changes against the predecessor (or the empty
    /// tree when there is none)
    pub summary: DiffSummary,
    /// The estimate used when the human submits blank input
    pub default: TimeDelta,
}

impl Prompt {
    /// Whether the default is the fixed first-commit fallback rather
    /// than an observed elapsed time
    #[must_use]
    pub fn default_is_fallback(&self) -> bool {
        self.elapsed.is_none()
    }
}

/// One finalized per-commit estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRecord {
    /// The estimated commit
    pub commit: Commit,
    /// Elapsed time since the predecessor, if there was one
    #[serde(with = "serde_opt_seconds")]
    pub elapsed: Option<TimeDelta>,
    /// Diff summary shown alongside the prompt
    pub summary: DiffSummary,
    /// The default estimate that was offered
    #[serde(with = "serde_seconds")]
    pub default: TimeDelta,
    /// The estimate the human confirmed or supplied
    #[serde(with = "serde_seconds")]
    pub chosen: TimeDelta,
    /// Running total after this record was applied
    #[serde(with = "serde_seconds")]
    pub total_after: TimeDelta,
}

/// Walks a commit range and accumulates human time estimates
///
/// Create one with [`start_session`] (or [`EstimationSession::start`]
/// from a pre-built walk), then alternate [`EstimationSession::current`]
/// and [`EstimationSession::submit`] until [`EstimationSession::is_done`].
/// The running total and the finalized records are readable at any
/// point, so a caller that abandons the loop mid-walk still has valid
/// partial results.
pub struct EstimationSession<'h, H: History> {
    history: &'h H,
    remaining: Walk,
    current: Option<Prompt>,
    total: TimeDelta,
    records: Vec<EstimateRecord>,
    options: SessionOptions,
}

/// Resolve a range and start estimating it
///
/// Convenience wrapper combining [`walk`] and
/// [`EstimationSession::start`].
///
/// # Errors
///
/// Range and revision errors surface here, before any commit is
/// presented; see [`walk`].
pub fn start_session<'h, H: History>(
    history: &'h H,
    start: Option<&str>,
    end: Option<&str>,
    author_email: Option<&str>,
    options: SessionOptions,
) -> Result<EstimationSession<'h, H>, SessionError> {
    let entries = walk(history, start, end, author_email)?;
    EstimationSession::start(history, entries, options)
}

impl<'h, H: History> EstimationSession<'h, H> {
    /// Start a session over an already-resolved walk
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Git`] if the first commit's diff cannot
    /// be computed.
    pub fn start(
        history: &'h H,
        entries: Walk,
        options: SessionOptions,
    ) -> Result<Self, SessionError> {
        let mut session = Self {
            history,
            remaining: entries,
            current: None,
            total: TimeDelta::zero(),
            records: Vec::new(),
            options,
        };
        session.advance()?;
        Ok(session)
    }

    /// Compute the prompt for the next walk entry, or become Done
    fn advance(&mut self) -> Result<(), SessionError> {
        self.current = match self.remaining.next() {
            Some(entry) => Some(self.present(entry)?),
            None => None,
        };
        Ok(())
    }

    fn present(&self, entry: WalkEntry) -> Result<Prompt, SessionError> {
        let WalkEntry {
            commit,
            predecessor,
        } = entry;

        let elapsed = predecessor
            .as_ref()
            .map(|prev| commit.timestamp - prev.timestamp);
        let summary = self
            .history
            .diff(predecessor.as_ref().map(|p| p.sha.as_str()), &commit.sha)?;
        // Absent better information, the gap between commits
        // approximates the time spent on this one.
        let default = elapsed.unwrap_or(self.options.first_commit_default);

        debug!(sha = %commit.short_sha(), ?elapsed, "presenting commit");
        Ok(Prompt {
            commit,
            elapsed,
            summary,
            default,
        })
    }

    /// The presentation payload for the commit awaiting an estimate
    ///
    /// `None` once the session is done.
    #[must_use]
    pub fn current(&self) -> Option<&Prompt> {
        self.current.as_ref()
    }

    /// Whether every commit in the walk has been estimated
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.current.is_none()
    }

    /// Apply the human's answer for the current commit
    ///
    /// Blank input accepts the default; anything else must parse as a
    /// duration. On success the record is finalized, the session moves
    /// to the next commit (or Done), and the new running total is
    /// returned.
    ///
    /// # Errors
    ///
    /// - [`SessionError::SessionComplete`] if the session is done.
    /// - [`SessionError::Parse`] for unparseable input; the current
    ///   commit is unchanged and the caller should re-prompt.
    /// - [`SessionError::Git`] if the next commit's diff fails.
    pub fn submit(&mut self, input: &str) -> Result<TimeDelta, SessionError> {
        let Some(prompt) = self.current.as_ref() else {
            return Err(SessionError::SessionComplete);
        };

        let chosen = if input.trim().is_empty() {
            prompt.default
        } else {
            parse_duration(input)?
        };

        // Parsing succeeded; the transition is committed from here on.
        let Some(prompt) = self.current.take() else {
            return Err(SessionError::SessionComplete);
        };
        self.total = self.total + chosen;
        self.records.push(EstimateRecord {
            commit: prompt.commit,
            elapsed: prompt.elapsed,
            summary: prompt.summary,
            default: prompt.default,
            chosen,
            total_after: self.total,
        });
        self.advance()?;
        Ok(self.total)
    }

    /// Cumulative total of all finalized estimates so far
    #[must_use]
    pub fn running_total(&self) -> TimeDelta {
        self.total
    }

    /// The finalized records, oldest commit first
    #[must_use]
    pub fn records(&self) -> &[EstimateRecord] {
        &self.records
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use gittime_git::MemoryHistory;
    use proptest::prelude::*;

    fn history_of(commits: usize) -> MemoryHistory {
        let mut history = MemoryHistory::new();
        for i in 0..commits {
            let contents = format!("line {i}\n");
            history.add_commit(
                Commit {
                    sha: format!("{i:040x}"),
                    message: format!("commit {i}"),
                    author: "Author".to_string(),
                    author_email: "author@example.com".to_string(),
                    timestamp: Utc.timestamp_opt(1_400_000_000 + i as i64 * 300, 0).unwrap(),
                    parents: vec![],
                },
                &[("f", contents.as_str())],
            );
        }
        history
    }

    proptest! {
        /// Property: the final running total is exactly the sum of the
        /// chosen estimates across all finalized records
        #[test]
        fn prop_total_is_sum_of_chosen(minutes in proptest::collection::vec(0i64..600, 1..10)) {
            let history = history_of(minutes.len());
            let mut session =
                start_session(&history, None, None, None, SessionOptions::default())
                    .expect("start");

            for m in &minutes {
                session.submit(&format!("{m}m")).expect("estimate");
            }

            prop_assert!(session.is_done());
            let expected: i64 = minutes.iter().sum();
            prop_assert_eq!(session.running_total().num_minutes(), expected);

            let record_sum: i64 = session.records().iter().map(|r| r.chosen.num_minutes()).sum();
            prop_assert_eq!(record_sum, expected);
        }

        /// Property: the running total never decreases as records are applied
        #[test]
        fn prop_total_monotonically_non_decreasing(
            minutes in proptest::collection::vec(0i64..600, 1..10)
        ) {
            let history = history_of(minutes.len());
            let mut session =
                start_session(&history, None, None, None, SessionOptions::default())
                    .expect("start");

            let mut last = TimeDelta::zero();
            for m in &minutes {
                let total = session.submit(&format!("{m}m")).expect("estimate");
                prop_assert!(total >= last);
                last = total;
            }
        }

        /// Property: every non-first record's elapsed matches the
        /// timestamp gap to its chronological predecessor
        #[test]
        fn prop_elapsed_matches_timestamp_gaps(count in 2usize..8) {
            let history = history_of(count);
            let mut session =
                start_session(&history, None, None, None, SessionOptions::default())
                    .expect("start");
            while !session.is_done() {
                session.submit("").expect("accept default");
            }

            let records = session.records();
            prop_assert!(records[0].elapsed.is_none());
            for window in records.windows(2) {
                let gap = window[1].commit.timestamp - window[0].commit.timestamp;
                prop_assert_eq!(window[1].elapsed, Some(gap));
            }
        }
    }
}
