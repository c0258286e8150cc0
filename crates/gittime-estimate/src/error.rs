// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gittime-estimate

use gittime_git::GitError;
use thiserror::Error;

/// A human-supplied estimate could not be understood
///
/// Recoverable: the caller should show the message and re-prompt for
/// the same commit. The session state is unchanged by a failed parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{input}\" doesn't look like a duration or a number of hours")]
pub struct ParseError {
    /// The text that failed to parse
    pub input: String,
}

/// Errors from driving an estimation session
#[derive(Debug, Error)]
pub enum SessionError {
    /// The human-supplied estimate could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An operation was invoked after the session reached Done
    #[error("estimation session is complete; no commits remain")]
    SessionComplete,

    /// The underlying history failed while computing a diff or walking
    #[error(transparent)]
    Git(#[from] GitError),
}
