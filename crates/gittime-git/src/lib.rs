// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gittime-git: Repository access and commit walking for gittime
//!
//! This library crate wraps `git2` behind a narrow [`History`] trait so
//! the estimation layer can walk commit ranges, pair each commit with
//! its chronological predecessor, and summarize per-file line changes
//! without caring whether the history is a real repository or a fake.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use gittime_git::{GitRepo, walk};
//!
//! let repo = GitRepo::discover(".").expect("open repo");
//! let entries = walk(&repo, None, None, None).expect("walk range");
//!
//! for entry in entries {
//!     println!("{} - {}", entry.commit.short_sha(), entry.commit.subject());
//! }
//! ```

pub mod commit;
pub mod diff;
pub mod error;
pub mod history;
pub mod repo;
pub mod walk;

pub use commit::Commit;
pub use diff::{DiffSummary, FileDelta};
pub use error::GitError;
pub use history::{History, MemoryHistory};
pub use repo::GitRepo;
pub use walk::{Walk, WalkEntry, walk};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::Commit;
    pub use crate::diff::{DiffSummary, FileDelta};
    pub use crate::error::GitError;
    pub use crate::history::History;
    pub use crate::repo::GitRepo;
    pub use crate::walk::{Walk, WalkEntry, walk};
}
