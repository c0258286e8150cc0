// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gittime-estimate: Duration handling and the estimation session
//!
//! This library crate holds the stateful heart of gittime: a session
//! that walks a commit range, presents each commit with a default time
//! estimate (elapsed time since its predecessor, or a fixed fallback
//! for the first commit), accepts a human override, and accumulates a
//! running total. Duration formatting and parsing for the prompt
//! round-trip live here too.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use gittime_estimate::{SessionOptions, start_session};
//! use gittime_git::GitRepo;
//!
//! let repo = GitRepo::discover(".").expect("open repo");
//! let mut session =
//!     start_session(&repo, None, None, None, SessionOptions::default()).expect("start");
//!
//! while let Some(prompt) = session.current() {
//!     println!("{}: {}", prompt.commit.short_sha(), prompt.commit.subject());
//!     session.submit("").expect("accept default");
//! }
//! println!("total: {:?}", session.running_total());
//! ```

pub mod duration;
pub mod error;
pub mod session;

pub use duration::{format_approx, format_compact, parse_duration};
pub use error::{ParseError, SessionError};
pub use session::{EstimateRecord, EstimationSession, Prompt, SessionOptions, start_session};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::duration::{format_approx, format_compact, parse_duration};
    pub use crate::error::{ParseError, SessionError};
    pub use crate::session::{
        EstimateRecord, EstimationSession, Prompt, SessionOptions, start_session,
    };
}
