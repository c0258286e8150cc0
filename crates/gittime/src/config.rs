//! Command-line configuration for gittime
//!
//! Arguments mirror the interactive workflow: a repository to inspect,
//! an optional revision range, and an optional author filter, plus the
//! usual logging knobs.

use clap::Parser;

/// Estimate programming time with prompts of git metadata
#[derive(Parser, Debug, Clone)]
#[command(name = "gittime")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Repository clone URL or local path
    ///
    /// Remote URLs are cloned bare into a temporary directory that is
    /// removed when the run finishes. Local paths are opened in place
    /// (the repository containing the path is discovered).
    pub repository: String,

    /// Revision to start after, like HEAD~10 or d7c7c04
    ///
    /// The start revision itself is not estimated: the walked range is
    /// (start, end]. Omit to walk from the first commit.
    pub start: Option<String>,

    /// Revision to stop at, like HEAD~2 or 8dfa01d (defaults to HEAD)
    pub end: Option<String>,

    /// Only prompt for commits authored by this email address
    ///
    /// Skipped commits still anchor elapsed-time defaults for the
    /// commits that follow them.
    #[arg(short, long, value_name = "EMAIL", env = "GITTIME_USER")]
    pub user: Option<String>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so prompts on stdout stay clean.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Whether the repository argument names a remote to clone rather
    /// than a local path
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.repository.contains("://") || self.repository.starts_with("git@")
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}
