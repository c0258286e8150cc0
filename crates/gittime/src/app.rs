// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The interactive estimation loop
//!
//! Owns the only I/O in the program: prompts on stdout, estimates read
//! from stdin, one commit at a time. All estimation state lives in
//! [`EstimationSession`]; this loop just renders prompts and feeds
//! answers back, re-prompting on parse errors and treating EOF as
//! cancellation with the partial total printed.

use crate::config::Config;
use crate::render;
use crate::workdir::Workspace;
use anyhow::Context;
use gittime_estimate::{EstimationSession, SessionError, SessionOptions, start_session};
use gittime_git::GitRepo;
use std::io::{BufRead, Write};
use tracing::info;

/// Run one full estimation pass for the configured repository
///
/// # Errors
///
/// Range and repository errors abort the run before any prompt is
/// shown. Parse errors never surface here; they are handled by
/// re-prompting.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let workspace = if config.is_remote() {
        info!(url = %config.repository, "cloning into a temporary directory");
        Workspace::clone_remote(&config.repository)?
    } else {
        Workspace::open_local(&config.repository)?
    };

    let session = start_session(
        workspace.repo(),
        config.start.as_deref(),
        config.end.as_deref(),
        config.user.as_deref(),
        SessionOptions::default(),
    )
    .context("failed to start the estimation session")?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    drive(session, &mut stdin.lock(), &mut stdout)
}

/// Drive a session over arbitrary input/output streams
///
/// Split from [`run`] so tests can feed canned input and capture the
/// transcript.
pub fn drive<R: BufRead, W: Write>(
    mut session: EstimationSession<'_, GitRepo>,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    loop {
        let Some(prompt) = session.current() else { break };
        let summary = render::commit_summary(session.running_total(), prompt);
        let ask = render::prompt_line(prompt);
        write!(output, "{summary}\n{ask}")?;
        output.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            if input.read_line(&mut line)? == 0 {
                // EOF: the user walked away; partial results are valid
                writeln!(output)?;
                writeln!(
                    output,
                    "{}",
                    render::final_total(session.running_total(), false)
                )?;
                return Ok(());
            }
            match session.submit(line.trim_end()) {
                Ok(_) => break,
                Err(SessionError::Parse(err)) => {
                    write!(output, "{}\n{ask}", render::input_error(&err))?;
                    output.flush()?;
                }
                Err(other) => return Err(other.into()),
            }
        }
    }

    writeln!(
        output,
        "\n{}",
        render::final_total(session.running_total(), true)
    )?;
    Ok(())
}
