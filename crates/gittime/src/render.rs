// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Terminal rendering for the estimation loop
//!
//! Pure text templating: every function returns a `String` for the
//! caller to print, so the whole presentation layer is testable by
//! string comparison.

use chrono::{DateTime, TimeDelta, Utc};
use gittime_estimate::{ParseError, Prompt, format_approx, format_compact};
use gittime_git::FileDelta;

const INDENTATION: usize = 2;
const BULLET: char = '*';

fn indent(message: &str) -> String {
    let spaces = " ".repeat(INDENTATION);
    message
        .lines()
        .map(|line| format!("{spaces}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bullet(message: &str) -> String {
    let mut lines = message.lines();
    let first = lines.next().unwrap_or("");
    let rest = lines.collect::<Vec<_>>().join("\n");
    if rest.is_empty() {
        format!("{BULLET} {first}")
    } else {
        format!("{BULLET} {first}\n{}", indent(&rest))
    }
}

fn nice_time(time: DateTime<Utc>) -> String {
    time.format("%A, %b %d at %X").to_string()
}

fn file_change(delta: &FileDelta) -> String {
    format!("+{} -{} {}", delta.insertions, delta.deletions, delta.path)
}

/// The block shown above each commit's prompt: running total so far,
/// then a bulleted summary of the commit and its line changes
#[must_use]
pub fn commit_summary(running_total: TimeDelta, prompt: &Prompt) -> String {
    let elapsed = match prompt.elapsed {
        Some(delta) => format_approx(delta),
        None => "n/a; first commit".to_string(),
    };
    let changes = prompt
        .summary
        .files
        .iter()
        .map(file_change)
        .collect::<Vec<_>>()
        .join("\n");
    let details = format!(
        "{sha} {subject}\n{when} by {author}\nElapsed since previous commit: {elapsed}\nTotal line changes: +{plus} -{minus}\n{changes}",
        sha = prompt.commit.short_sha(),
        subject = prompt.commit.subject(),
        when = nice_time(prompt.commit.timestamp),
        author = prompt.commit.author_email,
        plus = prompt.summary.insertions,
        minus = prompt.summary.deletions,
        changes = indent(&changes),
    );
    format!(
        "\nRunning total: {total}\n\n{body}\n",
        total = format_compact(running_total),
        body = bullet(&details),
    )
}

/// The input prompt, with the default the user accepts by entering
/// nothing
#[must_use]
pub fn prompt_line(prompt: &Prompt) -> String {
    format!(
        "Estimate time spent [{}]: ",
        format_compact(prompt.default)
    )
}

/// Shown when an estimate fails to parse, before re-prompting
#[must_use]
pub fn input_error(error: &ParseError) -> String {
    bullet(&format!("Input error: {error}"))
}

/// The closing line: the grand total, marked clearly when the run was
/// cancelled before every commit was estimated
#[must_use]
pub fn final_total(total: TimeDelta, complete: bool) -> String {
    if complete {
        format!("Total estimated time: {}", format_compact(total))
    } else {
        format!(
            "Estimated time so far (cancelled): {}",
            format_compact(total)
        )
    }
}
