// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Compact duration formatting and parsing
//!
//! Defaults shown in a prompt must survive a round trip: a user who
//! accepts "1h29m" by retyping it should get what was offered. So
//! [`format_compact`] renders only adjacent units, and
//! [`parse_duration`] accepts the same grammar plus a bare decimal
//! number of hours (".5" is 30 minutes), matching what people type at
//! an "estimate hours spent" prompt.

use crate::error::ParseError;
use chrono::TimeDelta;

/// Render a duration as its largest two non-zero adjacent units
///
/// Negative durations are clamped to zero.
///
/// ```
/// use chrono::TimeDelta;
/// use gittime_estimate::format_compact;
///
/// assert_eq!(format_compact(TimeDelta::seconds(3600)), "1h");
/// assert_eq!(format_compact(TimeDelta::seconds(89)), "1m29s");
/// assert_eq!(format_compact(TimeDelta::zero()), "0s");
/// ```
#[must_use]
pub fn format_compact(duration: TimeDelta) -> String {
    let total = duration.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        if minutes > 0 {
            format!("{hours}h{minutes}m")
        } else {
            format!("{hours}h")
        }
    } else if minutes > 0 {
        if seconds > 0 {
            format!("{minutes}m{seconds}s")
        } else {
            format!("{minutes}m")
        }
    } else {
        format!("{seconds}s")
    }
}

/// Render a duration loosely, for elapsed-time display
///
/// Rounds to whichever single unit reads naturally: "29s", "45m",
/// "2.5h", "3d". Not parseable back; use [`format_compact`] for
/// anything the user may echo into the prompt.
#[must_use]
pub fn format_approx(duration: TimeDelta) -> String {
    let secs = duration.num_seconds().max(0);
    if secs < 48 {
        format!("{secs}s")
    } else if secs < 48 * 60 {
        format!("{:.0}m", secs as f64 / 60.0)
    } else if secs < 22 * 3600 {
        format!("{:.1}h", secs as f64 / 3600.0)
    } else {
        format!("{}d", secs / 86_400)
    }
}

/// Parse a human estimate: compact units or a bare number of hours
///
/// Accepts `"3h"`, `"29m"`, `"1m30s"`, `"1h30m"` (units in descending
/// order, each at most once) or a bare non-negative decimal interpreted
/// as hours (`".5"` is 30 minutes).
///
/// # Errors
///
/// Returns [`ParseError`] when the text matches neither grammar. Blank
/// input is the caller's "accept the default" signal and is rejected
/// here like any other unparseable text.
pub fn parse_duration(text: &str) -> Result<TimeDelta, ParseError> {
    let err = || ParseError {
        input: text.to_string(),
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(err());
    }

    // Bare number of hours, e.g. "2", "1.5", ".5"
    if let Ok(hours) = trimmed.parse::<f64>() {
        if hours.is_finite() && hours >= 0.0 {
            #[allow(clippy::cast_possible_truncation)]
            let seconds = (hours * 3600.0).round() as i64;
            // try_seconds rejects values beyond TimeDelta's range
            return TimeDelta::try_seconds(seconds).ok_or_else(err);
        }
        return Err(err());
    }

    // Unit-suffixed segments, descending and unrepeated: 1h30m, 29m, 1m30s
    let mut total: i64 = 0;
    let mut digits = String::new();
    let mut last_rank = 0;
    for ch in trimmed.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        let (factor, rank) = match ch {
            'h' => (3600, 1),
            'm' => (60, 2),
            's' => (1, 3),
            _ => return Err(err()),
        };
        if digits.is_empty() || rank <= last_rank {
            return Err(err());
        }
        let value: i64 = digits.parse().map_err(|_| err())?;
        total = value
            .checked_mul(factor)
            .and_then(|v| total.checked_add(v))
            .ok_or_else(err)?;
        digits.clear();
        last_rank = rank;
    }
    // Trailing digits without a unit ("1h30") are ambiguous
    if !digits.is_empty() {
        return Err(err());
    }
    // i64 seconds can still exceed TimeDelta's millisecond-backed range
    TimeDelta::try_seconds(total).ok_or_else(err)
}

/// Serde adapters representing a `TimeDelta` as whole seconds
///
/// chrono's serde support covers timestamps but not `TimeDelta`, so
/// estimate records carry durations as seconds.
pub mod serde_seconds {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize a duration as its whole-second count
    pub fn serialize<S: Serializer>(value: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(value.num_seconds())
    }

    /// Deserialize a whole-second count into a duration
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TimeDelta, D::Error> {
        i64::deserialize(deserializer).map(TimeDelta::seconds)
    }
}

/// Serde adapters for optional durations as whole seconds
pub mod serde_opt_seconds {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize an optional duration as optional whole seconds
    pub fn serialize<S: Serializer>(
        value: &Option<TimeDelta>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(delta) => serializer.serialize_some(&delta.num_seconds()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize optional whole seconds into an optional duration
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<TimeDelta>, D::Error> {
        Ok(Option::<i64>::deserialize(deserializer)?.map(TimeDelta::seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_format_compact_single_units() {
        assert_eq!(format_compact(TimeDelta::hours(1)), "1h");
        assert_eq!(format_compact(TimeDelta::minutes(29)), "29m");
        assert_eq!(format_compact(TimeDelta::seconds(42)), "42s");
        assert_eq!(format_compact(TimeDelta::zero()), "0s");
    }

    #[test]
    fn test_format_compact_two_units() {
        assert_eq!(format_compact(TimeDelta::seconds(89)), "1m29s");
        assert_eq!(format_compact(TimeDelta::minutes(181)), "3h1m");
        assert_eq!(format_compact(TimeDelta::seconds(3 * 3600 + 60)), "3h1m");
    }

    #[test]
    fn test_format_compact_drops_third_unit() {
        // 1h1m1s renders the two largest adjacent units only
        assert_eq!(format_compact(TimeDelta::seconds(3661)), "1h1m");
        // a lone trailing second after a whole hour is dropped
        assert_eq!(format_compact(TimeDelta::seconds(3601)), "1h");
    }

    #[test]
    fn test_format_compact_clamps_negative() {
        assert_eq!(format_compact(TimeDelta::seconds(-30)), "0s");
    }

    #[test]
    fn test_format_approx_thresholds() {
        assert_eq!(format_approx(TimeDelta::seconds(29)), "29s");
        assert_eq!(format_approx(TimeDelta::minutes(45)), "45m");
        assert_eq!(format_approx(TimeDelta::minutes(150)), "2.5h");
        assert_eq!(format_approx(TimeDelta::hours(30)), "1d");
    }

    #[test]
    fn test_parse_bare_number_is_hours() {
        assert_eq!(parse_duration(".5").unwrap(), TimeDelta::minutes(30));
        assert_eq!(parse_duration("2").unwrap(), TimeDelta::hours(2));
        assert_eq!(parse_duration("1.25").unwrap(), TimeDelta::minutes(75));
        assert_eq!(parse_duration("0").unwrap(), TimeDelta::zero());
    }

    #[test]
    fn test_parse_compact_units() {
        assert_eq!(parse_duration("1h").unwrap(), TimeDelta::seconds(3600));
        assert_eq!(parse_duration("29m").unwrap(), TimeDelta::minutes(29));
        assert_eq!(parse_duration("1m30s").unwrap(), TimeDelta::seconds(90));
        assert_eq!(parse_duration("1h30m").unwrap(), TimeDelta::minutes(90));
        assert_eq!(parse_duration("2h0m").unwrap(), TimeDelta::hours(2));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_duration(" 3h ").unwrap(), TimeDelta::hours(3));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["xyz", "h", "1x", "m30", "1h30", "-2", "--", "1h1h", "30s1m", ""] {
            let result = parse_duration(input);
            assert!(result.is_err(), "{input:?} should not parse");
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_without_panicking() {
        // Grammar-valid, but past what a duration can represent
        for input in ["9999999999999999s", "1e200", "99999999999999h"] {
            let err = parse_duration(input).unwrap_err();
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn test_parse_error_carries_input() {
        let err = parse_duration("xyz").unwrap_err();
        assert_eq!(err.input, "xyz");
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_serde_seconds_roundtrip() {
        #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
        struct Wrapper {
            #[serde(with = "serde_seconds")]
            chosen: TimeDelta,
            #[serde(with = "serde_opt_seconds")]
            elapsed: Option<TimeDelta>,
        }

        let wrapper = Wrapper {
            chosen: TimeDelta::minutes(90),
            elapsed: None,
        };
        let json = serde_json::to_string(&wrapper).expect("serialize");
        assert_eq!(json, r#"{"chosen":5400,"elapsed":null}"#);
        let back: Wrapper = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, wrapper);
    }
}
