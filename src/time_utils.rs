// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time and duration formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Split a duration in seconds into (hours, minutes, seconds) components.
///
/// The duration is truncated toward zero before splitting; the summary
/// display only shows whole seconds.
pub fn duration_components(duration_seconds: f64) -> (i64, i64, i64) {
    let total = duration_seconds as i64;
    (total / 3600, (total % 3600) / 60, (total % 3600) % 60)
}

/// Format a duration as a zero-padded `HH : MM : SS` string.
pub fn format_duration(duration_seconds: f64) -> String {
    let (hours, minutes, seconds) = duration_components(duration_seconds);
    format!("{:02} : {:02} : {:02}", hours, minutes, seconds)
}

/// Format a duration as a spoken sentence fragment, e.g. "1 hour, 5 minutes".
///
/// Zero-valued components are skipped; a zero duration yields an empty
/// string. Intended for accessibility labels.
pub fn format_duration_spoken(duration_seconds: f64) -> String {
    let (hours, minutes, seconds) = duration_components(duration_seconds);

    let mut parts: Vec<String> = Vec::new();
    for (value, singular, plural) in [
        (hours, "hour", "hours"),
        (minutes, "minute", "minutes"),
        (seconds, "second", "seconds"),
    ] {
        if value != 0 {
            let unit = if value == 1 { singular } else { plural };
            parts.push(format!("{} {}", value, unit));
        }
    }

    parts.join(", ")
}
