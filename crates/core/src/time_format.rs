//! Time-of-day normalization for booking submissions.
//!
//! Slot feeds and user selections arrive in several shapes (`HH:MM`,
//! `HH:MM:SS`, 12-hour `h:mm AM/PM`); the appointment service only accepts
//! `HH:MM:SS`. [`normalize_to_hms`] funnels every shape into that canonical
//! form and is idempotent on already-canonical input.

use chrono::{NaiveDate, NaiveTime};

/// Normalize a time string to `HH:MM:SS`.
///
/// Recognized forms, in order:
///
/// - `H:MM:SS` is returned unchanged
/// - 12-hour `h:mm AM/PM` (12 AM becomes 00, 12 PM stays 12, other PM
///   hours gain 12)
/// - `H:MM` gains a zero-padded hour and `:00` seconds
/// - anything else splits on `:`, zero-pads each piece, and truncates or
///   extends to three components; input without a minute component just
///   gains `:00`
///
/// Empty input yields `None`.
pub fn normalize_to_hms(input: &str) -> Option<String> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if NaiveTime::parse_from_str(s, "%H:%M:%S").is_ok() {
        return Some(s.to_string());
    }

    if let Ok(time) = NaiveTime::parse_from_str(&s.to_uppercase(), "%I:%M %p") {
        return Some(time.format("%H:%M:%S").to_string());
    }

    if let Ok(time) = NaiveTime::parse_from_str(s, "%H:%M") {
        return Some(time.format("%H:%M:%S").to_string());
    }

    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() >= 2 {
        if let Ok(hours) = parts[0].trim().parse::<u32>() {
            let minutes = pad2(parts[1]);
            let seconds = parts.get(2).map(|p| pad2(p)).unwrap_or_else(|| "00".into());
            return Some(format!("{hours:02}:{minutes}:{seconds}"));
        }
    }

    Some(format!("{s}:00"))
}

fn pad2(part: &str) -> String {
    let part = part.trim();
    if part.len() >= 2 {
        part.to_string()
    } else {
        format!("0{part}")
    }
}

/// Assemble the `YYYY-MM-DDTHH:MM:SS` value the appointment service expects.
/// `time` must already be canonical (see [`normalize_to_hms`]).
pub fn combine_date_time(date: NaiveDate, time: &str) -> String {
    format!("{}T{}", date.format("%Y-%m-%d"), time)
}

/// Display form of a slot time: canonical `HH:MM:SS` values with zero
/// seconds lose the seconds suffix, everything else passes through.
pub fn pretty_time(time: &str) -> String {
    let s = time.trim();
    if NaiveTime::parse_from_str(s, "%H:%M:%S").is_ok() {
        if let Some(stripped) = s.strip_suffix(":00") {
            return stripped.to_string();
        }
    }
    s.to_string()
}
