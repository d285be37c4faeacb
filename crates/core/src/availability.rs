//! # Availability Filtering
//!
//! This module decides which slots from an availability feed are actually
//! bookable at the moment the user is looking at them. The feed itself only
//! knows about existing appointments and opening hours; it has no notion of
//! "now", so slots earlier than the current wall-clock time still arrive
//! marked available when the queried date is today.
//!
//! The filter works in three steps:
//!
//! 1. Normalize every record to a `{time, available}` pair (a missing
//!    availability flag counts as available)
//! 2. When the queried date is the current date, drop every slot whose
//!    time-of-day is not strictly later than the current time-of-day
//! 3. Drop every slot explicitly flagged unavailable
//!
//! Input ordering is preserved: feeds are sorted ascending by time and the
//! filter never reorders. An empty result is meaningful to callers (they
//! surface a "no times available" notice instead of rendering nothing), so
//! the distinction is left to them via [`bookable_slots`]'s plain `Vec`
//! return plus the date comparison they already hold.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::models::time_slot::{SlotRecord, TimeSlot};

/// Minutes since midnight for a lenient `H:MM[:SS]` time string.
///
/// Returns `None` when the string does not lead with numeric hour and
/// minute components.
pub fn minutes_of_day(time: &str) -> Option<u32> {
    let mut parts = time.split(':');
    let hours: u32 = parts.next()?.trim().parse().ok()?;
    let minutes: u32 = parts.next()?.trim().parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Produce the ordered subset of `records` that can be booked right now.
///
/// `date` is the date being queried; `today` and `now` describe the current
/// wall clock and are injected by the caller. Slots on a future date pass
/// the time check unconditionally; on `today`, a slot survives only if its
/// time-of-day is strictly later than `now` (a slot whose time cannot be
/// parsed is dropped in that branch, since it cannot be compared).
pub fn bookable_slots(
    records: &[SlotRecord],
    date: NaiveDate,
    today: NaiveDate,
    now: NaiveTime,
) -> Vec<TimeSlot> {
    let current_minutes = now.hour() * 60 + now.minute();
    let is_today = date == today;

    records
        .iter()
        .map(TimeSlot::from)
        .filter(|slot| {
            if !is_today {
                return true;
            }
            match minutes_of_day(&slot.time) {
                Some(minutes) => minutes > current_minutes,
                None => false,
            }
        })
        .filter(|slot| slot.available)
        .collect()
}
