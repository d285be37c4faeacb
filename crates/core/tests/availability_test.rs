use barberbook_core::availability::{bookable_slots, minutes_of_day};
use barberbook_core::models::time_slot::SlotRecord;
use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn bare(times: &[&str]) -> Vec<SlotRecord> {
    times.iter().map(|t| SlotRecord::Time(t.to_string())).collect()
}

fn detailed(time: &str, available: Option<bool>) -> SlotRecord {
    SlotRecord::Detailed {
        time: time.to_string(),
        available,
        reason: None,
    }
}

#[test]
fn future_date_keeps_every_available_slot_in_order() {
    let records = vec![
        bare(&["09:00"]).remove(0),
        detailed("09:30", Some(false)),
        detailed("10:00", Some(true)),
        detailed("10:30", None),
    ];

    let result = bookable_slots(
        &records,
        date(2025, 11, 18),
        date(2025, 11, 17),
        time(10, 0),
    );

    let times: Vec<&str> = result.iter().map(|s| s.time.as_str()).collect();
    assert_eq!(times, vec!["09:00", "10:00", "10:30"]);
}

#[test]
fn today_drops_slots_at_or_before_current_time() {
    let records = bare(&["09:00", "09:30", "10:00", "10:30", "14:00"]);

    let result = bookable_slots(
        &records,
        date(2025, 11, 17),
        date(2025, 11, 17),
        time(10, 0),
    );

    let times: Vec<&str> = result.iter().map(|s| s.time.as_str()).collect();
    // 10:00 is not strictly later than 10:00, so it goes too.
    assert_eq!(times, vec!["10:30", "14:00"]);
}

#[test]
fn morning_slots_gone_by_ten_leaves_only_afternoon() {
    let records = bare(&["09:00", "09:30", "14:00"]);

    let result = bookable_slots(
        &records,
        date(2025, 11, 17),
        date(2025, 11, 17),
        time(10, 0),
    );

    let times: Vec<&str> = result.iter().map(|s| s.time.as_str()).collect();
    assert_eq!(times, vec!["14:00"]);
}

#[test]
fn unavailable_slots_are_dropped_regardless_of_date() {
    let records = vec![
        detailed("11:00", Some(false)),
        detailed("11:30", Some(true)),
    ];

    let result = bookable_slots(
        &records,
        date(2025, 11, 17),
        date(2025, 11, 17),
        time(10, 0),
    );

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].time, "11:30");
    assert!(result[0].available);
}

#[test]
fn unparseable_time_is_dropped_when_filtering_today() {
    let records = vec![detailed("soon", None), detailed("23:00", None)];

    let today = bookable_slots(
        &records,
        date(2025, 11, 17),
        date(2025, 11, 17),
        time(10, 0),
    );
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].time, "23:00");

    // On a future date no time comparison happens, so it survives.
    let future = bookable_slots(
        &records,
        date(2025, 11, 18),
        date(2025, 11, 17),
        time(10, 0),
    );
    assert_eq!(future.len(), 2);
}

#[test]
fn empty_feed_yields_empty_result() {
    let result = bookable_slots(&[], date(2025, 11, 17), date(2025, 11, 17), time(10, 0));
    assert!(result.is_empty());
}

#[test]
fn all_slots_in_the_past_yields_empty_result() {
    let records = bare(&["08:00", "08:30", "09:00"]);
    let result = bookable_slots(
        &records,
        date(2025, 11, 17),
        date(2025, 11, 17),
        time(17, 45),
    );
    assert!(result.is_empty());
}

#[rstest]
#[case("09:00", Some(540))]
#[case("00:00", Some(0))]
#[case("23:59", Some(1439))]
#[case("9:30", Some(570))]
#[case("14:00:00", Some(840))]
#[case("", None)]
#[case("soon", None)]
#[case("12", None)]
fn minutes_of_day_cases(#[case] input: &str, #[case] expected: Option<u32>) {
    assert_eq!(minutes_of_day(input), expected);
}
