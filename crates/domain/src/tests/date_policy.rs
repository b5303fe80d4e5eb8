// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::date;
use crate::{
    BusinessCalendar, DateError, RangeViolation, ScheduleDate, check_editable, is_past,
    is_within_editable_window, validate_date,
};
use chrono::{TimeZone, Utc};

#[test]
fn test_validate_accepts_plain_date() {
    let parsed: ScheduleDate = validate_date("2024-06-12").unwrap();
    assert_eq!(parsed.to_string(), "2024-06-12");
}

#[test]
fn test_validate_trims_whitespace() {
    let parsed: ScheduleDate = validate_date("  2024-06-12 ").unwrap();
    assert_eq!(parsed.to_string(), "2024-06-12");
}

#[test]
fn test_validate_uses_civil_date_of_offset_timestamp() {
    // 23:30 in Chicago is already the next day in UTC; the civil date wins.
    let parsed: ScheduleDate = validate_date("2024-06-12T23:30:00-05:00").unwrap();
    assert_eq!(parsed.to_string(), "2024-06-12");
}

#[test]
fn test_validate_keeps_early_morning_offset_on_its_own_day() {
    let parsed: ScheduleDate = validate_date("2024-06-12T00:30:00+09:00").unwrap();
    assert_eq!(parsed.to_string(), "2024-06-12");
}

#[test]
fn test_validate_accepts_naive_timestamp() {
    let parsed: ScheduleDate = validate_date("2024-06-12T00:15:00").unwrap();
    assert_eq!(parsed.to_string(), "2024-06-12");
}

#[test]
fn test_validate_rejects_garbage() {
    let result: Result<ScheduleDate, DateError> = validate_date("next tuesday");
    assert!(matches!(result, Err(DateError::InvalidFormat { .. })));
}

#[test]
fn test_validate_rejects_impossible_day() {
    let result: Result<ScheduleDate, DateError> = validate_date("2024-02-30");
    assert!(matches!(result, Err(DateError::InvalidFormat { .. })));
}

#[test]
fn test_validate_rejects_empty() {
    assert!(matches!(
        validate_date(""),
        Err(DateError::InvalidFormat { .. })
    ));
}

#[test]
fn test_editable_window_is_inclusive_on_both_ends() {
    let today: ScheduleDate = date("2024-06-10");
    assert!(is_within_editable_window(date("2024-06-10"), today));
    assert!(is_within_editable_window(date("2024-06-17"), today));
    assert!(!is_within_editable_window(date("2024-06-18"), today));
    assert!(!is_within_editable_window(date("2024-06-09"), today));
}

#[test]
fn test_check_editable_distinguishes_past_and_future() {
    let today: ScheduleDate = date("2024-06-10");

    let past: Result<(), DateError> = check_editable(date("2024-06-09"), today);
    assert!(matches!(
        past,
        Err(DateError::OutOfRange {
            violation: RangeViolation::Past,
            ..
        })
    ));

    let future: Result<(), DateError> = check_editable(date("2024-06-20"), today);
    assert!(matches!(
        future,
        Err(DateError::OutOfRange {
            violation: RangeViolation::Future,
            ..
        })
    ));

    assert!(check_editable(date("2024-06-12"), today).is_ok());
}

#[test]
fn test_editable_window_crosses_month_boundary() {
    let today: ScheduleDate = date("2024-06-28");
    assert!(is_within_editable_window(date("2024-07-05"), today));
    assert!(!is_within_editable_window(date("2024-07-06"), today));
}

#[test]
fn test_is_past_only_for_strictly_earlier_dates() {
    let today: ScheduleDate = date("2024-06-10");
    assert!(is_past(date("2024-06-09"), today));
    assert!(!is_past(date("2024-06-10"), today));
    assert!(!is_past(date("2024-06-11"), today));
}

#[test]
fn test_next_day_rolls_over_year() {
    assert_eq!(date("2024-12-31").next_day().unwrap(), date("2025-01-01"));
}

#[test]
fn test_calendar_uses_business_timezone() {
    let calendar: BusinessCalendar = BusinessCalendar::from_timezone_name("America/Chicago").unwrap();
    // 03:00 UTC on June 11 is still the evening of June 10 in Chicago.
    let instant = Utc.with_ymd_and_hms(2024, 6, 11, 3, 0, 0).unwrap();
    assert_eq!(calendar.date_of(instant), date("2024-06-10"));
}

#[test]
fn test_calendar_fixed_today() {
    let calendar: BusinessCalendar =
        BusinessCalendar::default().with_fixed_today(date("2024-06-10"));
    assert_eq!(calendar.today(), date("2024-06-10"));
}

#[test]
fn test_calendar_rejects_unknown_timezone() {
    let result = BusinessCalendar::from_timezone_name("Mars/Olympus_Mons");
    assert!(matches!(result, Err(DateError::InvalidTimezone(_))));
}

#[test]
fn test_schedule_date_serde_uses_canonical_string() {
    let json: String = serde_json::to_string(&date("2024-06-10")).unwrap();
    assert_eq!(json, "\"2024-06-10\"");

    let back: ScheduleDate = serde_json::from_str("\"2024-06-10T08:00:00Z\"").unwrap();
    assert_eq!(back, date("2024-06-10"));
}
