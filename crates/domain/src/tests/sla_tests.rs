// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::datetime;
use time::{Duration, Weekday};

use crate::{DueDates, SlaConfig, add_business_days, add_weeks, compute_due_dates};

#[test]
fn test_default_config_is_two_days_eight_weeks() {
    let config: SlaConfig = SlaConfig::default();

    assert_eq!(config.ack_sla_days, 2);
    assert_eq!(config.final_response_sla_weeks, 8);
}

#[test]
fn test_ack_due_skips_weekend_from_monday() {
    // Monday + 2 business days = Wednesday.
    let monday = datetime!(2024-01-01 00:00 UTC);

    let due: DueDates = compute_due_dates(monday, &SlaConfig::default()).unwrap();

    assert_eq!(due.ack_due_at.weekday(), Weekday::Wednesday);
    assert_eq!(due.ack_due_at, datetime!(2024-01-03 00:00 UTC));
}

#[test]
fn test_ack_due_skips_weekend_from_friday() {
    // Friday + 2 business days = Tuesday (Saturday and Sunday not counted).
    let friday = datetime!(2024-01-05 12:00 UTC);

    let due = add_business_days(friday, 2).unwrap();

    assert_eq!(due.weekday(), Weekday::Tuesday);
    assert_eq!(due, datetime!(2024-01-09 12:00 UTC));
}

#[test]
fn test_ack_due_from_saturday_counts_weekdays_only() {
    // Saturday + 1 business day = Monday.
    let saturday = datetime!(2024-01-06 08:00 UTC);

    let due = add_business_days(saturday, 1).unwrap();

    assert_eq!(due, datetime!(2024-01-08 08:00 UTC));
}

#[test]
fn test_ack_due_always_lands_on_a_business_day() {
    let start = datetime!(2024-01-01 00:00 UTC);
    for days in 1..30 {
        let due = add_business_days(start, days).unwrap();
        assert!(
            !matches!(due.weekday(), Weekday::Saturday | Weekday::Sunday),
            "ack due for {days} business days landed on {}",
            due.weekday()
        );
    }
}

#[test]
fn test_business_day_count_is_exact() {
    // Walking back: every added day between start and due is either a
    // weekday that was counted or a weekend day that was not.
    let start = datetime!(2024-01-01 00:00 UTC);
    for days in 1..30 {
        let due = add_business_days(start, days).unwrap();
        let mut cursor = start;
        let mut counted: u32 = 0;
        while cursor < due {
            cursor += Duration::days(1);
            if !matches!(cursor.weekday(), Weekday::Saturday | Weekday::Sunday) {
                counted += 1;
            }
        }
        assert_eq!(counted, days);
    }
}

#[test]
fn test_zero_business_days_is_identity() {
    let start = datetime!(2024-01-06 08:00 UTC);

    assert_eq!(add_business_days(start, 0).unwrap(), start);
}

#[test]
fn test_final_due_is_exact_calendar_weeks() {
    let received = datetime!(2024-01-01 00:00 UTC);

    let due: DueDates = compute_due_dates(received, &SlaConfig::default()).unwrap();

    assert_eq!(due.final_due_at - received, Duration::days(56));
}

#[test]
fn test_final_due_is_not_business_day_adjusted() {
    // 2024-01-06 is a Saturday; one week later is also a Saturday.
    let saturday = datetime!(2024-01-06 00:00 UTC);

    let due = add_weeks(saturday, 1).unwrap();

    assert_eq!(due.weekday(), Weekday::Saturday);
    assert_eq!(due - saturday, Duration::days(7));
}

#[test]
fn test_compute_due_dates_is_deterministic() {
    let received = datetime!(2025-06-17 14:30 UTC);
    let config = SlaConfig {
        ack_sla_days: 5,
        final_response_sla_weeks: 4,
    };

    let first = compute_due_dates(received, &config).unwrap();
    let second = compute_due_dates(received, &config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_compute_due_dates_preserves_time_of_day() {
    let received = datetime!(2024-01-01 09:45 UTC);

    let due: DueDates = compute_due_dates(received, &SlaConfig::default()).unwrap();

    assert_eq!(due.ack_due_at.time(), received.time());
    assert_eq!(due.final_due_at.time(), received.time());
}
