#![forbid(unsafe_code)]
use chrono::{Duration, TimeZone, Utc, Weekday};
use chrono_tz::America::Chicago;
use sked::{generate_weekly_shifts, last_weekday, SchedError};

#[test]
fn last_weekday_goes_back_to_midnight() {
    let start = Chicago.with_ymd_and_hms(2015, 10, 11, 22, 3, 0).unwrap();
    let wed = last_weekday(&start, Weekday::Wed).unwrap();
    assert_eq!(wed, Chicago.with_ymd_and_hms(2015, 10, 7, 0, 0, 0).unwrap());
}

#[test]
fn last_weekday_same_day() {
    let start = Chicago.with_ymd_and_hms(2015, 10, 7, 22, 3, 0).unwrap();
    let wed = last_weekday(&start, Weekday::Wed).unwrap();
    assert_eq!(wed, Chicago.with_ymd_and_hms(2015, 10, 7, 0, 0, 0).unwrap());
}

#[test]
fn weekly_shifts_across_dst_change() {
    let from = Chicago.with_ymd_and_hms(2015, 10, 11, 22, 3, 0).unwrap();
    let until = Chicago.with_ymd_and_hms(2015, 11, 5, 14, 1, 0).unwrap();
    let shifts = generate_weekly_shifts(&from, &until, Weekday::Wed).unwrap();
    assert_eq!(shifts.len(), 5);

    let expected = [
        (2015, 10, 7),
        (2015, 10, 14),
        (2015, 10, 21),
        (2015, 10, 28),
        (2015, 11, 4),
        (2015, 11, 11),
    ]
    .map(|(y, m, d)| Chicago.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap());

    for (i, shift) in shifts.iter().enumerate() {
        assert_eq!(shift.start(), expected[i], "start of shift {i}");
        assert_eq!(shift.end(), expected[i + 1], "end of shift {i}");
    }
    for pair in shifts.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start());
    }
    // 2015-11-01 : retour à l'heure d'hiver, la semaine dure une heure de plus
    assert_eq!(shifts[3].end() - shifts[3].start(), Duration::hours(169));
}

#[test]
fn single_shift_when_until_falls_in_first_week() {
    let from = Utc.with_ymd_and_hms(2015, 10, 7, 0, 0, 0).unwrap();
    let until = Utc.with_ymd_and_hms(2015, 10, 9, 0, 0, 0).unwrap();
    let shifts = generate_weekly_shifts(&from, &until, Weekday::Wed).unwrap();
    assert_eq!(shifts.len(), 1);
    assert_eq!(shifts[0].end(), Utc.with_ymd_and_hms(2015, 10, 14, 0, 0, 0).unwrap());
}

#[test]
fn rejects_until_before_from() {
    let from = Utc.with_ymd_and_hms(2015, 10, 7, 0, 0, 0).unwrap();
    let until = Utc.with_ymd_and_hms(2015, 10, 1, 0, 0, 0).unwrap();
    assert!(matches!(
        generate_weekly_shifts(&from, &until, Weekday::Wed),
        Err(SchedError::InvalidRange)
    ));
}
