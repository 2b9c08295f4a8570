#![forbid(unsafe_code)]
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::America::{Chicago, New_York};
use proptest::prelude::*;
use sked::{classify, overlaps, Interval, OverlapKind, SchedError};

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2015, 10, d, 0, 0, 0).unwrap()
}

fn iv(a: u32, b: u32) -> Interval {
    Interval::new(day(a), day(b)).unwrap()
}

#[test]
fn rejects_empty_or_reversed_range() {
    assert!(matches!(
        Interval::new(day(12), day(10)),
        Err(SchedError::InvalidRange)
    ));
    assert!(matches!(
        Interval::new(day(10), day(10)),
        Err(SchedError::InvalidRange)
    ));
}

#[test]
fn equality_ignores_time_zone() {
    let chicago = Interval::new(
        Chicago.with_ymd_and_hms(2015, 10, 10, 0, 0, 0).unwrap(),
        Chicago.with_ymd_and_hms(2015, 10, 12, 0, 0, 0).unwrap(),
    )
    .unwrap();
    let nyc = Interval::new(
        New_York.with_ymd_and_hms(2015, 10, 10, 1, 0, 0).unwrap(),
        New_York.with_ymd_and_hms(2015, 10, 12, 1, 0, 0).unwrap(),
    )
    .unwrap();
    assert_eq!(chicago, nyc);
    assert_eq!(classify(&chicago, &nyc), OverlapKind::Same);

    let later = Interval::new(
        New_York.with_ymd_and_hms(2015, 10, 10, 2, 0, 0).unwrap(),
        New_York.with_ymd_and_hms(2015, 10, 12, 2, 0, 0).unwrap(),
    )
    .unwrap();
    assert_ne!(chicago, later);
}

#[test]
fn touching_intervals_do_not_overlap() {
    let s = iv(10, 12);
    assert!(overlaps(&s, &iv(10, 12)));
    assert!(!overlaps(&s, &iv(8, 10)));
    assert!(!overlaps(&s, &iv(12, 15)));
    assert!(overlaps(&s, &iv(8, 11)));
    assert!(overlaps(&s, &iv(2, 20)));
}

#[test]
fn classifies_every_case() {
    let b = iv(10, 20);
    let cases = [
        (iv(1, 10), OverlapKind::Before),
        (iv(5, 15), OverlapKind::OverlapsStart),
        (iv(10, 15), OverlapKind::Prefix),
        (iv(10, 25), OverlapKind::EndsLater),
        (iv(12, 18), OverlapKind::Interior),
        (iv(10, 20), OverlapKind::Same),
        (iv(5, 25), OverlapKind::Subsumes),
        (iv(5, 20), OverlapKind::StartsEarlier),
        (iv(15, 20), OverlapKind::Suffix),
        (iv(15, 25), OverlapKind::OverlapsEnd),
        (iv(20, 25), OverlapKind::After),
    ];
    for (a, expected) in cases {
        assert_eq!(classify(&a, &b), expected, "{a} vs {b}");
    }
}

#[test]
fn setters_keep_end_after_start() {
    let mut s = iv(10, 20);
    assert!(matches!(s.set_end(day(10)), Err(SchedError::InvalidRange)));
    assert!(matches!(s.set_start(day(21)), Err(SchedError::InvalidRange)));
    assert_eq!(s, iv(10, 20));

    s.set_start(day(15)).unwrap();
    s.set_end(day(16)).unwrap();
    assert_eq!(s, iv(15, 16));
}

#[test]
fn deserializing_a_reversed_interval_fails() {
    let raw = r#"{"start":"2015-10-12T00:00:00Z","end":"2015-10-10T00:00:00Z"}"#;
    assert!(serde_json::from_str::<Interval>(raw).is_err());
}

/// Arbre de décision pris à la lettre, dans l'ordre des cas.
fn decision_tree(a: &Interval, b: &Interval) -> OverlapKind {
    let (sa, ea, sb, eb) = (a.start(), a.end(), b.start(), b.end());
    if ea <= sb {
        OverlapKind::Before
    } else if sa < sb && ea < eb {
        OverlapKind::OverlapsStart
    } else if sa == sb && ea < eb {
        OverlapKind::Prefix
    } else if sa == sb && ea > eb {
        OverlapKind::EndsLater
    } else if sa > sb && ea < eb {
        OverlapKind::Interior
    } else if a == b {
        OverlapKind::Same
    } else if sa < sb && ea > eb {
        OverlapKind::Subsumes
    } else if sa < sb && ea == eb {
        OverlapKind::StartsEarlier
    } else if sa > sb && ea == eb {
        OverlapKind::Suffix
    } else if sa < eb && ea > eb {
        OverlapKind::OverlapsEnd
    } else if sa >= eb {
        OverlapKind::After
    } else {
        unreachable!("uncovered combination: {a} vs {b}")
    }
}

fn interval_strategy() -> impl Strategy<Value = Interval> {
    (0i64..40, 1i64..20).prop_map(|(start, len)| {
        let hour = 3600;
        Interval::new(
            Utc.timestamp_opt(start * hour, 0).unwrap(),
            Utc.timestamp_opt((start + len) * hour, 0).unwrap(),
        )
        .unwrap()
    })
}

proptest! {
    #[test]
    fn classify_follows_the_decision_tree(a in interval_strategy(), b in interval_strategy()) {
        prop_assert_eq!(classify(&a, &b), decision_tree(&a, &b));
    }

    #[test]
    fn overlap_matches_classification(a in interval_strategy(), b in interval_strategy()) {
        prop_assert_eq!(overlaps(&a, &b), classify(&a, &b).is_overlap());
    }

    #[test]
    fn classification_is_antisymmetric(a in interval_strategy(), b in interval_strategy()) {
        prop_assert_eq!(classify(&b, &a), classify(&a, &b).inverse());
    }
}
